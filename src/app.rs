use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{TabPress, TabRoute, TabShell, ThemeToggle};

use crate::components::TabLayout;
use crate::context::system_color_mode;
use crate::pages::{Certifications, Home, Projects, Sampler, Skills, Stories};
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Résumé routes, all rendered inside the tab layout.
///
/// - `/` - Profile, bio and links to the other tabs
/// - `/skills` - Skill bars and education
/// - `/projects` - Project cards
/// - `/certifications` - Credentials and courses in progress
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(TabLayout)]
        #[route("/")]
        Home {},
        #[route("/skills")]
        Skills {},
        #[route("/projects")]
        Projects {},
        #[route("/certifications")]
        Certifications {},
}

impl From<TabRoute> for Route {
    fn from(route: TabRoute) -> Self {
        match route {
            TabRoute::Home => Route::Home {},
            TabRoute::Skills => Route::Skills {},
            TabRoute::Projects => Route::Projects {},
            TabRoute::Certifications => Route::Certifications {},
        }
    }
}

/// Résumé root.
///
/// Provides global styles, the tab shell and routing.
#[component]
pub fn ResumeApp() -> Element {
    let shell: Signal<TabShell> = use_signal(|| {
        let mut shell = TabShell::standard();
        shell.add_listener(Rc::new(|press: &mut TabPress| {
            tracing::debug!(target_route = %press.target(), "Tab pressed");
        }));
        shell
    });

    use_context_provider(|| shell);

    let variables = root_variables();

    rsx! {
        style { "{variables}" }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Story feed root. Owns the theme override and hands it to the feed.
#[component]
pub fn StoriesApp() -> Element {
    let toggle = use_signal(ThemeToggle::new);
    let variables = root_variables();

    rsx! {
        style { "{variables}" }
        style { {GLOBAL_STYLES} }
        Stories { toggle, system: system_color_mode() }
    }
}

/// Button sampler root.
#[component]
pub fn SamplerApp() -> Element {
    let variables = root_variables();

    rsx! {
        style { "{variables}" }
        style { {GLOBAL_STYLES} }
        Sampler {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_a_route() {
        let paths: Vec<String> = TabRoute::ALL
            .into_iter()
            .map(|tab| Route::from(tab).to_string())
            .collect();
        assert_eq!(paths, vec!["/", "/skills", "/projects", "/certifications"]);
    }
}
