//! Context providers for Folio.
//!
//! Launch options come from the command line; the tab shell is provided by
//! the résumé root and reached through [`use_tab_navigator`].
//!
//! ## Usage
//!
//! ```ignore
//! // In a tab screen
//! let tabs = use_tab_navigator();
//! tabs.navigate(TabRoute::Projects);
//! ```

use dioxus::prelude::*;
use folio_core::{ColorMode, TabRoute, TabShell, TapOutcome};

use crate::app::Route;

/// Options parsed from the command line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaunchOptions {
    /// Scheme reported as the system setting; `None` means unknown
    pub system_theme: Option<ColorMode>,
}

/// The system color scheme as seen by the story feed.
pub fn system_color_mode() -> Option<ColorMode> {
    crate::launch_options().system_theme
}

/// Hook to access the tab shell from context.
pub fn use_tab_shell() -> Signal<TabShell> {
    use_context::<Signal<TabShell>>()
}

/// Drives the tab shell and keeps the router in step with it.
#[derive(Clone, Copy)]
pub struct TabNavigator {
    shell: Signal<TabShell>,
    router: Navigator,
}

impl TabNavigator {
    /// A tap on a tab bar item.
    pub fn tap(mut self, route: TabRoute) {
        let outcome = self.shell.write().tap(route);
        self.follow(outcome);
    }

    /// A fire-and-forget navigation command from inside a screen.
    pub fn navigate(mut self, route: TabRoute) {
        let outcome = self.shell.write().navigate(route);
        self.follow(outcome);
    }

    fn follow(&self, outcome: TapOutcome) {
        if let TapOutcome::Navigated { to, .. } = outcome {
            self.router.replace(Route::from(to));
        }
    }
}

/// Hook returning a [`TabNavigator`] for the current router.
pub fn use_tab_navigator() -> TabNavigator {
    TabNavigator {
        shell: use_tab_shell(),
        router: use_navigator(),
    }
}
