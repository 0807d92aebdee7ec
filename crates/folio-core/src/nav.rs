//! Bottom tab shell.
//!
//! Exactly one registered route is active at a time. A tap on an inactive
//! tab emits a cancelable [`TabPress`] to every listener before the shell
//! switches; a tap on the active tab does nothing at all.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Icon shown for any route the icon table does not know.
pub const FALLBACK_ICON: &str = "circle";

/// A destination in the tab shell
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TabRoute {
    Home,
    Skills,
    Projects,
    Certifications,
}

impl TabRoute {
    /// Registration order of the standard shell
    pub const ALL: [TabRoute; 4] = [
        TabRoute::Home,
        TabRoute::Skills,
        TabRoute::Projects,
        TabRoute::Certifications,
    ];

    /// Route name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            TabRoute::Home => "Home",
            TabRoute::Skills => "Skills",
            TabRoute::Projects => "Projects",
            TabRoute::Certifications => "Certifications",
        }
    }

    pub fn icon(&self) -> &'static str {
        icon_for(&RouteName::Known(*self))
    }
}

impl fmt::Display for TabRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A route name as it arrives from outside the type system
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RouteName {
    Known(TabRoute),
    Unknown(String),
}

impl RouteName {
    pub fn parse(name: &str) -> Self {
        TabRoute::ALL
            .into_iter()
            .find(|route| route.name() == name)
            .map(RouteName::Known)
            .unwrap_or_else(|| RouteName::Unknown(name.to_string()))
    }
}

/// Icon identifier for a route.
pub fn icon_for(route: &RouteName) -> &'static str {
    match route {
        RouteName::Known(TabRoute::Home) => "account",
        RouteName::Known(TabRoute::Skills) => "code-braces",
        RouteName::Known(TabRoute::Projects) => "folder-multiple",
        RouteName::Known(TabRoute::Certifications) => "certificate",
        RouteName::Unknown(_) => FALLBACK_ICON,
    }
}

/// Icon identifier for a raw route name. Never fails.
pub fn icon_for_route_name(name: &str) -> &'static str {
    icon_for(&RouteName::parse(name))
}

/// Pre-navigation event handed to listeners.
#[derive(Debug)]
pub struct TabPress {
    target: TabRoute,
    default_prevented: bool,
}

impl TabPress {
    fn new(target: TabRoute) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn target(&self) -> TabRoute {
        self.target
    }

    /// Cancel the navigation this press would cause
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Listener invoked for every press on an inactive tab
pub type TabListener = Rc<dyn Fn(&mut TabPress)>;

/// What a tap did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TapOutcome {
    /// The active route changed
    Navigated { from: TabRoute, to: TabRoute },
    /// The tapped route was already active; nothing was emitted
    AlreadyActive,
    /// A listener prevented the navigation
    Prevented,
    /// The route is not registered with this shell
    Unregistered,
}

/// What the tab bar needs to draw one tab
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabDescriptor {
    pub index: usize,
    pub route: TabRoute,
    pub icon: &'static str,
    pub focused: bool,
}

/// Active-route state machine behind the bottom tab bar.
#[derive(Clone)]
pub struct TabShell {
    routes: Vec<TabRoute>,
    active: usize,
    listeners: Vec<TabListener>,
}

impl TabShell {
    /// Build a shell over `routes`; the first one starts active.
    pub fn new(routes: Vec<TabRoute>) -> FolioResult<Self> {
        if routes.is_empty() {
            return Err(FolioError::EmptyRouteSet);
        }
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].contains(route) {
                return Err(FolioError::DuplicateRoute(route.name().to_string()));
            }
        }

        Ok(Self {
            routes,
            active: 0,
            listeners: Vec::new(),
        })
    }

    /// Home, Skills, Projects, Certifications
    pub fn standard() -> Self {
        Self {
            routes: TabRoute::ALL.to_vec(),
            active: 0,
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: TabListener) {
        self.listeners.push(listener);
    }

    pub fn routes(&self) -> &[TabRoute] {
        &self.routes
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> TabRoute {
        self.routes[self.active]
    }

    pub fn is_active(&self, route: TabRoute) -> bool {
        self.active() == route
    }

    pub fn descriptors(&self) -> Vec<TabDescriptor> {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| TabDescriptor {
                index,
                route: *route,
                icon: route.icon(),
                focused: index == self.active,
            })
            .collect()
    }

    /// Handle a tap on a tab.
    pub fn tap(&mut self, route: TabRoute) -> TapOutcome {
        let Some(index) = self.index_of(route) else {
            tracing::warn!(route = %route, "Tap on unregistered route");
            return TapOutcome::Unregistered;
        };
        if index == self.active {
            return TapOutcome::AlreadyActive;
        }

        let mut press = TabPress::new(route);
        for listener in &self.listeners {
            listener(&mut press);
        }
        if press.is_default_prevented() {
            tracing::debug!(route = %route, "Tab press prevented by listener");
            return TapOutcome::Prevented;
        }

        self.switch_to(index)
    }

    /// Handle a tap addressed by route name.
    pub fn tap_named(&mut self, name: &str) -> TapOutcome {
        match RouteName::parse(name) {
            RouteName::Known(route) => self.tap(route),
            RouteName::Unknown(name) => {
                tracing::warn!(route = %name, "Tap on unknown route name");
                TapOutcome::Unregistered
            }
        }
    }

    /// Navigate without a press event (used by in-screen links).
    pub fn navigate(&mut self, route: TabRoute) -> TapOutcome {
        match self.index_of(route) {
            None => TapOutcome::Unregistered,
            Some(index) if index == self.active => TapOutcome::AlreadyActive,
            Some(index) => self.switch_to(index),
        }
    }

    fn index_of(&self, route: TabRoute) -> Option<usize> {
        self.routes.iter().position(|r| *r == route)
    }

    fn switch_to(&mut self, index: usize) -> TapOutcome {
        let from = self.active();
        self.active = index;
        let to = self.active();
        tracing::info!(%from, %to, "Tab changed");
        TapOutcome::Navigated { from, to }
    }
}

impl Default for TabShell {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for TabShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabShell")
            .field("routes", &self.routes)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_icon_table() {
        assert_eq!(icon_for_route_name("Home"), "account");
        assert_eq!(icon_for_route_name("Skills"), "code-braces");
        assert_eq!(icon_for_route_name("Projects"), "folder-multiple");
        assert_eq!(icon_for_route_name("Certifications"), "certificate");
        assert_eq!(icon_for_route_name("Settings"), FALLBACK_ICON);
        assert_eq!(icon_for_route_name("home"), FALLBACK_ICON);
    }

    #[test]
    fn test_initial_state() {
        let shell = TabShell::standard();
        assert_eq!(shell.active_index(), 0);
        assert_eq!(shell.active(), TabRoute::Home);
    }

    #[test]
    fn test_new_rejects_empty_and_duplicates() {
        assert_eq!(TabShell::new(vec![]).unwrap_err(), FolioError::EmptyRouteSet);
        assert_eq!(
            TabShell::new(vec![TabRoute::Home, TabRoute::Skills, TabRoute::Home]).unwrap_err(),
            FolioError::DuplicateRoute("Home".to_string())
        );
    }

    #[test]
    fn test_tap_active_emits_nothing() {
        let mut shell = TabShell::standard();
        let presses = Rc::new(Cell::new(0));
        let counter = presses.clone();
        shell.add_listener(Rc::new(move |_| counter.set(counter.get() + 1)));

        assert_eq!(shell.tap(TabRoute::Home), TapOutcome::AlreadyActive);
        assert_eq!(presses.get(), 0);

        assert_eq!(
            shell.tap(TabRoute::Projects),
            TapOutcome::Navigated {
                from: TabRoute::Home,
                to: TabRoute::Projects
            }
        );
        assert_eq!(presses.get(), 1);
    }

    #[test]
    fn test_listener_can_prevent() {
        let mut shell = TabShell::standard();
        shell.add_listener(Rc::new(|press: &mut TabPress| {
            if press.target() == TabRoute::Certifications {
                press.prevent_default();
            }
        }));

        assert_eq!(shell.tap(TabRoute::Certifications), TapOutcome::Prevented);
        assert_eq!(shell.active(), TabRoute::Home);
        assert!(matches!(shell.tap(TabRoute::Skills), TapOutcome::Navigated { .. }));
    }

    #[test]
    fn test_unregistered_routes() {
        let mut shell = TabShell::new(vec![TabRoute::Home, TabRoute::Skills]).unwrap();
        assert_eq!(shell.tap(TabRoute::Projects), TapOutcome::Unregistered);
        assert_eq!(shell.tap_named("Nowhere"), TapOutcome::Unregistered);
        assert_eq!(shell.navigate(TabRoute::Certifications), TapOutcome::Unregistered);
        assert_eq!(shell.active(), TabRoute::Home);
    }

    #[test]
    fn test_navigate_skips_listeners() {
        let mut shell = TabShell::standard();
        shell.add_listener(Rc::new(|press: &mut TabPress| press.prevent_default()));

        assert!(matches!(shell.navigate(TabRoute::Skills), TapOutcome::Navigated { .. }));
        assert_eq!(shell.navigate(TabRoute::Skills), TapOutcome::AlreadyActive);
        assert_eq!(shell.tap(TabRoute::Home), TapOutcome::Prevented);
    }

    #[test]
    fn test_descriptors_mark_one_focused() {
        let mut shell = TabShell::standard();
        shell.tap(TabRoute::Projects);

        let descriptors = shell.descriptors();
        assert_eq!(descriptors.len(), 4);
        assert_eq!(descriptors.iter().filter(|d| d.focused).count(), 1);
        assert_eq!(descriptors[2].route, TabRoute::Projects);
        assert!(descriptors[2].focused);
        assert_eq!(descriptors[3].icon, "certificate");
    }
}
