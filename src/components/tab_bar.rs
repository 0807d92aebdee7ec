//! Tab Bar Component
//!
//! Floating bottom bar for the résumé screens. The active tab sits in a
//! red gradient pill; inactive tabs get a plain circle and a touch area.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_tab_navigator, use_tab_shell};

/// Layout wrapping every résumé route: the routed screen plus the tab bar.
#[component]
pub fn TabLayout() -> Element {
    rsx! {
        div { class: "screen-root",
            main { class: "screen",
                Outlet::<Route> {}
            }
            TabBar {}
        }
    }
}

/// Bottom tab bar
///
/// Shows: Home | Skills | Projects | Certifications
#[component]
pub fn TabBar() -> Element {
    let shell = use_tab_shell();
    let tabs = use_tab_navigator();
    let descriptors = shell.read().descriptors();

    rsx! {
        nav { class: "tab-bar-container",
            div { class: "tab-bar-blur" }
            div { class: "tab-bar",
                for tab in descriptors {
                    div { key: "{tab.route}", class: "tab-item",
                        if tab.focused {
                            div { class: "tab-active-bg", "aria-current": "page",
                                {render_tab_icon(tab.icon, 24)}
                            }
                        } else {
                            div { class: "tab-inactive-bg",
                                {render_tab_icon(tab.icon, 22)}
                            }
                            div {
                                class: "tab-touch-area",
                                role: "button",
                                "aria-label": "{tab.route}",
                                onclick: move |_| tabs.tap(tab.route),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Render a Lucide-style icon for a tab icon identifier.
///
/// Identifiers without a drawing get a plain circle.
fn render_tab_icon(icon: &str, size: u16) -> Element {
    match icon {
        "account" => rsx! {
            // Lucide user icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "5" }
                path { d: "M20 21a8 8 0 0 0-16 0" }
            }
        },
        "code-braces" => rsx! {
            // Lucide code icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                polyline { points: "16 18 22 12 16 6" }
                polyline { points: "8 6 2 12 8 18" }
            }
        },
        "folder-multiple" => rsx! {
            // Lucide folders icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 17a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3.9a2 2 0 0 1-1.69-.9l-.81-1.2a2 2 0 0 0-1.67-.9H8a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2Z" }
                path { d: "M2 8v11a2 2 0 0 0 2 2h14" }
            }
        },
        "certificate" => rsx! {
            // Lucide award icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "6" }
                path { d: "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" }
            }
        },
        _ => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "{size}",
                height: "{size}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    }
}
