//! Screen and section headers.

use dioxus::prelude::*;
use folio_ui::Icon;

/// Gradient behind a header icon
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum GradientKind {
    #[default]
    Red,
    Accent,
}

impl GradientKind {
    fn class(&self) -> &'static str {
        match self {
            GradientKind::Red => "gradient-red",
            GradientKind::Accent => "gradient-accent",
        }
    }
}

/// Centered page header: gradient icon tile, title and subtitle.
#[component]
pub fn ScreenHeader(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[props(default)] gradient: GradientKind,
) -> Element {
    let gradient_class = gradient.class();

    rsx! {
        header { class: "screen-header",
            div { class: "screen-header__icon {gradient_class}",
                Icon { name: icon, size: 32, color: folio_core::theme::WHITE }
            }
            h1 { class: "screen-header__title", "{title}" }
            p { class: "screen-header__subtitle", "{subtitle}" }
        }
    }
}

/// Left-aligned section title with a red icon.
#[component]
pub fn SectionHeader(icon: &'static str, title: &'static str) -> Element {
    rsx! {
        div { class: "section-header",
            Icon { name: icon, size: 24, color: folio_core::theme::PRIMARY }
            h2 { class: "section-title", "{title}" }
        }
    }
}
