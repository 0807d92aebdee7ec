//! Home page - profile, bio and shortcuts to the other tabs.

use dioxus::prelude::*;
use folio_core::fixtures::{CERTIFICATIONS, PROFILE, PROJECTS, SKILLS};
use folio_core::format::at_least;
use folio_core::theme::{PRIMARY, TEXT_SECONDARY, WHITE};
use folio_core::{CardVariant, ExploreLink};
use folio_ui::{GlassCard, Icon};

use crate::context::use_tab_navigator;

/// Home page component.
///
/// The explore cards send navigation commands to the tab shell.
#[component]
pub fn Home() -> Element {
    let monogram = PROFILE.monogram();

    let stats = [
        (at_least(PROJECTS.len()), "Projects", CardVariant::Red),
        (at_least(SKILLS.len()), "Skills", CardVariant::Light),
        (at_least(CERTIFICATIONS.len()), "Certs", CardVariant::Red),
    ];

    rsx! {
        div { class: "screen-scroll gradient-background",
            section { class: "profile-section",
                div { class: "photo-ring gradient-red",
                    div { class: "photo-inner",
                        span { class: "photo-monogram", "{monogram}" }
                    }
                }
                h1 { class: "profile-name", "{PROFILE.name}" }
                div { class: "title-badge gradient-accent",
                    span { class: "title-badge__text", "{PROFILE.headline}" }
                }
            }

            GlassCard { variant: CardVariant::Dark, class: "bio-card",
                div { class: "card-row",
                    Icon { name: "account-details", size: 24, color: PRIMARY }
                    h3 { class: "card-title", "About Me" }
                }
                p { class: "bio-text", "{PROFILE.bio}" }
            }

            div { class: "stats-row",
                for (value, label, variant) in stats {
                    GlassCard { variant, class: "stat-card",
                        div { class: "stat-number", "{value}" }
                        div { class: "stat-label", "{label}" }
                    }
                }
            }

            h2 { class: "section-title section-title--standalone", "Explore" }
            for link in PROFILE.explore.iter() {
                ExploreCard { link: *link }
            }

            GlassCard { variant: CardVariant::Dark, class: "contact-card",
                h3 { class: "contact-title", "Get In Touch" }
                div { class: "contact-icons",
                    for contact in PROFILE.contacts.iter() {
                        button {
                            class: "contact-icon-btn gradient-red",
                            "aria-label": "{contact.label}",
                            Icon { name: contact.icon, size: 22, color: WHITE }
                        }
                    }
                }
            }

            div { class: "bottom-spacer" }
        }
    }
}

/// Shortcut card to another tab.
#[component]
fn ExploreCard(link: ExploreLink) -> Element {
    let tabs = use_tab_navigator();
    let route = link.route;

    // Red cards invert the icon tile: white tile, red glyph
    let (tile_class, icon_color, chevron_color) = match link.variant {
        CardVariant::Red => ("nav-icon-bg nav-icon-bg--white", PRIMARY, WHITE),
        CardVariant::Light => ("nav-icon-bg gradient-accent", WHITE, TEXT_SECONDARY),
        CardVariant::Dark => ("nav-icon-bg gradient-red", WHITE, TEXT_SECONDARY),
    };

    rsx! {
        div {
            class: "nav-card-touch",
            role: "link",
            onclick: move |_| tabs.navigate(route),

            GlassCard { variant: link.variant, class: "nav-card",
                div { class: "nav-card__content",
                    div { class: "{tile_class}",
                        Icon { name: link.icon, size: 28, color: icon_color }
                    }
                    div { class: "nav-card__text",
                        div { class: "nav-card__title", "{link.title}" }
                        div { class: "nav-card__subtitle", "{link.subtitle}" }
                    }
                    Icon { name: "chevron-right", size: 24, color: chevron_color }
                }
            }
        }
    }
}
