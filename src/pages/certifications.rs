//! Certifications page - summary, credential cards and courses in progress.

use dioxus::prelude::*;
use folio_core::fixtures::{CERTIFICATIONS, IN_PROGRESS};
use folio_core::theme::{PRIMARY, SECONDARY, TEXT_SECONDARY, WHITE};
use folio_core::{CardVariant, Certification, CertificationSummary};
use folio_ui::{Button, ButtonVariant, GlassCard, Icon, ProgressBar, TagList};

use crate::components::{ScreenHeader, SectionHeader};

#[component]
pub fn Certifications() -> Element {
    let summary = CertificationSummary::of(CERTIFICATIONS);

    rsx! {
        div { class: "screen-scroll gradient-background",
            ScreenHeader {
                icon: "certificate",
                title: "Certifications",
                subtitle: "Professional credentials & achievements",
            }

            GlassCard { variant: CardVariant::Red, class: "summary-card",
                div { class: "summary",
                    div { class: "summary__item",
                        Icon { name: "medal", size: 28, color: WHITE }
                        div { class: "summary__number", "{summary.total}" }
                        div { class: "summary__label", "Certifications" }
                    }
                    div { class: "summary__divider" }
                    div { class: "summary__item",
                        Icon { name: "shield-star", size: 28, color: WHITE }
                        div { class: "summary__number", "{summary.top_issuers}" }
                        div { class: "summary__label", "Top Issuers" }
                    }
                    div { class: "summary__divider" }
                    div { class: "summary__item",
                        Icon { name: "trending-up", size: 28, color: WHITE }
                        div { class: "summary__number", "Active" }
                        div { class: "summary__label", "Learning" }
                    }
                }
            }

            section { class: "section",
                SectionHeader { icon: "trophy-variant", title: "My Credentials" }
                for cert in CERTIFICATIONS.iter() {
                    CertificationCard { key: "{cert.id}", cert: *cert }
                }
            }

            section { class: "section",
                div { class: "section-header",
                    Icon { name: "progress-clock", size: 24, color: SECONDARY }
                    h2 { class: "section-title", "Currently Pursuing" }
                }
                GlassCard { variant: CardVariant::Dark, class: "in-progress-card",
                    for course in IN_PROGRESS.iter() {
                        div { class: "in-progress",
                            div { class: "in-progress__row",
                                div { class: "in-progress__icon",
                                    Icon { name: course.icon, size: 24, color: course.icon_color }
                                }
                                div { class: "in-progress__info",
                                    div { class: "in-progress__title", "{course.title}" }
                                    div { class: "in-progress__issuer", "{course.issuer}" }
                                }
                                span { class: "progress-badge", "{course.progress}%" }
                            }
                            ProgressBar { percent: course.progress }
                        }
                    }
                }
            }

            div { class: "bottom-spacer" }
        }
    }
}

#[component]
fn CertificationCard(cert: Certification) -> Element {
    // 8-digit hex: the icon color at 1/8 opacity
    let tile_css = format!("background-color: {}20;", cert.icon_color);

    rsx! {
        GlassCard { variant: cert.variant, class: "cert-card",
            div { class: "cert-header",
                div { class: "cert-icon", style: "{tile_css}",
                    Icon { name: cert.icon, size: 36, color: cert.icon_color }
                }
                div { class: "cert-badge",
                    Icon { name: "shield-check", size: 14, color: PRIMARY }
                    span { class: "cert-badge__text", "Verified" }
                }
            }

            h3 { class: "cert-title", "{cert.title}" }

            for (icon, text) in cert.detail_rows() {
                div { class: "meta-row",
                    Icon { name: icon, size: 16, color: TEXT_SECONDARY }
                    span { "{text}" }
                }
            }

            div { class: "divider" }

            div { class: "skills-covered",
                div { class: "label-caps", "Skills Covered" }
                TagList { tags: cert.skills }
            }

            Button { variant: ButtonVariant::Gradient, class: "btn-block".to_string(),
                Icon { name: "open-in-new", size: 16, color: WHITE }
                span { "View Credential" }
            }
        }
    }
}
