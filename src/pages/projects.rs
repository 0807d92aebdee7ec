//! Projects page - summary counters and project cards.

use dioxus::prelude::*;
use folio_core::fixtures::{tech_color, PROJECTS};
use folio_core::theme::{PRIMARY, TEXT_SECONDARY, WHITE};
use folio_core::{CardVariant, Project, ProjectSummary};
use folio_ui::{Button, ButtonVariant, GlassCard, Icon, TagList};

use crate::components::{GradientKind, ScreenHeader, SectionHeader};

#[component]
pub fn Projects() -> Element {
    let summary = ProjectSummary::of(PROJECTS);

    rsx! {
        div { class: "screen-scroll gradient-background",
            ScreenHeader {
                icon: "folder-star",
                title: "My Projects",
                subtitle: "Showcasing data-driven solutions",
                gradient: GradientKind::Accent,
            }

            div { class: "stats-row",
                GlassCard { variant: CardVariant::Dark, class: "stat-card",
                    div { class: "stat-number", "{summary.total}" }
                    div { class: "stat-label", "Projects" }
                }
                GlassCard { variant: CardVariant::Red, class: "stat-card",
                    div { class: "stat-number", "{summary.featured}" }
                    div { class: "stat-label", "Featured" }
                }
                GlassCard { variant: CardVariant::Light, class: "stat-card",
                    div { class: "stat-number", "{summary.tech_used}" }
                    div { class: "stat-label", "Tech Used" }
                }
            }

            section { class: "section",
                SectionHeader { icon: "rocket-launch", title: "Featured Work" }
                for project in PROJECTS.iter() {
                    ProjectCard { key: "{project.id}", project: *project }
                }
            }

            GlassCard { variant: CardVariant::Dark, class: "coming-soon-card",
                div { class: "coming-soon",
                    Icon { name: "plus-circle-outline", size: 48, color: PRIMARY }
                    div { class: "coming-soon__title", "More Projects Coming" }
                    p { class: "coming-soon__text",
                        "Currently working on exciting new data science projects. Stay tuned!"
                    }
                }
            }

            div { class: "bottom-spacer" }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    // Tags on the light card need a stronger border to stay visible
    let tag_class = if project.variant == CardVariant::Light {
        "tag--on-light"
    } else {
        ""
    };

    rsx! {
        GlassCard { variant: project.variant, class: "project-card",
            if project.featured {
                div { class: "featured-badge gradient-red-horizontal",
                    Icon { name: "star", size: 12, color: WHITE }
                    span { class: "featured-badge__text", "Featured" }
                }
            }

            div { class: "project-header",
                div { class: "project-icon",
                    Icon { name: project.icon, size: 32, color: PRIMARY }
                }
                h3 { class: "project-title", "{project.title}" }
            }

            p { class: "project-description", "{project.description}" }

            div { class: "tech-stack",
                div { class: "label-caps", "Tech Stack" }
                TagList {
                    tags: project.tech_stack,
                    dot_color: tech_color as fn(&str) -> &'static str,
                    class: "{tag_class}",
                }
            }

            div { class: "project-actions",
                Button { variant: ButtonVariant::Outline,
                    Icon { name: "github", size: 18, color: TEXT_SECONDARY }
                    span { "View Code" }
                }
                Button { variant: ButtonVariant::Gradient,
                    span { "Details" }
                    Icon { name: "arrow-right", size: 18, color: WHITE }
                }
            }
        }
    }
}
