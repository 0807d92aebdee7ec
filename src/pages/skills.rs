//! Skills page - proficiency bars, education and focus notes.

use dioxus::prelude::*;
use folio_core::fixtures::{EDUCATION, FOCUS_NOTES, SKILLS};
use folio_core::format::percent;
use folio_core::theme::{PRIMARY, TEXT_SECONDARY, WHITE};
use folio_core::{CardVariant, Skill};
use folio_ui::{GlassCard, Icon, ProgressBar, TagList};

use crate::components::{GradientKind, ScreenHeader, SectionHeader};

#[component]
pub fn Skills() -> Element {
    rsx! {
        div { class: "screen-scroll gradient-background",
            ScreenHeader {
                icon: "code-braces-box",
                title: "Skills & Education",
                subtitle: "Technical expertise & academic background",
                gradient: GradientKind::Red,
            }

            section { class: "section",
                SectionHeader { icon: "lightning-bolt", title: "Technical Skills" }
                for (index, skill) in SKILLS.iter().enumerate() {
                    SkillCard { skill: *skill, variant: CardVariant::alternating(index) }
                }
            }

            section { class: "section",
                SectionHeader { icon: "school", title: "Education" }
                EducationCard {}
            }

            GlassCard { variant: CardVariant::Light, class: "info-card",
                for (icon, text) in FOCUS_NOTES.iter() {
                    div { class: "info-row",
                        Icon { name: *icon, size: 20, color: PRIMARY }
                        span { class: "info-text", "{text}" }
                    }
                }
            }

            div { class: "bottom-spacer" }
        }
    }
}

#[component]
fn SkillCard(skill: Skill, variant: CardVariant) -> Element {
    let level = percent(skill.level);

    rsx! {
        GlassCard { variant, class: "skill-card",
            div { class: "skill-header",
                div { class: "skill-icon",
                    Icon { name: skill.icon, size: 24, color: skill.accent() }
                }
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-level", "{level}" }
            }
            ProgressBar { percent: skill.level }
        }
    }
}

#[component]
fn EducationCard() -> Element {
    let edu = &EDUCATION;

    rsx! {
        GlassCard { variant: CardVariant::Red, class: "education-card",
            div { class: "education-header",
                div { class: "education-icon",
                    Icon { name: "school-outline", size: 32, color: WHITE }
                }
                span { class: "status-badge", "{edu.status}" }
            }
            div { class: "degree", "{edu.degree}" }
            div { class: "specialization", "{edu.specialization}" }
            div { class: "divider" }
            div { class: "meta-row",
                Icon { name: "map-marker", size: 18, color: TEXT_SECONDARY }
                span { "{edu.university}" }
            }
            div { class: "meta-row",
                Icon { name: "calendar-range", size: 18, color: TEXT_SECONDARY }
                span { "{edu.duration}" }
            }
            div { class: "coursework",
                div { class: "label-caps", "Key Coursework" }
                TagList { tags: edu.coursework }
            }
        }
    }
}
