//! Tag Components
//!
//! Rows of rounded chips for coursework, tech stacks and covered skills.

use dioxus::prelude::*;

/// Properties for the TagList component
#[derive(Clone, PartialEq, Props)]
pub struct TagListProps {
    /// Tag labels, rendered in order
    pub tags: &'static [&'static str],
    /// Optional dot color per tag
    #[props(default)]
    pub dot_color: Option<fn(&str) -> &'static str>,
    /// Additional CSS classes on each tag
    #[props(default)]
    pub class: String,
}

/// Displays a wrapping row of tags
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagList {
///         tags: project.tech_stack,
///         dot_color: tech_color as fn(&str) -> &'static str,
///     }
/// }
/// ```
#[component]
pub fn TagList(props: TagListProps) -> Element {
    let extra_class = props.class.clone();

    rsx! {
        div { class: "tag-list",
            for tag in props.tags.iter() {
                {
                    let dot = props.dot_color.map(|color_of| color_of(tag));
                    rsx! {
                        span { class: "tag {extra_class}",
                            if let Some(color) = dot {
                                span { class: "tag__dot", style: "background-color: {color};" }
                            }
                            span { class: "tag__text", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
