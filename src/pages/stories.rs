//! Story feed - story bubbles and posts with a manual light/dark override.

use dioxus::prelude::*;
use folio_core::fixtures::{POSTS, STORIES};
use folio_core::{ColorMode, FeedPalette, Post, Story, ThemeToggle};
use folio_ui::Pressable;

/// Story feed page.
///
/// `toggle` holds the manual override; `system` is the scheme reported by the
/// host, `None` when unknown.
#[component]
pub fn Stories(toggle: Signal<ThemeToggle>, system: Option<ColorMode>) -> Element {
    let mut toggle = toggle;
    let mode = toggle.read().displayed(system);
    let palette_css = FeedPalette::for_mode(mode).css_vars();
    let indicator = mode.indicator_label();
    let mode_class = if mode.is_dark() { "feed--dark" } else { "feed--light" };

    rsx! {
        div { class: "feed {mode_class}", style: "{palette_css}",
            header { class: "feed-header",
                h1 { class: "feed-header__title", "Stories" }
                Pressable {
                    class: "mode-indicator",
                    onpress: move |_| {
                        let shown = toggle.write().toggle(system);
                        tracing::info!(mode = ?shown, "Feed color mode switched");
                    },
                    span { class: "mode-indicator__text", "{indicator}" }
                }
            }

            div { class: "feed-scroll",
                div { class: "stories-row",
                    for (index, story) in STORIES.iter().enumerate() {
                        StoryBubble { key: "{story.id}", story: *story, index }
                    }
                }

                for post in POSTS.iter() {
                    PostCard { key: "{post.id}", post: *post }
                }
            }
        }
    }
}

#[component]
fn StoryBubble(story: Story, index: usize) -> Element {
    let label = story.label(index);
    let ring_class = if story.has_story {
        "story__ring story__ring--active"
    } else {
        "story__ring"
    };

    rsx! {
        div { class: "story",
            div { class: "{ring_class}",
                img { class: "story__image", src: "{story.image}", alt: "" }
            }
            span { class: "story__label", "{label}" }
        }
    }
}

#[component]
fn PostCard(post: Post) -> Element {
    let likes = post.likes_label();

    rsx! {
        article { class: "post",
            div { class: "post__header",
                img { class: "post__avatar", src: "{post.avatar}", alt: "" }
                span { class: "post__username", "{post.username}" }
            }
            img { class: "post__image", src: "{post.image}", alt: "" }
            div { class: "post__actions",
                span { class: "post__action", "♡" }
                span { class: "post__action", "💬" }
                span { class: "post__action", "↗" }
            }
            div { class: "post__likes", "{likes}" }
            p { class: "post__caption",
                span { class: "post__caption-user", "{post.username}" }
                " {post.caption}"
            }
            div { class: "post__time", "{post.time_ago}" }
        }
    }
}
