//! Button sampler - a static greeting, an image and three pressable controls.

use dioxus::prelude::*;
use folio_ui::{Button, ButtonVariant, Pressable};

use crate::components::AlertDialog;

const SAMPLE_IMAGE: &str = "https://img.freepik.com/free-photo/painting-mountain-lake-with-mountain-background_188544-9126.jpg";

#[component]
pub fn Sampler() -> Element {
    let mut show_alert = use_signal(|| false);

    rsx! {
        div { class: "sampler",
            p { class: "sampler__greeting", "Hello World" }
            img { class: "sampler__image", src: SAMPLE_IMAGE, alt: "Mountain lake" }

            Button { variant: ButtonVariant::Plain,
                onclick: move |_| tracing::debug!("Click Me pressed"),
                "Click Me"
            }

            Button { variant: ButtonVariant::Touchable,
                onclick: move |_| show_alert.set(true),
                span { class: "sampler__touch-text", "Touch Me!" }
            }

            Pressable { class: "sampler__pressable",
                span { "Press Me!" }
            }

            AlertDialog {
                show: show_alert(),
                title: "Alert",
                message: "Touch Me Not",
                on_close: move |_| show_alert.set(false),
            }
        }
    }
}
