//! Progress Bar Component

use dioxus::prelude::*;

/// Horizontal track with a red gradient fill.
///
/// `percent` is clamped to 0..=100.
#[component]
pub fn ProgressBar(percent: u8) -> Element {
    let width = percent.min(100);

    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{width}",
            div { class: "progress-fill", style: "width: {width}%;" }
        }
    }
}
