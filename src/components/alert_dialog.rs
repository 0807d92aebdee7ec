//! Alert Dialog Component
//!
//! Native-style alert box: title, message and a single OK button.

use dioxus::prelude::*;

/// Alert dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AlertDialog {
///         show: show_alert(),
///         title: "Alert",
///         message: "Touch Me Not",
///         on_close: move |_| show_alert.set(false),
///     }
/// }
/// ```
#[component]
pub fn AlertDialog(
    /// Whether to show the dialog
    show: bool,
    title: &'static str,
    message: &'static str,
    /// Callback when the dialog is dismissed
    on_close: EventHandler<()>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "alert-dialog",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "alert-dialog__title", "{title}" }
                p { class: "alert-dialog__message", "{message}" }
                div { class: "alert-dialog__actions",
                    button {
                        class: "alert-dialog__ok",
                        onclick: move |_| on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
