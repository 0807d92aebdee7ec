//! Button Components
//!
//! - Gradient: red gradient fill, the main call to action
//! - Outline: translucent with a thin border ("View Code")
//! - Plain: platform-style button used by the sampler
//! - Touchable: no chrome, dims while pressed

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Red gradient fill
    #[default]
    Gradient,
    /// Translucent with a thin white border
    Outline,
    /// Solid system-blue button with a text title
    Plain,
    /// Bare content that fades while pressed
    Touchable,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Plain => "btn-plain",
            ButtonVariant::Touchable => "btn-touchable",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Gradient,
///         onclick: move |_| open_details(),
///         "Details"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Pressable area that reports its pressed state while held.
///
/// Dims to half opacity between pointer down and pointer up.
#[component]
pub fn Pressable(
    #[props(default)] onpress: Option<EventHandler<()>>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut pressed = use_signal(|| false);
    let opacity = if pressed() { "0.5" } else { "1" };

    rsx! {
        div {
            class: "pressable {class}",
            role: "button",
            style: "opacity: {opacity};",
            onmousedown: move |_| pressed.set(true),
            onmouseleave: move |_| pressed.set(false),
            onmouseup: move |_| {
                if pressed() {
                    pressed.set(false);
                    if let Some(handler) = &onpress {
                        handler.call(());
                    }
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Gradient.class(), "btn-gradient");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Plain.class(), "btn-plain");
        assert_eq!(ButtonVariant::Touchable.class(), "btn-touchable");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Gradient);
    }
}
