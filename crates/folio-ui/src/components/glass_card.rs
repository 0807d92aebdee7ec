//! Glass Card Primitive
//!
//! Blurred translucent panel used by every résumé screen.

use dioxus::prelude::*;
use folio_core::{CardVariant, GlassStyle};

/// Inline style of the blur layer behind the card content.
///
/// `backdrop-filter` is not available in every webview, so the layer also
/// carries an opaque fallback color underneath the blur.
pub fn blur_layer_css(style: &GlassStyle) -> String {
    format!(
        "background-color: {}; backdrop-filter: blur({}px); -webkit-backdrop-filter: blur({}px);",
        style.fallback, style.blur_px, style.blur_px
    )
}

/// Glass card with a variant-driven tint
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     GlassCard {
///         variant: CardVariant::Red,
///         class: "stat-card",
///         div { class: "stat-number", "3" }
///         div { class: "stat-label", "Projects" }
///     }
/// }
/// ```
#[component]
pub fn GlassCard(
    /// Tint of the content layer (dark, light or red)
    #[props(default)]
    variant: CardVariant,
    /// Extra classes on the outer container
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let style = GlassStyle::for_variant(variant);
    let blur_css = blur_layer_css(&style);
    let content_css = style.content_css();
    let variant_class = variant.class();

    rsx! {
        div { class: "glass-card {variant_class} {class}",
            div { class: "glass-card__blur", style: "{blur_css}" }
            div { class: "glass-card__content", style: "{content_css}",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_layer_has_fallback_and_blur() {
        let css = blur_layer_css(&GlassStyle::for_variant(CardVariant::Dark));
        assert!(css.contains("background-color: #0A0A0A;"));
        assert!(css.contains("backdrop-filter: blur(20px);"));
    }

    #[test]
    fn unknown_variant_renders_like_dark() {
        let unknown = GlassStyle::for_variant(CardVariant::parse("plaid"));
        let dark = GlassStyle::for_variant(CardVariant::Dark);
        assert_eq!(unknown.content_css(), dark.content_css());
        assert_eq!(blur_layer_css(&unknown), blur_layer_css(&dark));
    }
}
