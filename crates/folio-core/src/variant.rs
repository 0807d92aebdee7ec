//! Glass card variants.

use serde::{Deserialize, Serialize};

use crate::theme;

/// Visual style of a glass card
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CardVariant {
    /// Near-opaque black fill
    #[default]
    Dark,
    /// Frosted white fill
    Light,
    /// Red tint with a red border
    Red,
}

impl CardVariant {
    /// Parse a variant name. Anything unrecognised is `Dark`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => CardVariant::Dark,
            "light" => CardVariant::Light,
            "red" => CardVariant::Red,
            other => {
                tracing::debug!(variant = other, "Unknown card variant, using dark");
                CardVariant::Dark
            }
        }
    }

    /// Returns the CSS modifier class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            CardVariant::Dark => "glass-card--dark",
            CardVariant::Light => "glass-card--light",
            CardVariant::Red => "glass-card--red",
        }
    }

    /// Variant used for the n-th row of an alternating list
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            CardVariant::Dark
        } else {
            CardVariant::Light
        }
    }
}

impl From<&str> for CardVariant {
    fn from(name: &str) -> Self {
        CardVariant::parse(name)
    }
}

impl From<String> for CardVariant {
    fn from(name: String) -> Self {
        CardVariant::parse(&name)
    }
}

/// Fill and border colors of a glass card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GlassStyle {
    pub fill: &'static str,
    pub border: &'static str,
    pub fallback: &'static str,
    pub blur_px: u16,
}

impl GlassStyle {
    pub fn for_variant(variant: CardVariant) -> Self {
        let fill = match variant {
            CardVariant::Light => theme::GLASS_LIGHT,
            CardVariant::Red => theme::GLASS_RED,
            CardVariant::Dark => theme::GLASS_DARK,
        };
        let border = match variant {
            CardVariant::Red => theme::GLASS_BORDER_RED,
            CardVariant::Dark | CardVariant::Light => theme::GLASS_BORDER,
        };

        Self {
            fill,
            border,
            fallback: theme::BACKGROUND_DARK,
            blur_px: theme::CARD_BLUR,
        }
    }

    /// Inline style for the tinted content layer
    pub fn content_css(&self) -> String {
        format!("background-color: {}; border-color: {};", self.fill, self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_variants() {
        assert_eq!(CardVariant::parse("dark"), CardVariant::Dark);
        assert_eq!(CardVariant::parse("light"), CardVariant::Light);
        assert_eq!(CardVariant::parse("RED"), CardVariant::Red);
    }

    #[test]
    fn test_unknown_variant_falls_back_to_dark() {
        assert_eq!(CardVariant::parse("neon"), CardVariant::Dark);
        assert_eq!(CardVariant::parse(""), CardVariant::Dark);
        assert_eq!(
            GlassStyle::for_variant(CardVariant::from("neon")),
            GlassStyle::for_variant(CardVariant::Dark)
        );
    }

    #[test]
    fn test_glass_styles() {
        let red = GlassStyle::for_variant(CardVariant::Red);
        assert_eq!(red.fill, theme::GLASS_RED);
        assert_eq!(red.border, theme::GLASS_BORDER_RED);

        let light = GlassStyle::for_variant(CardVariant::Light);
        assert_eq!(light.fill, theme::GLASS_LIGHT);
        assert_eq!(light.border, theme::GLASS_BORDER);
    }

    #[test]
    fn test_deserialize_unknown_variant() {
        let variant: CardVariant = serde_json::from_str("\"holographic\"").unwrap();
        assert_eq!(variant, CardVariant::Dark);
        let variant: CardVariant = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(variant, CardVariant::Light);
    }

    #[test]
    fn test_alternating() {
        assert_eq!(CardVariant::alternating(0), CardVariant::Dark);
        assert_eq!(CardVariant::alternating(1), CardVariant::Light);
        assert_eq!(CardVariant::alternating(6), CardVariant::Dark);
    }
}
