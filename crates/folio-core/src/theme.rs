//! Theme tokens.
//!
//! Red, black and white palette with glassmorphism surfaces. Every value
//! here is a compile-time constant; nothing in the app mutates the theme.

use serde::Serialize;

use crate::color_mode::ColorMode;

// === PRIMARY ===
pub const PRIMARY: &str = "#E53935";
pub const PRIMARY_DARK: &str = "#D32F2F";
pub const PRIMARY_LIGHT: &str = "#FF6B6B";

// === SECONDARY / ACCENT ===
pub const SECONDARY: &str = "#FF5722";
pub const ACCENT: &str = "#FF6B6B";

// === BACKGROUNDS ===
pub const BACKGROUND_DARK: &str = "#0A0A0A";
pub const BACKGROUND_DEEP_RED: &str = "#1A0000";
pub const BACKGROUND_PURE: &str = "#000000";

// === GLASS ===
pub const GLASS_DARK: &str = "rgba(0, 0, 0, 0.75)";
pub const GLASS_LIGHT: &str = "rgba(255, 255, 255, 0.15)";
pub const GLASS_RED: &str = "rgba(229, 57, 53, 0.25)";
pub const GLASS_BORDER: &str = "rgba(255, 255, 255, 0.2)";
pub const GLASS_BORDER_RED: &str = "rgba(229, 57, 53, 0.4)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#FFFFFF";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_ON_LIGHT: &str = "#0A0A0A";
pub const TEXT_ON_RED: &str = "#FFFFFF";

// === UI ===
pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";
pub const SHADOW: &str = "rgba(229, 57, 53, 0.3)";

// === GRADIENTS ===
pub const GRADIENT_BACKGROUND: [&str; 3] = [BACKGROUND_DARK, BACKGROUND_DEEP_RED, BACKGROUND_DARK];
pub const GRADIENT_RED: [&str; 2] = [PRIMARY, PRIMARY_DARK];
pub const GRADIENT_ACCENT: [&str; 2] = [SECONDARY, PRIMARY];

/// Blur strength of glass cards, in px.
pub const CARD_BLUR: u16 = 20;
/// Blur strength behind the tab bar, in px.
pub const TAB_BAR_BLUR: u16 = 25;

/// Semantic color names, in the order they are emitted as CSS variables.
const COLOR_TABLE: &[(&str, &str)] = &[
    ("primary", PRIMARY),
    ("primary-dark", PRIMARY_DARK),
    ("primary-light", PRIMARY_LIGHT),
    ("secondary", SECONDARY),
    ("accent", ACCENT),
    ("background-dark", BACKGROUND_DARK),
    ("background-deep-red", BACKGROUND_DEEP_RED),
    ("background-pure", BACKGROUND_PURE),
    ("glass-dark", GLASS_DARK),
    ("glass-light", GLASS_LIGHT),
    ("glass-red", GLASS_RED),
    ("glass-border", GLASS_BORDER),
    ("glass-border-red", GLASS_BORDER_RED),
    ("text-primary", TEXT_PRIMARY),
    ("text-secondary", TEXT_SECONDARY),
    ("text-on-light", TEXT_ON_LIGHT),
    ("text-on-red", TEXT_ON_RED),
    ("white", WHITE),
    ("black", BLACK),
    ("shadow", SHADOW),
];

/// Look up a color by its semantic name.
pub fn color(name: &str) -> Option<&'static str> {
    COLOR_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

/// Spacing scale (px)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Spacing {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Spacing {
    pub const ALL: [Spacing; 6] = [
        Spacing::Xs,
        Spacing::Sm,
        Spacing::Md,
        Spacing::Lg,
        Spacing::Xl,
        Spacing::Xxl,
    ];

    pub fn px(self) -> u16 {
        match self {
            Spacing::Xs => 4,
            Spacing::Sm => 8,
            Spacing::Md => 16,
            Spacing::Lg => 24,
            Spacing::Xl => 32,
            Spacing::Xxl => 48,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Spacing::Xs => "xs",
            Spacing::Sm => "sm",
            Spacing::Md => "md",
            Spacing::Lg => "lg",
            Spacing::Xl => "xl",
            Spacing::Xxl => "xxl",
        }
    }
}

/// Border-radius scale (px)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Radius {
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl Radius {
    pub const ALL: [Radius; 5] = [Radius::Sm, Radius::Md, Radius::Lg, Radius::Xl, Radius::Full];

    pub fn px(self) -> u16 {
        match self {
            Radius::Sm => 8,
            Radius::Md => 16,
            Radius::Lg => 24,
            Radius::Xl => 32,
            Radius::Full => 9999,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Radius::Sm => "sm",
            Radius::Md => "md",
            Radius::Lg => "lg",
            Radius::Xl => "xl",
            Radius::Full => "full",
        }
    }
}

/// A typography preset
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TypeStyle {
    pub name: &'static str,
    pub size: u16,
    pub weight: u16,
    pub letter_spacing: f32,
}

pub const H1: TypeStyle = TypeStyle { name: "h1", size: 32, weight: 800, letter_spacing: -0.5 };
pub const H2: TypeStyle = TypeStyle { name: "h2", size: 24, weight: 700, letter_spacing: -0.3 };
pub const H3: TypeStyle = TypeStyle { name: "h3", size: 20, weight: 600, letter_spacing: 0.0 };
pub const BODY: TypeStyle = TypeStyle { name: "body", size: 16, weight: 400, letter_spacing: 0.0 };
pub const BODY_SMALL: TypeStyle =
    TypeStyle { name: "body-small", size: 14, weight: 400, letter_spacing: 0.0 };
pub const CAPTION: TypeStyle = TypeStyle { name: "caption", size: 12, weight: 500, letter_spacing: 0.0 };
pub const BUTTON: TypeStyle = TypeStyle { name: "button", size: 14, weight: 600, letter_spacing: 0.5 };

pub const TYPE_SCALE: [TypeStyle; 7] = [H1, H2, H3, BODY, BODY_SMALL, CAPTION, BUTTON];

/// CSS `linear-gradient` for a list of stops.
pub fn linear_gradient(angle_deg: u16, stops: &[&str]) -> String {
    format!("linear-gradient({}deg, {})", angle_deg, stops.join(", "))
}

/// Render every token as a CSS custom property inside a `:root` block.
pub fn css_variables() -> String {
    let mut css = String::from(":root {\n");

    for (name, value) in COLOR_TABLE {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    for step in Spacing::ALL {
        css.push_str(&format!("  --space-{}: {}px;\n", step.name(), step.px()));
    }
    for step in Radius::ALL {
        css.push_str(&format!("  --radius-{}: {}px;\n", step.name(), step.px()));
    }
    for style in TYPE_SCALE {
        css.push_str(&format!("  --font-{}-size: {}px;\n", style.name, style.size));
        css.push_str(&format!("  --font-{}-weight: {};\n", style.name, style.weight));
        css.push_str(&format!(
            "  --font-{}-tracking: {}px;\n",
            style.name, style.letter_spacing
        ));
    }

    css.push_str(&format!(
        "  --gradient-background: {};\n",
        linear_gradient(180, &GRADIENT_BACKGROUND)
    ));
    css.push_str(&format!("  --gradient-red: {};\n", linear_gradient(135, &GRADIENT_RED)));
    css.push_str(&format!(
        "  --gradient-accent: {};\n",
        linear_gradient(135, &GRADIENT_ACCENT)
    ));
    css.push_str(&format!("  --blur-card: {}px;\n", CARD_BLUR));
    css.push_str(&format!("  --blur-tab-bar: {}px;\n", TAB_BAR_BLUR));

    css.push('}');
    css
}

/// Colors used by the story feed, one set per color mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct FeedPalette {
    pub background: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub icon: &'static str,
}

pub const FEED_LIGHT: FeedPalette = FeedPalette {
    background: "#ffffff",
    surface: "#f5f5f5",
    card: "#ffffff",
    text: "#000000",
    text_secondary: "#666666",
    text_muted: "#999999",
    border: "#dbdbdb",
    accent: "#e6683c",
    icon: "#262626",
};

pub const FEED_DARK: FeedPalette = FeedPalette {
    background: "#000000",
    surface: "#121212",
    card: "#1c1c1c",
    text: "#ffffff",
    text_secondary: "#b3b3b3",
    text_muted: "#666666",
    border: "#333333",
    accent: "#e6683c",
    icon: "#f5f5f5",
};

impl FeedPalette {
    pub fn for_mode(mode: ColorMode) -> &'static FeedPalette {
        match mode {
            ColorMode::Light => &FEED_LIGHT,
            ColorMode::Dark => &FEED_DARK,
        }
    }

    /// Inline CSS custom properties scoped to the feed container.
    pub fn css_vars(&self) -> String {
        format!(
            "--feed-bg: {}; --feed-surface: {}; --feed-card: {}; --feed-text: {}; \
             --feed-text-secondary: {}; --feed-text-muted: {}; --feed-border: {}; \
             --feed-accent: {}; --feed-icon: {};",
            self.background,
            self.surface,
            self.card,
            self.text,
            self.text_secondary,
            self.text_muted,
            self.border,
            self.accent,
            self.icon,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lookup_is_stable() {
        assert_eq!(color("primary"), Some(PRIMARY));
        assert_eq!(color("primary"), color("primary"));
        assert_eq!(color("glass-border-red"), Some(GLASS_BORDER_RED));
        assert_eq!(color("no-such-token"), None);
    }

    #[test]
    fn test_scales() {
        assert_eq!(Spacing::Md.px(), 16);
        assert_eq!(Radius::Lg.px(), 24);
        assert_eq!(Radius::Full.px(), 9999);
        assert_eq!(H1.size, 32);
        assert_eq!(BUTTON.letter_spacing, 0.5);
    }

    #[test]
    fn test_css_variables_cover_table() {
        let css = css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
        for (name, value) in COLOR_TABLE {
            assert!(css.contains(&format!("--{}: {};", name, value)));
        }
        assert!(css.contains("--space-xxl: 48px;"));
        assert!(css.contains("--gradient-red: linear-gradient(135deg, #E53935, #D32F2F);"));
    }

    #[test]
    fn test_feed_palettes() {
        assert_eq!(FeedPalette::for_mode(ColorMode::Light).background, "#ffffff");
        assert_eq!(FeedPalette::for_mode(ColorMode::Dark).background, "#000000");
        assert_eq!(FEED_LIGHT.accent, FEED_DARK.accent);
        assert!(FEED_DARK.css_vars().contains("--feed-card: #1c1c1c;"));
    }
}
