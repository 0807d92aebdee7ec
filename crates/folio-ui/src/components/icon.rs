//! Icon Component
//!
//! Maps Material Community icon names to glyphs so screens can keep using
//! the icon identifiers stored in the fixtures.

use dioxus::prelude::*;

/// Glyph drawn for icon names the table does not know.
pub const FALLBACK_GLYPH: &str = "●";

const GLYPHS: &[(&str, &str)] = &[
    // Navigation
    ("account", "👤"),
    ("code-braces", "{ }"),
    ("code-braces-box", "{ }"),
    ("folder-multiple", "🗂"),
    ("folder-star", "📁"),
    ("certificate", "📜"),
    ("chevron-right", "›"),
    ("arrow-right", "→"),
    ("open-in-new", "↗"),
    // Profile
    ("account-details", "🪪"),
    ("email", "✉"),
    ("linkedin", "in"),
    ("github", "🐙"),
    // Skills
    ("language-python", "🐍"),
    ("brain", "🧠"),
    ("chart-bar", "📊"),
    ("database", "🗄"),
    ("chart-areaspline", "📈"),
    ("microsoft-excel", "📗"),
    ("microsoft-office", "🏢"),
    ("lightning-bolt", "⚡"),
    ("school", "🎓"),
    ("school-outline", "🎓"),
    ("map-marker", "📍"),
    ("calendar-range", "📅"),
    ("target", "🎯"),
    ("chart-timeline-variant-shimmer", "✨"),
    ("account-group", "👥"),
    // Projects
    ("movie-open", "🎬"),
    ("chart-box", "📊"),
    ("shopping-outline", "🛍"),
    ("rocket-launch", "🚀"),
    ("star", "★"),
    ("plus-circle-outline", "⊕"),
    // Certifications
    ("google", "G"),
    ("microsoft-power-bi", "📊"),
    ("shield-check", "🛡"),
    ("domain", "🏛"),
    ("calendar-check", "📅"),
    ("identifier", "#"),
    ("medal", "🏅"),
    ("shield-star", "⭐"),
    ("trending-up", "📈"),
    ("trophy-variant", "🏆"),
    ("progress-clock", "⏳"),
    ("aws", "☁"),
    // Generic
    ("circle", FALLBACK_GLYPH),
];

/// Glyph for an icon name; unknown names get [`FALLBACK_GLYPH`].
pub fn glyph(name: &str) -> &'static str {
    GLYPHS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or_else(|| {
            tracing::debug!(icon = name, "No glyph for icon, drawing fallback");
            FALLBACK_GLYPH
        })
}

/// Inline icon
///
/// ```rust,ignore
/// rsx! { Icon { name: "star", size: 12, color: "#FFFFFF" } }
/// ```
#[component]
pub fn Icon(
    /// Material Community icon identifier
    name: &'static str,
    #[props(default = 24)]
    size: u16,
    #[props(default)]
    color: Option<&'static str>,
) -> Element {
    let color_css = color.map(|c| format!(" color: {};", c)).unwrap_or_default();
    let glyph = glyph(name);

    rsx! {
        span {
            class: "icon",
            "data-icon": name,
            "aria-hidden": "true",
            style: "font-size: {size}px;{color_css}",
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_glyphs() {
        assert_eq!(glyph("star"), "★");
        assert_eq!(glyph("not-an-icon"), FALLBACK_GLYPH);
        assert_eq!(glyph(folio_core::FALLBACK_ICON), FALLBACK_GLYPH);
    }

    #[test]
    fn every_fixture_icon_has_a_glyph() {
        use folio_core::fixtures::{CERTIFICATIONS, PROFILE, PROJECTS, SKILLS};

        let icons = SKILLS
            .iter()
            .map(|s| s.icon)
            .chain(PROJECTS.iter().map(|p| p.icon))
            .chain(CERTIFICATIONS.iter().map(|c| c.icon))
            .chain(PROFILE.explore.iter().map(|l| l.icon))
            .chain(PROFILE.contacts.iter().map(|c| c.icon));

        for icon in icons {
            assert_ne!(glyph(icon), FALLBACK_GLYPH, "{} has no glyph", icon);
        }
    }
}
