//! Light/dark override for the story feed.
//!
//! The feed follows the system scheme until the user taps the mode
//! indicator. A tap always flips what is currently *shown*, so the first
//! tap on a dark system selects light, not dark.

use serde::{Deserialize, Serialize};

/// A concrete color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn opposite(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// Text of the mode indicator button
    pub fn indicator_label(self) -> &'static str {
        match self {
            ColorMode::Light => "☀️ Light",
            ColorMode::Dark => "🌙 Dark",
        }
    }
}

/// Manual override chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ManualMode {
    /// Follow the system color scheme
    #[default]
    Unset,
    /// Always use light mode
    Light,
    /// Always use dark mode
    Dark,
}

impl From<ColorMode> for ManualMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ManualMode::Light,
            ColorMode::Dark => ManualMode::Dark,
        }
    }
}

/// Theme override state owned by the story feed root.
///
/// Lives for the lifetime of the screen and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeToggle {
    manual: ManualMode,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manual(&self) -> ManualMode {
        self.manual
    }

    /// The scheme on screen. An unknown system scheme counts as light.
    pub fn displayed(&self, system: Option<ColorMode>) -> ColorMode {
        match self.manual {
            ManualMode::Light => ColorMode::Light,
            ManualMode::Dark => ColorMode::Dark,
            ManualMode::Unset => system.unwrap_or(ColorMode::Light),
        }
    }

    /// Flip the displayed scheme and pin it as the manual override.
    pub fn toggle(&mut self, system: Option<ColorMode>) -> ColorMode {
        let next = self.displayed(system).opposite();
        tracing::debug!(from = ?self.manual, to = ?next, "Theme override toggled");
        self.manual = next.into();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_follows_system() {
        let toggle = ThemeToggle::new();
        assert_eq!(toggle.manual(), ManualMode::Unset);
        assert_eq!(toggle.displayed(Some(ColorMode::Dark)), ColorMode::Dark);
        assert_eq!(toggle.displayed(Some(ColorMode::Light)), ColorMode::Light);
        assert_eq!(toggle.displayed(None), ColorMode::Light);
    }

    #[test]
    fn test_first_toggle_flips_displayed_not_system() {
        let mut toggle = ThemeToggle::new();
        let system = Some(ColorMode::Dark);

        assert_eq!(toggle.toggle(system), ColorMode::Light);
        assert_eq!(toggle.manual(), ManualMode::Light);
        assert_eq!(toggle.displayed(system), ColorMode::Light);

        assert_eq!(toggle.toggle(system), ColorMode::Dark);
        assert_eq!(toggle.displayed(system), ColorMode::Dark);
    }

    #[test]
    fn test_manual_mode_ignores_system_changes() {
        let mut toggle = ThemeToggle::new();
        toggle.toggle(Some(ColorMode::Light));
        assert_eq!(toggle.displayed(Some(ColorMode::Light)), ColorMode::Dark);
        assert_eq!(toggle.displayed(Some(ColorMode::Dark)), ColorMode::Dark);
        assert_eq!(toggle.displayed(None), ColorMode::Dark);
    }

    #[test]
    fn test_indicator_labels() {
        assert_eq!(ColorMode::Dark.indicator_label(), "🌙 Dark");
        assert_eq!(ColorMode::Light.indicator_label(), "☀️ Light");
    }
}
