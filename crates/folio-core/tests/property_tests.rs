//! Property-based tests for the tab shell, card variants and theme toggle
//!
//! Uses proptest to verify invariants that must hold for any input sequence.

use folio_core::theme::FeedPalette;
use folio_core::{
    icon_for_route_name, CardVariant, ColorMode, GlassStyle, RouteName, TabRoute, TabShell,
    TapOutcome, ThemeToggle, FALLBACK_ICON,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn route_strategy() -> impl Strategy<Value = TabRoute> {
    prop::sample::select(TabRoute::ALL.to_vec())
}

/// Route names that are not registered with the standard shell
fn unknown_route_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,30}")
        .expect("valid regex")
        .prop_filter("not a registered route", |name| {
            !TabRoute::ALL.iter().any(|route| route.name() == name)
        })
}

/// Variant names outside {dark, light, red}
fn unknown_variant_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,20}")
        .expect("valid regex")
        .prop_filter("not a known variant", |name| {
            !matches!(
                name.trim().to_ascii_lowercase().as_str(),
                "dark" | "light" | "red"
            )
        })
}

fn system_strategy() -> impl Strategy<Value = Option<ColorMode>> {
    prop_oneof![
        Just(None),
        Just(Some(ColorMode::Light)),
        Just(Some(ColorMode::Dark)),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After any sequence of taps exactly one tab is focused
    #[test]
    fn exactly_one_route_active(taps in prop::collection::vec(route_strategy(), 0..50)) {
        let mut shell = TabShell::standard();
        for route in taps {
            let before = shell.active();
            let outcome = shell.tap(route);

            if before == route {
                prop_assert_eq!(outcome, TapOutcome::AlreadyActive);
            } else {
                prop_assert_eq!(outcome, TapOutcome::Navigated { from: before, to: route });
            }
            prop_assert_eq!(shell.descriptors().iter().filter(|d| d.focused).count(), 1);
            prop_assert_eq!(shell.active(), route);
        }
    }

    /// Unknown route names get the fallback icon and never move the shell
    #[test]
    fn unknown_route_names_fall_back(name in unknown_route_name_strategy()) {
        prop_assert_eq!(icon_for_route_name(&name), FALLBACK_ICON);
        prop_assert_eq!(RouteName::parse(&name), RouteName::Unknown(name.clone()));

        let mut shell = TabShell::standard();
        prop_assert_eq!(shell.tap_named(&name), TapOutcome::Unregistered);
        prop_assert_eq!(shell.active(), TabRoute::Home);
    }

    /// Any variant outside the closed set renders exactly like dark
    #[test]
    fn unknown_variants_render_as_dark(name in unknown_variant_strategy()) {
        let variant = CardVariant::from(name.as_str());
        prop_assert_eq!(variant, CardVariant::Dark);
        prop_assert_eq!(
            GlassStyle::for_variant(variant),
            GlassStyle::for_variant(CardVariant::Dark)
        );
    }

    /// Every toggle flips what is displayed, whatever the system says
    #[test]
    fn toggle_always_flips_displayed(
        system in system_strategy(),
        toggles in 1..20usize,
    ) {
        let mut toggle = ThemeToggle::new();
        for _ in 0..toggles {
            let before = toggle.displayed(system);
            let after = toggle.toggle(system);
            prop_assert_eq!(after, before.opposite());
            prop_assert_eq!(toggle.displayed(system), after);
            prop_assert_eq!(FeedPalette::for_mode(after).background, if after.is_dark() { "#000000" } else { "#ffffff" });
        }
    }
}
