//! Integration tests for the data each screen renders.
//!
//! The screens are pure renders of these fixtures, so the counters and
//! orderings checked here are exactly what appears on screen.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::fixtures::{self, CERTIFICATIONS, IN_PROGRESS, POSTS, PROFILE, PROJECTS, SKILLS, STORIES};
use folio_core::{
    CardVariant, CertificationSummary, ColorMode, ProjectSummary, TabPress, TabRoute, TabShell,
    TapOutcome, ThemeToggle,
};

#[test]
fn test_certification_counters() {
    let summary = CertificationSummary::of(CERTIFICATIONS);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.top_issuers, 3);
}

#[test]
fn test_featured_counter_matches_flags() {
    let summary = ProjectSummary::of(PROJECTS);
    let flagged = PROJECTS.iter().filter(|p| p.featured).count();
    assert_eq!(summary.featured, flagged);
    assert_eq!(summary.featured, 2);
    assert_eq!(summary.total, 3);
}

#[test]
fn test_certifications_keep_fixture_order() {
    let ids: Vec<&str> = CERTIFICATIONS.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    let issuers: Vec<&str> = CERTIFICATIONS.iter().map(|c| c.issuer).collect();
    assert_eq!(issuers, vec!["Google", "Coursera / IBM", "Microsoft"]);
}

#[test]
fn test_skill_levels_in_range_and_variants_alternate() {
    for (index, skill) in SKILLS.iter().enumerate() {
        assert!(skill.level <= 100, "{} out of range", skill.name);
        let expected = if index % 2 == 0 { CardVariant::Dark } else { CardVariant::Light };
        assert_eq!(CardVariant::alternating(index), expected);
    }
    assert!(IN_PROGRESS.iter().all(|c| c.progress <= 100));
}

#[test]
fn test_feed_fixtures() {
    assert_eq!(STORIES.len(), 8);
    assert_eq!(STORIES[0].label(0), "Your Story");
    assert_eq!(POSTS.iter().map(|p| p.likes).sum::<u64>(), 1234 + 567 + 890);
}

#[test]
fn test_builtin_fixtures_validate() {
    fixtures::validate().unwrap();
}

#[test]
fn test_toggle_from_unset_on_dark_system() {
    let system = Some(ColorMode::Dark);
    let mut toggle = ThemeToggle::new();
    assert_eq!(toggle.displayed(system), ColorMode::Dark);
    assert_eq!(toggle.toggle(system), ColorMode::Light);
    assert_eq!(toggle.toggle(system), ColorMode::Dark);
}

#[test]
fn test_home_explore_links_drive_the_shell() {
    let mut shell = TabShell::standard();
    let pressed = Rc::new(RefCell::new(Vec::new()));
    let log = pressed.clone();
    shell.add_listener(Rc::new(move |press: &mut TabPress| {
        log.borrow_mut().push(press.target());
    }));

    for link in PROFILE.explore {
        let outcome = shell.navigate(link.route);
        assert!(matches!(outcome, TapOutcome::Navigated { to, .. } if to == link.route));
    }

    // In-screen links do not go through the tab press listeners
    assert!(pressed.borrow().is_empty());
    assert_eq!(shell.active(), TabRoute::Certifications);

    assert_eq!(shell.tap(TabRoute::Home), TapOutcome::Navigated {
        from: TabRoute::Certifications,
        to: TabRoute::Home,
    });
    assert_eq!(*pressed.borrow(), vec![TabRoute::Home]);
}
