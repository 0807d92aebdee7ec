//! Folio Core Library
//!
//! Static data and the small amount of state behind the portfolio screens.
//!
//! ## Overview
//!
//! Folio is a résumé/portfolio app with two companion demos (a story feed
//! and a button sampler). Everything on screen comes from fixtures built
//! into the binary. This crate holds the parts that carry decisions:
//!
//! - **Theme tokens**: colors, spacing, radii, typography and gradients
//! - **Fixtures**: skills, projects, certifications, stories and posts
//! - **Tab shell**: which of the four routes is active, and what a tap does
//! - **Theme toggle**: the story feed's manual light/dark override
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{TabRoute, TabShell, TapOutcome};
//!
//! let mut shell = TabShell::standard();
//! assert_eq!(shell.active(), TabRoute::Home);
//!
//! let outcome = shell.tap(TabRoute::Skills);
//! assert!(matches!(outcome, TapOutcome::Navigated { .. }));
//! assert_eq!(shell.tap(TabRoute::Skills), TapOutcome::AlreadyActive);
//! ```

pub mod color_mode;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod nav;
pub mod stats;
pub mod theme;
pub mod variant;

// Re-exports
pub use color_mode::{ColorMode, ManualMode, ThemeToggle};
pub use error::FolioError;
pub use fixtures::{
    Certification, ContactLink, Education, ExploreLink, InProgressCertification, Post, Profile,
    Project, Skill, Story,
};
pub use nav::{
    icon_for_route_name, RouteName, TabDescriptor, TabListener, TabPress, TabRoute, TabShell,
    TapOutcome, FALLBACK_ICON,
};
pub use stats::{CertificationSummary, ProjectSummary};
pub use theme::FeedPalette;
pub use variant::{CardVariant, GlassStyle};
