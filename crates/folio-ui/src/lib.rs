//! Folio UI Components
//!
//! This crate provides the Dioxus widgets shared by every Folio screen,
//! styled after the red/black glass theme in `folio_core::theme`.
//!
//! ## Design Notes
//!
//! - **Red (#E53935)**: active states, primary actions, progress fills
//! - **Glass panels**: translucent cards over a near-black gradient
//! - **White text**: primary copy; 70% white for secondary copy
//!
//! Class names used here are defined in the app's global stylesheet.

pub mod components;

pub use components::*;
