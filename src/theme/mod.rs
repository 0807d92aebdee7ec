//! Global styles for Folio.
//!
//! Token values live in `folio_core::theme`; this module turns them into
//! CSS variables and holds the rules that consume them.

mod styles;

pub use styles::GLOBAL_STYLES;

/// `:root` block with every theme token as a CSS custom property
pub fn root_variables() -> String {
    folio_core::theme::css_variables()
}
