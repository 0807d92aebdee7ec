//! App-level components for Folio.
//!
//! Screen chrome shared by the pages; generic widgets live in `folio-ui`.

mod alert_dialog;
mod headers;
mod tab_bar;

pub use alert_dialog::AlertDialog;
pub use headers::{GradientKind, ScreenHeader, SectionHeader};
pub use tab_bar::{TabBar, TabLayout};
