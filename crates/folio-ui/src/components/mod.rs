//! Reusable UI components.
//!
//! All components read colors from CSS variables generated out of
//! `folio_core::theme`, so they follow the token table.

mod button;
mod glass_card;
mod icon;
mod progress_bar;
mod tags;

pub use button::*;
pub use glass_card::*;
pub use icon::*;
pub use progress_bar::*;
pub use tags::*;
