//! Display formatting for terminal output
//!
//! Renders calculator results and plans as `tabled` tables. Amounts use the
//! currency symbol from the user's settings.

pub mod calc;
pub mod plan;

pub use calc::{
    format_capacity, format_categories, format_distribution, format_fee, format_protection,
    format_rate,
};
pub use plan::format_plan;
