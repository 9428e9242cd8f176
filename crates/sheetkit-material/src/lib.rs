//! Material-style components built on `sheetkit-ui`.
//!
//! Currently: [`ActionSheet`], a bottom sheet of mutually exclusive options.

pub mod action_sheet;
pub mod error;
mod tests;

pub use action_sheet::*;
pub use error::ConfigError;
