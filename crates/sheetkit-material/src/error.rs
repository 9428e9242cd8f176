use sheetkit_core::ColorParseError;
use thiserror::Error;

/// Rejected action sheet configuration.
///
/// Raised while turning a [`SheetDeclaration`](crate::SheetDeclaration) into an
/// [`ActionSheetConfig`](crate::ActionSheetConfig); never while a sheet is on
/// screen.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid `{field}`: expected a string or {{\"content\": <name>}}, got {value}")]
    InvalidContent { field: String, value: String },

    #[error("invalid `{field}`: options must be strings or {{\"content\": <name>}}, got {value}")]
    InvalidOption { field: String, value: String },

    #[error("`{field}` refers to unregistered content `{name}`")]
    UnknownContent { field: String, name: String },

    #[error("invalid `tintColor` {value:?}")]
    InvalidColor {
        value: String,
        #[source]
        source: ColorParseError,
    },

    #[error("malformed action sheet declaration")]
    Json(#[from] serde_json::Error),
}
