//! Data-driven action sheets.
//!
//! A [`SheetDeclaration`] is the JSON shape of an action sheet:
//!
//! ```json
//! {
//!   "title": "Photo",
//!   "options": ["Take photo", {"content": "gallery-row"}, "Cancel"],
//!   "tintColor": "#4fc3f7",
//!   "cancelButtonIndex": 2,
//!   "destructiveButtonIndex": -1
//! }
//! ```
//!
//! Every title, message and option must be a string or a reference to content
//! registered in a [`ContentRegistry`]. Negative indices mean "none".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sheetkit_core::{Color, ContentHandle};

use super::{ActionSheetConfig, SheetContent};
use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetDeclaration {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub options: Vec<Value>,
    #[serde(default)]
    pub tint_color: Option<String>,
    #[serde(default)]
    pub cancel_button_index: Option<i64>,
    #[serde(default)]
    pub destructive_button_index: Option<i64>,
}

impl SheetDeclaration {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Named host content that declarations may refer to.
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    entries: HashMap<String, ContentHandle>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn register(&mut self, name: impl Into<String>, handle: ContentHandle) -> &mut Self {
        self.entries.insert(name.into(), handle);
        self
    }
    pub fn get(&self, name: &str) -> Option<&ContentHandle> {
        self.entries.get(name)
    }
}

impl ActionSheetConfig {
    /// Validates `decl` and builds a config with a no-op `on_press`.
    pub fn from_declaration(
        decl: SheetDeclaration,
        registry: &ContentRegistry,
    ) -> Result<Self, ConfigError> {
        let title = optional_content("title", decl.title, registry)?;
        let message = optional_content("message", decl.message, registry)?;
        let options = decl
            .options
            .into_iter()
            .enumerate()
            .map(|(i, v)| option(i, v, registry))
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = ActionSheetConfig::new(options);
        if let Some(t) = title {
            config = config.title(t);
        }
        if let Some(m) = message {
            config = config.message(m);
        }
        if let Some(hex) = decl.tint_color {
            let color = Color::parse_hex(&hex).map_err(|source| ConfigError::InvalidColor {
                value: hex.clone(),
                source,
            })?;
            config = config.tint_color(color);
        }
        config.cancel_button_index = index(decl.cancel_button_index);
        config.destructive_button_index = index(decl.destructive_button_index);
        Ok(config)
    }

    pub fn from_json(json: &str, registry: &ContentRegistry) -> Result<Self, ConfigError> {
        Self::from_declaration(SheetDeclaration::from_json(json)?, registry)
    }
}

fn index(raw: Option<i64>) -> Option<usize> {
    raw.and_then(|i| usize::try_from(i).ok())
}

fn optional_content(
    field: &str,
    value: Option<Value>,
    registry: &ContentRegistry,
) -> Result<Option<SheetContent>, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => content(field, v, registry).map(Some),
    }
}

fn content(field: &str, value: Value, registry: &ContentRegistry) -> Result<SheetContent, ConfigError> {
    match value {
        Value::String(s) => Ok(SheetContent::Text(s)),
        Value::Object(ref map) if map.len() == 1 => match map.get("content") {
            Some(Value::String(name)) => registry
                .get(name)
                .cloned()
                .map(SheetContent::Prebuilt)
                .ok_or_else(|| ConfigError::UnknownContent {
                    field: field.to_string(),
                    name: name.clone(),
                }),
            _ => Err(invalid(field, &value)),
        },
        other => Err(invalid(field, &other)),
    }
}

fn option(i: usize, value: Value, registry: &ContentRegistry) -> Result<SheetContent, ConfigError> {
    content(&format!("options[{i}]"), value, registry).map_err(|e| match e {
        ConfigError::InvalidContent { field, value } => ConfigError::InvalidOption { field, value },
        other => other,
    })
}

fn invalid(field: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidContent {
        field: field.to_string(),
        value: value.to_string(),
    }
}
