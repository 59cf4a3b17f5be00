//! Paint configuration.

use crate::error::ConfigError;
use crate::model::{Color, Dimensions};
use serde::{Deserialize, Serialize};

/// Surface id painted when none is configured.
pub const DEFAULT_SURFACE_ID: &str = "canv";

/// Which surface to paint, how large, and with what color.
///
/// Every field is optional in JSON form; missing fields take the
/// `Default` values (`canv`, 400×400, red).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaintConfig {
    pub surface_id: String,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            surface_id: DEFAULT_SURFACE_ID.to_string(),
            width: Dimensions::DEFAULT.width,
            height: Dimensions::DEFAULT.height,
            color: Color::RED,
        }
    }
}

impl PaintConfig {
    /// Build a config from loose arguments, parsing the color text.
    ///
    /// # Errors
    /// `ConfigError::Color` if `color` is not a recognised color.
    pub fn from_parts(
        surface_id: &str,
        width: u32,
        height: u32,
        color: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            surface_id: surface_id.to_string(),
            width,
            height,
            color: Color::parse(color)?,
        })
    }

    /// Parse a JSON object such as `{"surfaceId":"canv","width":400,"color":"red"}`.
    ///
    /// # Errors
    /// `ConfigError::Json` on malformed JSON, unknown value types, or an
    /// unparseable color.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}
