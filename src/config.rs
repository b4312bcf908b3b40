use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Flat settings record supplied by the host's settings persistence.
///
/// `auto_save` and `auto_save_interval` are recognized options with no
/// corresponding runtime behavior; they are kept so stored settings from the
/// host round-trip without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    /// Folder (relative to the vault root) where new drawings are created.
    pub default_folder: String,
    /// Width of a freshly created blank drawing, in user units.
    pub default_width: f64,
    /// Height of a freshly created blank drawing, in user units.
    pub default_height: f64,
    /// Stroke color applied to newly drawn elements.
    pub default_stroke_color: String,
    /// Stroke width applied to newly drawn elements.
    pub default_stroke_width: f64,
    /// Fill color applied to newly drawn shapes, or "none".
    pub default_fill_color: String,
    pub auto_save: bool,
    /// Auto-save interval in seconds.
    pub auto_save_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_folder: "Drawings".to_owned(),
            default_width: 800.0,
            default_height: 600.0,
            default_stroke_color: "#000000".to_owned(),
            default_stroke_width: 2.0,
            default_fill_color: "none".to_owned(),
            auto_save: false,
            auto_save_interval: 30,
        }
    }
}

impl Settings {
    /// Parse settings from the host's stored JSON, falling back to defaults
    /// for missing fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| EditorError::InvalidFormat(format!("settings: {e}")))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let settings = Settings::default();
        let parsed = Settings::from_json(&settings.to_json()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let parsed = Settings::from_json(r#"{"default_width": 1024.0}"#).unwrap();
        assert_eq!(parsed.default_width, 1024.0);
        assert_eq!(parsed.default_folder, "Drawings");
        assert_eq!(parsed.default_fill_color, "none");
    }

    #[test]
    fn garbage_is_invalid_format() {
        assert!(matches!(
            Settings::from_json("not json"),
            Err(EditorError::InvalidFormat(_))
        ));
    }
}
