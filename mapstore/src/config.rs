//! Static defaults the store is created with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::record::DrawOption;
use crate::state::SelectOptions;

/// Maximum number of draw options the drawing toolbar shows.
pub const MAX_DRAW_OPTIONS: usize = 3;

/// Configuration of a new [`ConfigStore`](crate::ConfigStore).
///
/// Every field has a default, so a configuration file only needs to list
/// the values it overrides:
///
/// ```
/// use mapstore::StoreConfig;
///
/// let config = StoreConfig::from_json_str(r#"{ "projection": "EPSG:3857" }"#).unwrap();
/// assert_eq!(config.projection, "EPSG:3857");
/// assert_eq!(config.base_layer, "OSM Standard");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Title of the base layer visible at startup.
    pub base_layer: String,
    /// Opacity of the base layer at startup.
    pub base_layer_opacity: f64,
    /// Projection selected at startup.
    pub projection: String,
    /// Initial values of the dropdown and radio controls.
    pub select_options: SelectOptions,
    /// Draw options offered by the drawing toolbar.
    pub draw_options: Vec<DrawOption>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_layer: "OSM Standard".to_string(),
            base_layer_opacity: 1.0,
            projection: "EPSG:4326".to_string(),
            select_options: SelectOptions::default(),
            draw_options: vec![
                DrawOption::new("Show measure tooltip", true),
                DrawOption::new("Show segment lengths", false),
                DrawOption::new("Clear previous measure", true),
            ],
        }
    }
}

impl StoreConfig {
    /// Parses and validates a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading store configuration from {}", path.display());

        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks that the defaults are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.base_layer_opacity) {
            return Err(ConfigError::InvalidOpacity(self.base_layer_opacity));
        }

        if self.projection.trim().is_empty() {
            return Err(ConfigError::EmptyProjection);
        }

        if self.draw_options.len() > MAX_DRAW_OPTIONS {
            return Err(ConfigError::TooManyDrawOptions {
                count: self.draw_options.len(),
                max: MAX_DRAW_OPTIONS,
            });
        }

        for (index, option) in self.draw_options.iter().enumerate() {
            if self.draw_options[..index]
                .iter()
                .any(|other| other.title == option.title)
            {
                return Err(ConfigError::DuplicateDrawOption(option.title.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_layer, "OSM Standard");
        assert_abs_diff_eq!(config.base_layer_opacity, 1.0);
        assert_eq!(config.projection, "EPSG:4326");
        assert_eq!(config.draw_options.len(), 3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = StoreConfig::from_json_str(
            r#"{ "baseLayerOpacity": 0.5, "selectOptions": { "drawType": "Polygon" } }"#,
        )
        .unwrap();

        assert_abs_diff_eq!(config.base_layer_opacity, 0.5);
        assert_eq!(config.select_options.draw_type, "Polygon");
        assert_eq!(
            config.select_options.bing_map_style,
            SelectOptions::default().bing_map_style
        );
        assert_eq!(config.projection, "EPSG:4326");
    }

    #[test]
    fn rejects_opacity_out_of_range() {
        let err = StoreConfig::from_json_str(r#"{ "baseLayerOpacity": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOpacity(v) if v == 1.5));
    }

    #[test]
    fn rejects_empty_projection() {
        let err = StoreConfig::from_json_str(r#"{ "projection": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyProjection));
    }

    #[test]
    fn rejects_too_many_draw_options() {
        let json = r#"{ "drawOptions": [
            { "title": "a", "checked": true },
            { "title": "b", "checked": true },
            { "title": "c", "checked": true },
            { "title": "d", "checked": true }
        ] }"#;
        let err = StoreConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooManyDrawOptions { count: 4, max: 3 }
        ));
    }

    #[test]
    fn rejects_duplicate_draw_options() {
        let json = r#"{ "drawOptions": [
            { "title": "Snap", "checked": true },
            { "title": "Freehand", "checked": false },
            { "title": "Snap", "checked": false }
        ] }"#;
        let err = StoreConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateDrawOption(title) if title == "Snap"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = StoreConfig::from_json_str(r#"{ "zoom": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "baseLayer": "Bing Aerial" }}"#).unwrap();

        let config = StoreConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.base_layer, "Bing Aerial");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
