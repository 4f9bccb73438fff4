use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Embedded icon tables, compiled into the binary
const EMBEDDED_CONFIG: &str = include_str!("../config/icon_config.json");

/// Asset root used when no directory is passed on the command line
pub const DEFAULT_ASSET_ROOT: &str = "src/assets";

/// One raster size in an output table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Inserted before `.png`, e.g. `"@2x"`; empty for the 1x file
    pub suffix: String,
    pub width: u32,
    pub height: u32,
}

impl OutputSpec {
    pub fn new(suffix: &str, width: u32, height: u32) -> Self {
        Self {
            suffix: suffix.to_string(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Colour applied to ordinary and active navigation icons
    pub theme_color: String,

    /// Colour of the extra variant produced for special icons
    pub orange_color: String,

    /// Sprite sheets that are never rasterized as standalone icons
    pub excluded_files: Vec<String>,

    /// Tab bar icons; inactive ones keep their original colours
    pub navigation_icons: Vec<String>,

    /// Icons that also get an orange variant
    pub special_icons: Vec<String>,

    pub standard_outputs: Vec<OutputSpec>,

    pub orange_outputs: Vec<OutputSpec>,
}

impl IconConfig {
    /// Load the embedded icon tables and validate them.
    pub fn load_embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: IconConfig = serde_json::from_str(json).map_err(ConfigError::ParseFailed)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, color) in [
            ("theme_color", &self.theme_color),
            ("orange_color", &self.orange_color),
        ] {
            if !is_hex_color(color) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be #rrggbb, got {color:?}"
                )));
            }
        }

        for (name, table) in [
            ("standard_outputs", &self.standard_outputs),
            ("orange_outputs", &self.orange_outputs),
        ] {
            if table.is_empty() {
                return Err(ConfigError::Invalid(format!("{name} is empty")));
            }

            let mut suffixes = HashSet::new();
            for spec in table {
                if spec.width == 0 || spec.height == 0 {
                    return Err(ConfigError::Invalid(format!(
                        "{name} entry {:?} has a zero dimension",
                        spec.suffix
                    )));
                }
                if !suffixes.insert(spec.suffix.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "{name} repeats suffix {:?}",
                        spec.suffix
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_files.iter().any(|name| name == file_name)
    }

    pub fn is_navigation_icon(&self, stem: &str) -> bool {
        self.navigation_icons.iter().any(|name| name == stem)
    }

    pub fn is_special_icon(&self, stem: &str) -> bool {
        self.special_icons.iter().any(|name| name == stem)
    }
}

/// Resolve the asset root from the first positional argument, if any.
pub fn asset_root_from_args<I>(args: I) -> PathBuf
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT))
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded() {
        let config = IconConfig::load_embedded().unwrap();
        assert_eq!(config.theme_color, "#1890ff");
        assert_eq!(config.orange_color, "#ff6b35");
        assert_eq!(
            config.standard_outputs,
            vec![
                OutputSpec::new("", 36, 36),
                OutputSpec::new("@2x", 72, 72),
                OutputSpec::new("@3x", 108, 108),
            ]
        );
        assert_eq!(
            config.orange_outputs,
            vec![OutputSpec::new("", 24, 24), OutputSpec::new("@2x", 48, 48)]
        );
    }

    #[test]
    fn test_icon_lists() {
        let config = IconConfig::load_embedded().unwrap();

        assert!(config.is_excluded("icons.svg"));
        assert!(config.is_excluded("simple-icons.svg"));
        assert!(!config.is_excluded("home.svg"));

        assert!(config.is_navigation_icon("order-active"));
        assert!(!config.is_navigation_icon("Home"));

        assert!(config.is_special_icon("map-pin"));
        assert!(!config.is_special_icon("map-pin-2"));
    }

    #[test]
    fn test_rejects_bad_color() {
        let mut config = IconConfig::load_embedded().unwrap();
        config.theme_color = "blue".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_size_and_duplicate_suffix() {
        let mut config = IconConfig::load_embedded().unwrap();
        config.orange_outputs.push(OutputSpec::new("@3x", 0, 72));
        assert!(config.validate().is_err());

        let mut config = IconConfig::load_embedded().unwrap();
        config.standard_outputs.push(OutputSpec::new("@2x", 144, 144));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let result = IconConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_asset_root_from_args() {
        let default = asset_root_from_args(vec!["generate-icons".to_string()]);
        assert_eq!(default, PathBuf::from(DEFAULT_ASSET_ROOT));

        let custom = asset_root_from_args(vec![
            "generate-icons".to_string(),
            "frontend/assets".to_string(),
        ]);
        assert_eq!(custom, PathBuf::from("frontend/assets"));
    }
}
