//! Panel configuration (panel.yaml) parsing.
//!
//! Every field is optional; an absent file gives the fixed `icons/` and
//! `output/foreground.png` paths and the standard cell geometry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};
use crate::types::{Colour, Layout, NamedColours};

/// Default configuration file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "panel.yaml";

/// Configuration loaded from panel.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Directory holding `<name>.png` icons.
    pub icons: PathBuf,

    /// Directory the panel is written to.
    pub output: PathBuf,

    /// Output file name.
    pub filename: String,

    /// Cell geometry.
    pub layout: Layout,

    /// Extra named colours as `name: [r, g, b]`.
    pub colours: BTreeMap<String, [u8; 3]>,

    /// Accept CSS colour names missing from the named table.
    pub css_names: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            icons: PathBuf::from("icons"),
            output: PathBuf::from("output"),
            filename: "foreground.png".to_string(),
            layout: Layout::default(),
            colours: BTreeMap::new(),
            css_names: false,
        }
    }
}

impl PanelConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PanelError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `panel.yaml` in the working directory if it
    /// exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(CONFIG_FILENAME);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| PanelError::Config {
            message: e.to_string(),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.check_layout()?;
        Ok(config)
    }

    /// Full path of the output image.
    pub fn output_path(&self) -> PathBuf {
        self.output.join(&self.filename)
    }

    /// The builtin colour table extended with configured colours.
    pub fn named_colours(&self) -> NamedColours {
        let mut table = NamedColours::builtin();
        table.extend_missing(
            self.colours
                .iter()
                .map(|(name, rgb)| (name.clone(), Colour::from(*rgb))),
        );
        table
    }

    fn check_layout(&self) -> Result<()> {
        let Layout { cell, gap, .. } = self.layout;
        if cell == 0 || gap < cell {
            return Err(PanelError::Config {
                message: format!("layout cell {} does not fit gap {}", cell, gap),
                help: Some("cell must be at least 1 and no larger than gap".to_string()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert_eq!(config.icons, PathBuf::from("icons"));
        assert_eq!(config.output_path(), PathBuf::from("output/foreground.png"));
        assert_eq!(config.layout, Layout::default());
        assert!(config.colours.is_empty());
        assert!(!config.css_names);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = PanelConfig::parse("").unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
icons: assets/icons
output: build
filename: panel.png
layout:
  cell: 32
  edge: 16
  gap: 40
colours:
  brand: [12, 34, 56]
css_names: true
"#;
        let config = PanelConfig::parse(yaml).unwrap();

        assert_eq!(config.icons, PathBuf::from("assets/icons"));
        assert_eq!(config.output_path(), PathBuf::from("build/panel.png"));
        assert_eq!(
            config.layout,
            Layout {
                cell: 32,
                edge: 16,
                gap: 40
            }
        );
        assert_eq!(
            config.named_colours().get("brand"),
            Some(Colour::rgb(12, 34, 56))
        );
        assert!(config.css_names);
    }

    #[test]
    fn test_partial_layout_uses_defaults() {
        let config = PanelConfig::parse("layout:\n  edge: 10\n").unwrap();
        assert_eq!(config.layout.edge, 10);
        assert_eq!(config.layout.cell, 58);
        assert_eq!(config.layout.gap, 82);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            PanelConfig::parse("layout: 12"),
            Err(PanelError::Config { .. })
        ));
        assert!(matches!(
            PanelConfig::parse("layout:\n  cell: 90\n"),
            Err(PanelError::Config { .. })
        ));
        assert!(matches!(
            PanelConfig::parse("colours:\n  bad: [300, 0, 0]\n"),
            Err(PanelError::Config { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PanelConfig::load(Path::new("/nonexistent/panel.yaml")).unwrap_err();
        assert!(matches!(err, PanelError::Io { .. }));
    }
}
