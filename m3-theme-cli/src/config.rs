use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "m3-theme.toml";

/// Seed for the CLI when neither a flag nor the config sets one. This call
/// site keeps its own default, distinct from the library's `#6750A4`.
pub const DEFAULT_SEED: &str = "#131313";
pub const DEFAULT_OUTPUT: &str = "theme.css";
pub const DEFAULT_MARKER: &str = "Generated by m3-theme from the seed color. Do not edit.";

/// Contents of `m3-theme.toml`. Every key is optional; flags override it.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub seed: Option<String>,
    pub output: Option<PathBuf>,
    pub marker: Option<String>,
}

impl ThemeConfig {
    /// Loads `explicit` if given (it must exist), otherwise `root/m3-theme.toml`
    /// when present, otherwise the defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn seed<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.seed.as_deref()).unwrap_or(DEFAULT_SEED)
    }

    pub fn output(&self, flag: Option<&Path>) -> PathBuf {
        flag.or(self.output.as_deref())
            .unwrap_or(Path::new(DEFAULT_OUTPUT))
            .to_path_buf()
    }

    pub fn marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ThemeConfig::load(dir.path(), None).unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.seed(None), DEFAULT_SEED);
        assert_eq!(config.output(None), PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.marker(), DEFAULT_MARKER);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(ThemeConfig::load(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn reads_config_from_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "seed = \"#00ff00\"\noutput = \"src/theme.css\"\nmarker = \"custom\"\n",
        )
        .unwrap();

        let config = ThemeConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.seed(None), "#00ff00");
        assert_eq!(config.output(None), PathBuf::from("src/theme.css"));
        assert_eq!(config.marker(), "custom");
    }

    #[test]
    fn flags_override_config() {
        let config = ThemeConfig {
            seed: Some("#00ff00".to_string()),
            output: Some(PathBuf::from("src/theme.css")),
            marker: None,
        };
        assert_eq!(config.seed(Some("#ff0000")), "#ff0000");
        assert_eq!(
            config.output(Some(Path::new("out.css"))),
            PathBuf::from("out.css")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "seed = \"#000000\"\ncolour = \"red\"\n").unwrap();
        assert!(ThemeConfig::load(dir.path(), Some(&path)).is_err());
    }
}
