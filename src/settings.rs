//! Optional settings for the icon generator
//!
//! Loads `config/generate_icons.toml` when present. A missing file means
//! defaults; the artwork, filenames and sizes are never configurable.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_LOG_FILTER};

/// Font sources used to resolve the word mark
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub load_system_fonts: bool,
    /// Extra directories to scan, relative to the crate root unless absolute
    pub font_dirs: Vec<PathBuf>,
    pub default_family: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
            default_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl FontSettings {
    pub fn resolved_font_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.font_dirs.iter().map(|dir| root.join(dir)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// tracing `EnvFilter` directive
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub fonts: FontSettings,
    pub logging: LoggingSettings,
    /// Crate root the output directory and font dirs hang off
    #[serde(skip)]
    pub install_root: PathBuf,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl GeneratorSettings {
    /// Defaults rooted at `install_root`
    pub fn for_root(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
            ..Self::default()
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load settings from file; a missing file yields defaults
    pub fn load(path: &Path, install_root: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::for_root(install_root));
            }
            Err(e) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let mut settings = Self::parse(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        settings.install_root = install_root.to_path_buf();
        Ok(settings)
    }

    /// Like [`GeneratorSettings::load`], but falls back to defaults and hands
    /// back the error so it can be logged once logging is up
    pub fn load_or_default(path: &Path, install_root: &Path) -> (Self, Option<SettingsError>) {
        match Self::load(path, install_root) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::for_root(install_root), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let toml = r#"
[fonts]
font_dirs = ["fonts", "/usr/share/fonts/brand"]
"#;
        let settings = GeneratorSettings::parse(toml).unwrap();
        assert!(settings.fonts.load_system_fonts);
        assert_eq!(settings.fonts.default_family, "Arial");
        assert_eq!(settings.logging.filter, "info");

        let dirs = settings.fonts.resolved_font_dirs(Path::new("/repo"));
        assert_eq!(dirs[0], PathBuf::from("/repo/fonts"));
        assert_eq!(dirs[1], PathBuf::from("/usr/share/fonts/brand"));
    }

    #[test]
    fn test_parse_full_file() {
        let toml = r#"
[fonts]
load_system_fonts = false
font_dirs = []
default_family = "DejaVu Sans"

[logging]
filter = "brand_assets=debug"
"#;
        let settings = GeneratorSettings::parse(toml).unwrap();
        assert!(!settings.fonts.load_system_fonts);
        assert_eq!(settings.fonts.default_family, "DejaVu Sans");
        assert_eq!(settings.logging.filter, "brand_assets=debug");
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings =
            GeneratorSettings::load(&dir.path().join("absent.toml"), dir.path()).unwrap();
        assert_eq!(settings, GeneratorSettings::for_root(dir.path()));
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generate_icons.toml");
        fs::write(&path, "[fonts\nload_system_fonts = maybe").unwrap();

        assert!(matches!(
            GeneratorSettings::load(&path, dir.path()),
            Err(SettingsError::Parse { .. })
        ));

        let (settings, err) = GeneratorSettings::load_or_default(&path, dir.path());
        assert!(err.is_some());
        assert_eq!(settings.install_root, dir.path());
        assert!(settings.fonts.load_system_fonts);
    }

    #[test]
    fn test_shipped_settings_file_parses() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let path = root.join(crate::constants::SETTINGS_FILE);
        let settings = GeneratorSettings::load(&path, root).unwrap();
        assert_eq!(settings.install_root, root);
        assert_eq!(settings.logging.filter, "info");
    }
}
