//! Configuration system
//!
//! [`SdlConfig`] describes how the native libraries are located and how the
//! context is brought up: application metadata, subsystems to initialise,
//! hints applied before initialisation and the log level. It can be stored
//! as TOML or RON through the [`Config`] trait.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

use crate::context::InitFlags;

/// On-disk formats, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Toml => "TOML",
            Self::Ron => "RON",
        })
    }
}

impl ConfigFormat {
    /// Format for `path`, or [`ConfigError::UnsupportedFormat`]
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Serde-backed settings stored as TOML or RON
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Read and parse `path`
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| e.to_string()),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::Parse { format, message })
    }

    /// Serialize to `path`, replacing it
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Ron => {
                ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()).map_err(|e| e.to_string())
            }
        }
        .map_err(|message| ConfigError::Encode { format, message })?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Why a config file could not be loaded, saved or used
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("cannot access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not parse as its format
    #[error("malformed {format} config: {message}")]
    Parse {
        /// Format picked from the extension
        format: ConfigFormat,
        /// Parser message
        message: String,
    },

    /// The value cannot be written in the format
    #[error("cannot encode config as {format}: {message}")]
    Encode {
        /// Format picked from the extension
        format: ConfigFormat,
        /// Serializer message
        message: String,
    },

    /// The path has no `.toml` or `.ron` extension
    #[error("no config format for {0}")]
    UnsupportedFormat(String),

    /// Values that parse but cannot be used
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application metadata reported to SDL (`SDL_SetAppMetadata`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Human readable application name
    pub name: String,
    /// Version string
    pub version: String,
    /// Reverse-DNS identifier, e.g. `com.example.viewer`
    pub identifier: Option<String>,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "SDL Bridge Application".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            identifier: None,
        }
    }
}

/// Context configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdlConfig {
    /// Explicit path of the SDL3 shared library; platform names are tried otherwise
    pub sdl_library: Option<PathBuf>,
    /// Explicit path of the SDL3_ttf shared library
    pub ttf_library: Option<PathBuf>,
    /// Metadata passed to SDL before initialisation
    pub app: AppMetadata,
    /// Subsystems initialised by `Sdl::from_config`
    pub subsystems: InitFlags,
    /// Hints set before the subsystems are initialised
    pub hints: BTreeMap<String, String>,
    /// Log level filter for the Rust side (`env_logger` syntax)
    pub log_level: String,
    /// Forward SDL's own log output into the `log` facade
    pub forward_native_log: bool,
}

impl Default for SdlConfig {
    fn default() -> Self {
        Self {
            sdl_library: None,
            ttf_library: None,
            app: AppMetadata::default(),
            subsystems: InitFlags::VIDEO | InitFlags::EVENTS,
            hints: BTreeMap::new(),
            log_level: "info".to_string(),
            forward_native_log: true,
        }
    }
}

impl Config for SdlConfig {}

impl SdlConfig {
    /// Create a configuration for the named application
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app: AppMetadata {
                name: app_name.into(),
                ..AppMetadata::default()
            },
            ..Self::default()
        }
    }

    /// Set the SDL3 library path
    pub fn with_sdl_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.sdl_library = Some(path.into());
        self
    }

    /// Set the SDL3_ttf library path
    pub fn with_ttf_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.ttf_library = Some(path.into());
        self
    }

    /// Set the application identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.app.identifier = Some(identifier.into());
        self
    }

    /// Replace the subsystem set
    pub fn with_subsystems(mut self, subsystems: InitFlags) -> Self {
        self.subsystems = subsystems;
        self
    }

    /// Add a hint
    pub fn with_hint(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.hints.insert(name.into(), value.into());
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.is_empty() {
            return Err(ConfigError::Invalid("Application name cannot be empty".to_string()));
        }

        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }

        for (name, value) in &self.hints {
            if name.is_empty() {
                return Err(ConfigError::Invalid("Hint names cannot be empty".to_string()));
            }
            if name.contains('\0') || value.contains('\0') {
                return Err(ConfigError::Invalid(format!("Hint {name} contains a nul byte")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SdlConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.subsystems.contains(InitFlags::VIDEO));
        assert!(config.forward_native_log);
    }

    #[test]
    fn test_builder_methods() {
        let config = SdlConfig::new("Viewer")
            .with_identifier("com.example.viewer")
            .with_subsystems(InitFlags::VIDEO | InitFlags::CAMERA)
            .with_hint("SDL_RENDER_VSYNC", "1")
            .with_log_level("debug");

        assert_eq!(config.app.name, "Viewer");
        assert_eq!(config.app.identifier.as_deref(), Some("com.example.viewer"));
        assert!(config.subsystems.contains(InitFlags::CAMERA));
        assert_eq!(config.hints.get("SDL_RENDER_VSYNC").map(String::as_str), Some("1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = SdlConfig::new("");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config = SdlConfig::default().with_log_level("chatty");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config = SdlConfig::default().with_hint("", "1");
        assert!(config.validate().is_err());

        config = SdlConfig::default().with_hint("SDL_VIDEO_DRIVER", "x11\0");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sdl.toml");

        let config = SdlConfig::new("Viewer")
            .with_sdl_library("/opt/sdl/libSDL3.so.0")
            .with_hint("SDL_VIDEO_DRIVER", "dummy");
        config.save_to_file(&path).unwrap();

        let loaded = SdlConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sdl.ron");

        let config = SdlConfig::new("Viewer").with_subsystems(InitFlags::VIDEO | InitFlags::AUDIO);
        config.save_to_file(&path).unwrap();

        let loaded = SdlConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.subsystems, InitFlags::VIDEO | InitFlags::AUDIO);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SdlConfig = toml::from_str("log_level = \"warn\"\n").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.app, AppMetadata::default());
        assert!(config.hints.is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = SdlConfig::default().save_to_file("sdl.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_file_names_its_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sdl.ron");
        std::fs::write(&path, "(app: ").unwrap();

        let err = SdlConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: ConfigFormat::Ron, .. }));
        assert!(err.to_string().starts_with("malformed RON config"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/b.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("viewer.RON")).unwrap(), ConfigFormat::Ron);
        assert!(ConfigFormat::from_path(Path::new("toml")).is_err());
    }
}
