use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wavebridge_codec::CodecConfig;

pub const DEFAULT_CONFIG_NAME: &str = "wavebridge.config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Process-wide settings, read once at startup and shared by reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Protocol version stamped on every outbound bundle
    #[serde(default = "default_version")]
    pub version: String,

    /// Prefix of locally synthesized placeholder ids
    #[serde(default = "default_placeholder_prefix")]
    pub placeholder_prefix: String,

    /// Wavelet id given to wavelets created locally
    #[serde(default = "default_root_wavelet_id")]
    pub root_wavelet_id: String,

    /// Field naming the variant of a content element bag
    #[serde(default = "default_discriminator_field")]
    pub discriminator_field: String,
}

fn default_version() -> String {
    "0.1".to_string()
}

fn default_placeholder_prefix() -> String {
    "TBD_".to_string()
}

fn default_root_wavelet_id() -> String {
    "conv+root".to_string()
}

fn default_discriminator_field() -> String {
    wavebridge_codec::DEFAULT_DISCRIMINATOR_FIELD.to_string()
}

impl BridgeConfig {
    /// Load `wavebridge.config.json` from a directory, or defaults if absent
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(DEFAULT_CONFIG_NAME);

        if path.exists() {
            Self::load_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::Invalid("version must not be empty".to_string()));
        }
        if self.placeholder_prefix.is_empty() {
            return Err(ConfigError::Invalid("placeholderPrefix must not be empty".to_string()));
        }
        if self.discriminator_field.is_empty() {
            return Err(ConfigError::Invalid("discriminatorField must not be empty".to_string()));
        }
        Ok(())
    }

    /// Element registry matching this configuration
    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig::with_discriminator(self.discriminator_field.clone())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            placeholder_prefix: default_placeholder_prefix(),
            root_wavelet_id: default_root_wavelet_id(),
            discriminator_field: default_discriminator_field(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "version": "0.21",
            "placeholderPrefix": "local:",
            "rootWaveletId": "conv+root"
        }"#;

        let config = BridgeConfig::from_json(json).unwrap();
        assert_eq!(config.version, "0.21");
        assert_eq!(config.placeholder_prefix, "local:");
        assert_eq!(config.discriminator_field, "javaClass");
    }

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.version, "0.1");
        assert_eq!(config.placeholder_prefix, "TBD_");
        assert_eq!(config.root_wavelet_id, "conv+root");
        assert_eq!(config.codec_config().discriminator_field(), "javaClass");
    }

    #[test]
    fn test_empty_version_is_invalid() {
        assert!(matches!(
            BridgeConfig::from_json(r#"{ "version": " " }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(BridgeConfig::load(dir.path()).unwrap(), BridgeConfig::default());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "version": "0.22" }"#).unwrap();
        assert_eq!(BridgeConfig::load(dir.path()).unwrap().version, "0.22");
    }
}
