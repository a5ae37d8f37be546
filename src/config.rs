//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.bevprice/config.toml` (user)
//! 3. `/etc/bevprice/config.toml` (system)
//!
//! With no file at all, defaults are used: no model configured and fail-fast
//! validation. `BEVPRICE_MODEL_PATH` overrides `model.path`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ModelSource;
use crate::validate::ValidationPolicy;
use crate::{BevpriceError, Result};

/// Environment variable overriding the configured model path.
pub const MODEL_PATH_ENV: &str = "BEVPRICE_MODEL_PATH";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: Option<ModelConfig>,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Classifier artifact configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Artifact format (default: linear).
    #[serde(default)]
    pub kind: ModelKind,
    /// Path to the model artifact.
    pub path: PathBuf,
    /// ONNX input tensor name (default: float_input).
    #[serde(default = "default_input_name")]
    pub input_name: String,
    /// ONNX label output name (default: label).
    #[serde(default = "default_output_name")]
    pub output_name: String,
}

/// Supported model artifact formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// JSON weights for a linear classifier.
    #[default]
    Linear,
    /// ONNX model (requires the `onnx` feature).
    Onnx,
}

impl ModelKind {
    /// The kind a file extension names: `.onnx` or `.json`.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("onnx") => Some(Self::Onnx),
            Some("json") => Some(Self::Linear),
            _ => None,
        }
    }

    /// Guess the kind from a file extension, defaulting to linear.
    pub fn from_path(path: &Path) -> Self {
        Self::from_extension(path).unwrap_or_default()
    }
}

fn default_input_name() -> String {
    "float_input".to_string()
}

fn default_output_name() -> String {
    "label".to_string()
}

/// Input validation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub policy: ValidationPolicy,
}

impl ModelConfig {
    /// A model config for `path`, with the kind inferred from its extension.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            kind: ModelKind::from_path(&path),
            path,
            input_name: default_input_name(),
            output_name: default_output_name(),
        }
    }

    /// Convert to a loadable [`ModelSource`].
    pub fn source(&self) -> Result<ModelSource> {
        match self.kind {
            ModelKind::Linear => Ok(ModelSource::Linear {
                path: self.path.clone(),
            }),
            #[cfg(feature = "onnx")]
            ModelKind::Onnx => Ok(ModelSource::Onnx {
                path: self.path.clone(),
                input_name: self.input_name.clone(),
                output_name: self.output_name.clone(),
            }),
            #[cfg(not(feature = "onnx"))]
            ModelKind::Onnx => Err(BevpriceError::Configuration(
                "ONNX models require the `onnx` feature".to_string(),
            )),
        }
    }
}

impl Config {
    /// Load configuration from the standard locations, then apply the
    /// environment override.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.bevprice/config.toml`
    /// 3. `/etc/bevprice/config.toml`
    /// 4. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        Ok(config.with_model_path(std::env::var_os(MODEL_PATH_ENV).map(PathBuf::from)))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| BevpriceError::Configuration(format!("Failed to parse config: {e}")))
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BevpriceError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            BevpriceError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Replace the model path, keeping the rest of the model section.
    ///
    /// A `.onnx` or `.json` extension on the new path sets the kind; any
    /// other path keeps the configured kind. With no model section yet, one
    /// is created from the path alone.
    pub fn with_model_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.model = Some(match self.model.take() {
                Some(model) => ModelConfig {
                    kind: ModelKind::from_extension(&path).unwrap_or(model.kind),
                    path,
                    ..model
                },
                None => ModelConfig::for_path(path),
            });
        }
        self
    }

    /// Resolve the config file path, if any.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(BevpriceError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".bevprice").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/bevprice/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
