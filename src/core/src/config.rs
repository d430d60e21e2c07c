//! mctl configuration file.
//!
//! Lives at `~/.mctl/config.yaml` unless overridden. A missing file is not an
//! error: the built-in local context is used instead.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{CtlError, Result};

/// Endpoint used by the built-in `local` context
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9081";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CtlConfig {
    /// Named contexts
    #[serde(default)]
    pub contexts: HashMap<String, Context>,

    /// Name of the context in use
    pub current_context: String,

    /// Known auth tokens
    #[serde(default)]
    pub tokens: Vec<Token>,

    /// Directory the file was loaded from, used to resolve relative token paths
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// A management service endpoint and the token used against it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Base URL of the service
    pub endpoint: String,

    /// Name of an entry in `tokens`
    #[serde(default)]
    pub token: Option<String>,
}

/// Auth token file reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub location: PathBuf,
}

impl Default for CtlConfig {
    fn default() -> Self {
        let mut contexts = HashMap::new();
        contexts.insert(
            "local".to_string(),
            Context {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                token: Some("default".to_string()),
            },
        );

        Self {
            contexts,
            current_context: "local".to_string(),
            tokens: vec![Token {
                name: "default".to_string(),
                location: PathBuf::from("auth.json"),
            }],
            base_dir: Self::default_dir(),
        }
    }
}

impl CtlConfig {
    /// Config directory (~/.mctl).
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".mctl"))
            .unwrap_or_else(|| PathBuf::from(".mctl"))
    }

    /// Default config file path (~/.mctl/config.yaml).
    pub fn default_path() -> PathBuf {
        Self::default_dir().join("config.yaml")
    }

    /// Load configuration from `path`, falling back to defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path).map_err(|e| {
            CtlError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let mut config: CtlConfig = serde_yaml::from_str(&data).map_err(|e| {
            CtlError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(config)
    }

    /// The context named by `current-context`.
    pub fn current_context(&self) -> Result<&Context> {
        self.contexts.get(&self.current_context).ok_or_else(|| {
            CtlError::ConfigError(format!(
                "current context \"{}\" does not exist",
                self.current_context
            ))
        })
    }

    /// Base URL of the current context, without a trailing slash.
    pub fn base_url(&self) -> Result<String> {
        let context = self.current_context()?;
        Ok(context.endpoint.trim_end_matches('/').to_string())
    }

    /// Path of the auth token file for the current context.
    pub fn token_path(&self) -> Result<PathBuf> {
        let context = self.current_context()?;
        let name = context.token.as_deref().ok_or_else(|| {
            CtlError::ConfigError(format!(
                "context \"{}\" has no token configured",
                self.current_context
            ))
        })?;
        let token = self
            .tokens
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| CtlError::ConfigError(format!("token \"{name}\" does not exist")))?;

        if token.location.is_absolute() {
            Ok(token.location.clone())
        } else {
            Ok(self.base_dir.join(&token.location))
        }
    }
}
