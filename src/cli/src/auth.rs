//! Auth token file used to authenticate against the management service.

use std::path::Path;

use mctl_core::error::{CtlError, Result};
use serde::{Deserialize, Serialize};

/// Contents of the token file written at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    /// Identity provider the token was issued by
    #[serde(default)]
    pub provider: Option<String>,
}

impl AuthToken {
    /// Read a token file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            CtlError::AuthError(format!(
                "Failed to read token file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&data).map_err(|e| {
            CtlError::AuthError(format!(
                "Failed to parse token file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Value of the `Cookie` header carrying this token.
    pub fn cookie(&self) -> String {
        match &self.provider {
            Some(provider) => format!("token={}; provider={}", self.token, provider),
            None => format!("token={}", self.token),
        }
    }

    /// Attach the token to an outgoing request.
    pub fn decorate(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header(reqwest::header::COOKIE, self.cookie())
    }
}
