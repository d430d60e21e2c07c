//! Selecting what to render from a fetched response.

use mctl_core::application::{ApplicationPage, ApplicationView};
use mctl_core::error::{CtlError, Result};
use serde_json::Value;

use crate::query::QueryIntent;

/// The part of a response that gets rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Passed through untouched (by ID, or the `applications` list for `--all`)
    Raw(Value),
    /// The single application matched by name
    Named(ApplicationView),
}

impl Projection {
    /// Structured value to serialize.
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Projection::Raw(value) => Ok(value.clone()),
            Projection::Named(view) => Ok(serde_json::to_value(view)?),
        }
    }

    /// Console block printed before the structured output, if any.
    pub fn summary(&self) -> Option<String> {
        match self {
            Projection::Raw(_) => None,
            Projection::Named(view) => Some(view.summary()),
        }
    }
}

/// Project a successful response body according to `intent`.
pub fn project(intent: &QueryIntent, body: &[u8]) -> Result<Projection> {
    match intent {
        QueryIntent::ById(_) => Ok(Projection::Raw(decode_tree(body)?)),
        QueryIntent::All => {
            let mut tree = decode_tree(body)?;
            let applications = tree
                .get_mut("applications")
                .map(Value::take)
                .unwrap_or(Value::Null);
            Ok(Projection::Raw(serde_json::json!({ "applications": applications })))
        }
        QueryIntent::ByName { name, .. } => {
            let page: ApplicationPage = serde_json::from_slice(body)
                .map_err(|e| CtlError::DecodeFailure(e.to_string()))?;

            if page.total_count == 0 {
                return Err(CtlError::NotFound(
                    "no applications exist. Use `mctl app view --all` to list applications"
                        .to_string(),
                ));
            }

            let app = page.find_by_name(name).ok_or_else(|| {
                CtlError::NotFound(format!(
                    "no application named \"{name}\". Use `mctl app view --all` to list applications"
                ))
            })?;
            tracing::debug!(id = ?app.id, "matched application by name");

            Ok(Projection::Named(ApplicationView::from(app)))
        }
    }
}

fn decode_tree(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| CtlError::DecodeFailure(e.to_string()))
}
