//! Application records as returned by the management service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Treat an explicit `null` the same as a missing field.
///
/// The service encodes nil slices and maps as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An application stored by the management service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Raw application definition
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_file: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of the application listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationPage {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub applications: Vec<Application>,
}

impl ApplicationPage {
    /// First application whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.name == name)
    }
}

/// The fields of an application exposed by `app view <name>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationView {
    pub name: String,
    #[serde(rename = "ID")]
    pub id: Option<Uuid>,
    pub application_file: String,
    #[serde(rename = "UserID")]
    pub user_id: Option<String>,
    pub location: serde_json::Map<String, serde_json::Value>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Application> for ApplicationView {
    fn from(app: &Application) -> Self {
        Self {
            name: app.name.clone(),
            id: app.id,
            application_file: app.application_file.clone(),
            user_id: app.user_id.clone(),
            location: app.location.clone(),
            updated_at: app.updated_at,
            created_at: app.created_at,
        }
    }
}

impl ApplicationView {
    /// Human-readable block printed ahead of the structured output.
    pub fn summary(&self) -> String {
        format!(
            "Name: {}\nID: {}\nApplicationFile: {}\nUpdatedAt: {}\nCreatedAt: {}\nUserID: {}\nLocation: {}\n#####################\n",
            self.name,
            self.id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "<none>".to_string()),
            self.application_file,
            format_time(self.updated_at.as_ref()),
            format_time(self.created_at.as_ref()),
            self.user_id.as_deref().unwrap_or("<none>"),
            serde_json::Value::Object(self.location.clone()),
        )
    }
}

fn format_time(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|t| t.to_string())
        .unwrap_or_else(|| "<none>".to_string())
}
