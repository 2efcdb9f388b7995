//! Airtable integration: record shapes and the list-records call.

use std::future::Future;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Credentials;
use crate::{Error, Result};

/// Root of the Airtable REST API.
pub const API_ROOT: &str = "https://api.airtable.com/v0";

/// One row of the places table.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamRecord {
    pub id: String,
    #[serde(default)]
    pub fields: PlaceFields,
}

/// Typed view of a record's fields with defaults already applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawFields")]
pub struct PlaceFields {
    pub name: String,
    /// Raw single-select label, emoji not yet stripped
    pub kind: String,
    pub city: String,
    pub description: String,
    pub google_maps_link: String,
    pub notes: String,
    pub added_by: String,
    /// URL of the first photo attachment
    pub photo: Option<String>,
    /// True only when Airtable sent the boolean `true`
    pub approved: bool,
}

/// Fields as Airtable sends them. Values are loosely typed, so each one is
/// kept as JSON and narrowed in `From<RawFields>`.
#[derive(Debug, Deserialize)]
struct RawFields {
    #[serde(rename = "Name")]
    name: Option<Value>,
    #[serde(rename = "Type")]
    kind: Option<Value>,
    #[serde(rename = "City")]
    city: Option<Value>,
    #[serde(rename = "Description")]
    description: Option<Value>,
    #[serde(rename = "Google Maps Link")]
    google_maps_link_spaced: Option<Value>,
    #[serde(rename = "GoogleMapsLink")]
    google_maps_link: Option<Value>,
    #[serde(rename = "Notes")]
    notes: Option<Value>,
    #[serde(rename = "Added By")]
    added_by_spaced: Option<Value>,
    #[serde(rename = "AddedBy")]
    added_by: Option<Value>,
    #[serde(rename = "Photo")]
    photo: Option<Value>,
    #[serde(rename = "Approved")]
    approved: Option<Value>,
}

impl From<RawFields> for PlaceFields {
    fn from(raw: RawFields) -> Self {
        Self {
            name: text(raw.name),
            kind: select_label(raw.kind),
            city: text(raw.city),
            description: text(raw.description),
            google_maps_link: first_text(raw.google_maps_link_spaced, raw.google_maps_link),
            notes: text(raw.notes),
            added_by: first_text(raw.added_by_spaced, raw.added_by),
            photo: first_attachment_url(raw.photo),
            approved: matches!(raw.approved, Some(Value::Bool(true))),
        }
    }
}

fn text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

fn first_text(preferred: Option<Value>, fallback: Option<Value>) -> String {
    let preferred = text(preferred);
    if preferred.is_empty() {
        text(fallback)
    } else {
        preferred
    }
}

// Single selects arrive as `{"name": ...}` from the API, but plain strings
// show up in older bases.
fn select_label(value: Option<Value>) -> String {
    match value {
        Some(Value::Object(mut tag)) => text(tag.remove("name")),
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

fn first_attachment_url(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::Array(attachments)) => attachments
            .into_iter()
            .next()
            .and_then(|mut attachment| attachment.get_mut("url").map(Value::take))
            .and_then(|url| match url {
                Value::String(s) => Some(s),
                _ => None,
            }),
        _ => None,
    }
}

/// List-records response. Only the first page is read.
#[derive(Debug, Deserialize)]
struct ListRecordsResponse {
    records: Vec<UpstreamRecord>,
}

/// Build the list-records URL for a table.
pub fn table_url(api_root: &str, base_id: &str, table_name: &str) -> String {
    format!(
        "{}/{}/{}",
        api_root.trim_end_matches('/'),
        base_id,
        urlencoding::encode(table_name)
    )
}

/// Source of place records.
pub trait RecordSource {
    /// Fetch every record of `table_name`, in the order the source returns them.
    fn list_records(
        &self,
        credentials: &Credentials,
        table_name: &str,
    ) -> impl Future<Output = Result<Vec<UpstreamRecord>>> + Send;
}

/// Airtable REST client.
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http_client: reqwest::Client,
    api_root: String,
}

impl AirtableClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_api_root(http_client, API_ROOT)
    }

    pub fn with_api_root(http_client: reqwest::Client, api_root: impl Into<String>) -> Self {
        Self {
            http_client,
            api_root: api_root.into(),
        }
    }
}

impl RecordSource for AirtableClient {
    async fn list_records(
        &self,
        credentials: &Credentials,
        table_name: &str,
    ) -> Result<Vec<UpstreamRecord>> {
        let url = table_url(&self.api_root, &credentials.base_id, table_name);
        debug!(%url, "Fetching Airtable records");

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", credentials.access_token))
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "Airtable request failed");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        let page: ListRecordsResponse = serde_json::from_slice(&body)?;

        Ok(page.records)
    }
}
