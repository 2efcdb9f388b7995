//! Configuration management for the places function.

use std::env;
use std::fmt;

use crate::{Error, Result};

/// Table read when `AIRTABLE_TABLE_NAME` is unset or empty.
pub const DEFAULT_TABLE_NAME: &str = "Table 1";

const TOKEN_VAR: &str = "AIRTABLE_PERSONAL_ACCESS_TOKEN";
const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";
const TABLE_NAME_VAR: &str = "AIRTABLE_TABLE_NAME";

/// Application configuration, resolved once at cold start.
///
/// Missing credentials are not a startup failure: every request answers with
/// a configuration error instead, so preflight requests keep working.
#[derive(Clone)]
pub struct Config {
    /// Airtable personal access token
    pub access_token: Option<String>,
    /// Airtable base identifier
    pub base_id: Option<String>,
    /// Table holding the place records
    pub table_name: String,
}

/// Token and base id, both present.
#[derive(Clone)]
pub struct Credentials {
    pub access_token: String,
    pub base_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            access_token: non_empty(TOKEN_VAR),
            base_id: non_empty(BASE_ID_VAR),
            table_name: non_empty(TABLE_NAME_VAR)
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
        }
    }

    /// Token and base id, or `Error::CredentialsMissing` if either is unset.
    pub fn credentials(&self) -> Result<Credentials> {
        match (&self.access_token, &self.base_id) {
            (Some(access_token), Some(base_id)) => Ok(Credentials {
                access_token: access_token.clone(),
                base_id: base_id.clone(),
            }),
            _ => Err(Error::CredentialsMissing),
        }
    }
}

impl Default for Config {
    /// Configuration with no variables set.
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("base_id", &self.base_id)
            .finish()
    }
}
