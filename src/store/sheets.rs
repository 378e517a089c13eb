use crate::config::StoreConfig;
use crate::error::{ConfigError, StoreApiError, SyncError};
use crate::store::TabularStore;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fs;

/// Service-account credential file contents.
///
/// Token minting is handled outside this process; the file carries a
/// ready bearer token alongside the account identity.
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct AppendRequest {
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
struct AppendUpdates {
    #[serde(rename = "updatedRows")]
    updated_rows: Option<usize>,
}

/// Thin REST client for the spreadsheet values API
#[derive(Clone, Debug)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

impl SheetsClient {
    /// Build a client from the store configuration, reading the bearer
    /// token from the service-account credential file
    pub fn new(config: &StoreConfig) -> Result<Self, SyncError> {
        let content = fs::read_to_string(&config.credentials_path)
            .map_err(|_| ConfigError::CredentialsNotFound(config.credentials_path.clone()))?;
        let key: ServiceAccountKey = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parsing(format!("{}: {}", config.credentials_path, e)))?;
        let token = key.token.ok_or_else(|| {
            ConfigError::Parsing(format!(
                "{}: missing \"token\" field",
                config.credentials_path
            ))
        })?;

        Ok(Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            token,
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        )
    }
}

impl TabularStore for SheetsClient {
    async fn read_column(&self, range: &str) -> Result<Vec<Vec<String>>, SyncError> {
        let response = self
            .client
            .get(self.values_url(range))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(StoreApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let value_range: ValueRange = response.json().await.map_err(StoreApiError::Http)?;
        debug!("read {} row(s) from {}", value_range.values.len(), range);
        Ok(value_range.values)
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> Result<usize, SyncError> {
        let url = format!("{}:append", self.values_url(range));
        let response = self
            .client
            .post(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.token)
            .json(&AppendRequest { values: rows })
            .send()
            .await
            .map_err(StoreApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreApiError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body: AppendResponse = response.json().await.map_err(StoreApiError::Http)?;
        body.updates
            .and_then(|u| u.updated_rows)
            .ok_or_else(|| StoreApiError::Decode("append response lacks updatedRows".to_string()).into())
    }
}
