use crate::config::ExplorerConfig;
use crate::error::{SyncError, UpstreamHttpError};
use crate::explorer::TransactionSource;
use crate::models::{RawTxRecord, TxLogKind};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    /// Absent or null when the explorer reports no matching transactions
    #[serde(default)]
    result: Option<Vec<RawTxRecord>>,
}

/// Client for the explorer account API (`txlist` / `txlistinternal`)
#[derive(Clone)]
pub struct ExplorerClient {
    client: Client,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl ExplorerClient {
    pub fn new(config: &ExplorerConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        }
    }
}

impl TransactionSource for ExplorerClient {
    /// One GET for one page of at most `page_size` records.
    ///
    /// Any non-200 status is an [`UpstreamHttpError`], which callers treat
    /// as "nothing to append" rather than a run failure.
    async fn fetch_transactions(
        &self,
        address: &str,
        start_block: u64,
        kind: TxLogKind,
    ) -> Result<Vec<RawTxRecord>, SyncError> {
        let start = start_block.to_string();
        let page_size = self.page_size.to_string();
        let params = [
            ("module", "account"),
            ("action", kind.action()),
            ("address", address),
            ("startblock", start.as_str()),
            ("endblock", "latest"),
            ("page", "1"),
            ("offset", page_size.as_str()),
            ("sort", "asc"),
            ("apikey", self.api_key.as_str()),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(UpstreamHttpError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(UpstreamHttpError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body: ExplorerResponse = response
            .json()
            .await
            .map_err(UpstreamHttpError::Transport)?;

        let records = body.result.unwrap_or_default();
        debug!(
            "explorer returned {} {} record(s) from block {}",
            records.len(),
            kind.label(),
            start_block
        );
        Ok(records)
    }
}
