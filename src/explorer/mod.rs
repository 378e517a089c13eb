pub mod client;

pub use client::ExplorerClient;

use crate::error::SyncError;
use crate::models::{RawTxRecord, TxLogKind};

/// Source of raw transaction records for one wallet address.
///
/// Implemented by [`ExplorerClient`] over HTTP; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait TransactionSource {
    /// Fetch transactions affecting `address` in blocks
    /// `start_block..=latest`, ascending
    async fn fetch_transactions(
        &self,
        address: &str,
        start_block: u64,
        kind: TxLogKind,
    ) -> Result<Vec<RawTxRecord>, SyncError>;
}
