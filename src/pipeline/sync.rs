use crate::error::SyncError;
use crate::explorer::TransactionSource;
use crate::models::{TxLogKind, TxRow};
use crate::pipeline::{normalize, read_watermark};
use crate::store::TabularStore;
use log::{info, warn};

/// What a single pipeline run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Rows the store reported as inserted
    Appended(usize),
    /// Fetch succeeded but nothing survived filtering
    NoNewTransactions,
    /// Explorer was unreachable or non-200; nothing appended, run continues
    UpstreamUnavailable,
}

/// One watermark → fetch → normalize → append pass over a single log.
///
/// The explorer and store clients are constructed once per run and
/// injected here; the two pipelines share them but target different logs.
pub struct SyncPipeline<'a, E, S> {
    explorer: &'a E,
    store: &'a S,
    address: &'a str,
    kind: TxLogKind,
}

impl<'a, E: TransactionSource, S: TabularStore> SyncPipeline<'a, E, S> {
    pub fn new(explorer: &'a E, store: &'a S, address: &'a str, kind: TxLogKind) -> Self {
        Self {
            explorer,
            store,
            address,
            kind,
        }
    }

    pub async fn run(&self) -> Result<SyncOutcome, SyncError> {
        let label = self.kind.label();
        let watermark = read_watermark(self.store, self.kind).await?;
        info!("{} log watermark at block {}", label, watermark);

        let records = match self
            .explorer
            .fetch_transactions(self.address, watermark + 1, self.kind)
            .await
        {
            Ok(records) => records,
            Err(SyncError::Upstream(e)) => {
                warn!("{} pipeline skipped: {}", label, e);
                return Ok(SyncOutcome::UpstreamUnavailable);
            }
            Err(e) => return Err(e),
        };

        let rows = normalize(self.kind, records)?;
        if rows.is_empty() {
            info!("no new {} transactions", label);
            return Ok(SyncOutcome::NoNewTransactions);
        }

        let cells: Vec<Vec<String>> = rows.into_iter().map(TxRow::into_cells).collect();
        let inserted = self.store.append_rows(self.kind.append_range(), cells).await?;
        info!("{} row(s) appended to the {} transaction log", inserted, label);
        Ok(SyncOutcome::Appended(inserted))
    }
}
