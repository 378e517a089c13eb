use crate::error::{DataFormatError, SyncError};
use crate::models::TxLogKind;
use crate::store::TabularStore;

/// Read the highest block number already recorded in a log.
///
/// Scans the block-number column below the header; an empty column means
/// nothing has been synced yet and the watermark is 0. Any non-numeric
/// cell aborts the run, there is no partial recovery.
pub async fn read_watermark<S: TabularStore>(
    store: &S,
    kind: TxLogKind,
) -> Result<u64, SyncError> {
    let range = kind.watermark_range();
    let rows = store.read_column(range).await?;

    let mut max_block = 0u64;
    for row in rows {
        let cell = row.first().map(String::as_str).unwrap_or("");
        let block: u64 =
            cell.trim()
                .parse()
                .map_err(|_| DataFormatError::NonNumericWatermark {
                    range: range.to_string(),
                    cell: cell.to_string(),
                })?;
        max_block = max_block.max(block);
    }
    Ok(max_block)
}
