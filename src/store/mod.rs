pub mod sheets;

pub use sheets::SheetsClient;

use crate::error::SyncError;

/// Read/append access to the spreadsheet-like tabular store.
///
/// The pipelines only ever touch the store through this trait, so tests
/// can substitute an in-memory fake for the REST client.
#[allow(async_fn_in_trait)]
pub trait TabularStore {
    /// Read raw string cells for a column range, one vec per row,
    /// starting below the header
    async fn read_column(&self, range: &str) -> Result<Vec<Vec<String>>, SyncError>;

    /// Append rows at the first data row of the target range, in literal
    /// (non-formula) mode. Returns the number of rows the store reports
    /// as inserted.
    async fn append_rows(&self, range: &str, rows: Vec<Vec<String>>) -> Result<usize, SyncError>;
}
