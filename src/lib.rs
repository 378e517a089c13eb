pub mod config;
pub mod error;
pub mod explorer;
pub mod models;
pub mod pipeline;
pub mod store;

pub use config::AppConfig;
pub use error::{Result, SyncError};
pub use explorer::{ExplorerClient, TransactionSource};
pub use pipeline::{SyncOutcome, SyncPipeline};
pub use store::{SheetsClient, TabularStore};
