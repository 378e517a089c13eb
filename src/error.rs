use thiserror::Error;

/// Main error type for the wallet transaction sync
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Explorer API error: {0}")]
    Upstream(#[from] UpstreamHttpError),

    #[error("Data format error: {0}")]
    DataFormat(#[from] DataFormatError),

    #[error("Store API error: {0}")]
    Store(#[from] StoreApiError),
}

/// Configuration errors
///
/// All of these abort the run before any network call is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Credential file not found: {0}")]
    CredentialsNotFound(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration parsing failed: {0}")]
    Parsing(String),

    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),
}

/// Non-200 responses and transport failures from the explorer API
///
/// These are the only non-fatal errors in the system: the affected
/// pipeline appends nothing and the run continues.
#[derive(Error, Debug)]
pub enum UpstreamHttpError {
    #[error("explorer returned HTTP {status}")]
    Status { status: u16 },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Malformed data, either in the store or in an explorer record
#[derive(Error, Debug)]
pub enum DataFormatError {
    #[error("non-numeric block number cell in {range}: {cell:?}")]
    NonNumericWatermark { range: String, cell: String },

    #[error("record at block {block_number} is missing required field {field}")]
    MissingField {
        block_number: String,
        field: &'static str,
    },

    #[error("unparseable timestamp: {0:?}")]
    BadTimestamp(String),

    #[error("unparseable value: {0:?}")]
    BadValue(String),
}

/// Failures from the tabular store read/append calls
#[derive(Error, Debug)]
pub enum StoreApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("undecodable store response: {0}")]
    Decode(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SyncError>;

impl SyncError {
    /// Whether the error must abort the run.
    ///
    /// Only upstream HTTP failures are survivable: that pipeline skips
    /// its append and the other pipeline still runs.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SyncError::Upstream(_))
    }
}
