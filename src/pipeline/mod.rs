pub mod normalize;
pub mod sync;
pub mod watermark;

pub use normalize::normalize;
pub use sync::{SyncOutcome, SyncPipeline};
pub use watermark::read_watermark;
