//! Batch accumulation.
//!
//! Records are buffered per output file until a count or size limit would be
//! crossed, then rendered and handed to the file sink in one write.

mod types;
mod writer;

pub use types::{AppendOutcome, BatchLimits};
pub use writer::BatchWriter;
