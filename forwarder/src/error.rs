use queue::QueueError;
use thiserror::Error;

/// A record could not be delivered to the destination queue
///
/// Raised for the first failing record of a batch; records after it are never
/// attempted.
#[derive(Error, Debug)]
#[error("Failed to submit record {record_index} to queue: {source}")]
pub struct SubmissionError {
    /// Zero-based position of the failing record in its batch
    pub record_index: usize,
    /// Underlying queue failure
    #[source]
    pub source: QueueError,
}
