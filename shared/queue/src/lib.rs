//! SQS queue integration for the SNS forwarder
//!
//! Provides the [`MessageQueue`] capability the forwarder submits through, and
//! the [`SqsQueue`] implementation backed by AWS SQS.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Error types for queue operations
pub mod error;
/// SQS-backed queue implementation
pub mod sqs_queue;
/// Common types for queue operations
pub mod types;

pub use error::{QueueError, QueueResult};
pub use sqs_queue::SqsQueue;
pub use types::{MessageQueue, QueueConfig};
