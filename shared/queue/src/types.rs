use async_trait::async_trait;

use crate::error::QueueResult;

/// Configuration for queue operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Queue URL messages are delivered to
    pub queue_url: String,
}

/// A destination that accepts message bodies and acknowledges each with an id
///
/// Implementations are shared across invocations, so they must be usable
/// through a shared reference.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Returns the URL of the queue messages are submitted to
    fn queue_url(&self) -> &str;

    /// Submits a single message body to the queue
    ///
    /// # Returns
    ///
    /// The queue-assigned message ID
    ///
    /// # Errors
    ///
    /// Returns `QueueError` if the queue rejects or never receives the message
    async fn send_message(&self, body: String) -> QueueResult<String>;
}
