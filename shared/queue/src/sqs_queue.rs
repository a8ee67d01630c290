//! SQS queue implementation
//!
//! Standard (non-FIFO) queue: no message group and no deduplication id are
//! attached, so every submission produces a new message.

use crate::{
    error::QueueResult,
    types::{MessageQueue, QueueConfig},
};
use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use std::sync::Arc;

/// SQS queue that forwarded messages are submitted to
pub struct SqsQueue {
    sqs_client: Arc<SqsClient>,
    config: QueueConfig,
}

impl SqsQueue {
    /// Creates a new SQS queue
    ///
    /// # Arguments
    ///
    /// * `sqs_client` - Pre-configured SQS client
    /// * `config` - Queue configuration including the destination URL
    #[must_use]
    pub const fn new(sqs_client: Arc<SqsClient>, config: QueueConfig) -> Self {
        Self { sqs_client, config }
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    fn queue_url(&self) -> &str {
        &self.config.queue_url
    }

    async fn send_message(&self, body: String) -> QueueResult<String> {
        let result = self
            .sqs_client
            .send_message()
            .queue_url(&self.config.queue_url)
            .message_body(body)
            .send()
            .await?;

        let message_id = result
            .message_id()
            .map(std::string::ToString::to_string)
            .unwrap_or_default();

        tracing::debug!(queue_url = %self.config.queue_url, %message_id, "SQS accepted message");

        Ok(message_id)
    }
}
