use aws_sdk_sqs::error::DisplayErrorContext;
use queue::{MessageQueue, QueueResult};
use tracing::{debug, error, info};

use crate::{
    error::SubmissionError,
    event::{ForwardedMessage, NotificationBatch, NotificationRecord},
};

/// `Forwarder` drains notification batches into a single destination queue
///
/// One message is submitted per record, in arrival order, each awaited before
/// the next. The first failed submission aborts the rest of the batch.
pub struct Forwarder<Q> {
    queue: Q,
}

impl<Q: MessageQueue> Forwarder<Q> {
    /// Creates a new `Forwarder` submitting to `queue`
    #[must_use]
    pub const fn new(queue: Q) -> Self {
        Self { queue }
    }

    /// Returns the queue records are forwarded to
    #[must_use]
    pub const fn queue(&self) -> &Q {
        &self.queue
    }

    /// Forwards every record of `batch` to the destination queue
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` for the first record that could not be
    /// delivered. Records before it have already been delivered; records after
    /// it are not attempted.
    pub async fn handle(&self, batch: &NotificationBatch) -> Result<(), SubmissionError> {
        for (record_index, record) in batch.records.iter().enumerate() {
            match self.forward_record(record).await {
                Ok(message_id) => {
                    info!(record_index, %message_id, "Message sent to SQS");
                }
                Err(source) => {
                    // `unsent` includes the failing record
                    error!(
                        record_index,
                        unsent = batch.records.len() - record_index,
                        error = %DisplayErrorContext(&source),
                        "Error sending message to SQS"
                    );
                    return Err(SubmissionError {
                        record_index,
                        source,
                    });
                }
            }
        }

        Ok(())
    }

    /// Submits a single record and returns the queue-assigned message ID
    async fn forward_record(&self, record: &NotificationRecord) -> QueueResult<String> {
        let message = ForwardedMessage::from_record(self.queue.queue_url(), record)?;

        debug!(
            destination = %message.destination,
            subscription_arn = %record.event_subscription_arn,
            "Forwarding notification record"
        );

        self.queue.send_message(message.body).await
    }
}
