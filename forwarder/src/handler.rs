//! Lambda runtime entry point for SNS notification events

use lambda_runtime::{Error, LambdaEvent};
use queue::MessageQueue;
use tracing::{info_span, Instrument};

use crate::{event::NotificationBatch, forwarder::Forwarder};

/// Handles one Lambda invocation by forwarding its SNS records
///
/// A failed submission fails the invocation, leaving redelivery to the
/// runtime's own retry policy.
///
/// # Errors
///
/// Returns the `SubmissionError` of the first record that could not be delivered
pub async fn function_handler<Q: MessageQueue>(
    forwarder: &Forwarder<Q>,
    event: LambdaEvent<NotificationBatch>,
) -> Result<(), Error> {
    let (batch, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    forwarder.handle(&batch).instrument(span).await?;

    Ok(())
}
