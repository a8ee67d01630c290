//! SNS notification events and the messages forwarded from them

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Batch of SNS records delivered in a single invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotificationBatch {
    /// Records in delivery order
    #[serde(rename = "Records", default)]
    pub records: Vec<NotificationRecord>,
}

/// A single SNS delivery record
///
/// Only the four forwarded fields are kept; anything else the runtime sends
/// with the record is dropped during deserialization. Field order here is the
/// key order of the forwarded message body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationRecord {
    pub event_version: String,
    pub event_subscription_arn: String,
    pub event_source: String,
    /// SNS message envelope, passed through as-is
    pub sns: Value,
}

/// Message submitted to the destination queue for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedMessage {
    /// Queue URL the message is delivered to
    pub destination: String,
    /// JSON projection of the originating record
    pub body: String,
}

impl ForwardedMessage {
    /// Builds the message for `record`, addressed to `destination`
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the record cannot be serialized
    pub fn from_record(
        destination: impl Into<String>,
        record: &NotificationRecord,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            destination: destination.into(),
            body: serde_json::to_string(record)?,
        })
    }
}
