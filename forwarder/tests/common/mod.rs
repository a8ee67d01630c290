//! Test queue doubles shared by the forwarder integration tests

#![allow(dead_code)]

mod log_capture;

pub use log_capture::{CapturedEvent, LogCapture};

use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_sqs::error::SdkError;
use queue::{MessageQueue, QueueError, QueueResult};
use serde_json::json;
use sns_forwarder::{NotificationBatch, NotificationRecord};

pub const STUB_QUEUE_URL: &str = "https://sqs.eu-west-2.amazonaws.com/000000000000/stub";

/// Queue that records every submitted body and can fail on a chosen call
pub struct StubQueue {
    sent: Mutex<Vec<String>>,
    fail_on_call: Option<usize>,
}

impl StubQueue {
    /// A queue that accepts every message
    pub fn accepting() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on_call: None,
        }
    }

    /// A queue whose `call`-th submission (1-indexed) fails
    pub fn failing_on(call: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    /// Bodies of every attempted submission, in order
    pub fn bodies(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageQueue for StubQueue {
    fn queue_url(&self) -> &str {
        STUB_QUEUE_URL
    }

    async fn send_message(&self, body: String) -> QueueResult<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(body);
        let call = sent.len();

        if self.fail_on_call == Some(call) {
            return Err(QueueError::SendMessage(SdkError::timeout_error(
                "connection timed out",
            )));
        }

        Ok(format!("message-{call}"))
    }
}

/// A record with the given version and subscription, carrying `message`
pub fn record(subscription_arn: &str, message: &str) -> NotificationRecord {
    NotificationRecord {
        event_version: "1.0".to_string(),
        event_subscription_arn: subscription_arn.to_string(),
        event_source: "aws:sns".to_string(),
        sns: json!({ "Message": message }),
    }
}

/// A batch of `len` distinct records
pub fn batch(len: usize) -> NotificationBatch {
    NotificationBatch {
        records: (1..=len)
            .map(|i| record(&format!("arn:test:{i}"), &format!("message {i}")))
            .collect(),
    }
}
