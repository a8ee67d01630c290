use std::env;

use queue::QueueConfig;

/// Queue the forwarder delivers to when `FORWARDER_QUEUE_URL` is not set
pub const DEFAULT_QUEUE_URL: &str =
    "https://sqs.eu-west-2.amazonaws.com/535002890543/RealWorlddemoQueue";

/// Region used when `AWS_REGION` is not set
pub const DEFAULT_REGION: &str = "eu-west-2";

/// Destination settings for the forwarder, resolved once per process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderConfig {
    /// Queue every record is forwarded to
    pub queue_url: String,
    /// Region the queue lives in
    pub region: String,
}

impl ForwarderConfig {
    /// Creates a new `ForwarderConfig` from `FORWARDER_QUEUE_URL` and
    /// `AWS_REGION`, falling back to the literal defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            queue_url: env::var("FORWARDER_QUEUE_URL")
                .unwrap_or_else(|_| DEFAULT_QUEUE_URL.to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
        }
    }

    /// Queue configuration for the destination queue
    #[must_use]
    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig {
            queue_url: self.queue_url.clone(),
        }
    }
}
