#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod fixtures;
pub mod forwarder;
pub mod handler;
pub mod types;

pub use config::ForwarderConfig;
pub use error::SubmissionError;
pub use event::{ForwardedMessage, NotificationBatch, NotificationRecord};
pub use forwarder::Forwarder;
