//! Fixture data for exercising the handler outside of Lambda

use std::sync::Arc;

use chrono::{Duration, Utc};
use lambda_runtime::{Config, Context, LambdaEvent};
use serde_json::json;

use crate::event::{NotificationBatch, NotificationRecord};

/// Subscription the fixture record was delivered through
pub const MOCK_SUBSCRIPTION_ARN: &str =
    "arn:aws:sns:eu-west-2:123456789012:RealWorlddemoTopic:2bcfbf39-05c3-41de-beaa-fcfcc21c8f55";

/// A one-record SNS notification batch shaped like a real delivery
#[must_use]
pub fn mock_notification_event() -> NotificationBatch {
    NotificationBatch {
        records: vec![NotificationRecord {
            event_version: "1.0".to_string(),
            event_subscription_arn: MOCK_SUBSCRIPTION_ARN.to_string(),
            event_source: "aws:sns".to_string(),
            sns: json!({
                "Type": "Notification",
                "MessageId": "95df01b4-ee98-5cb9-9903-4c221d41eb5e",
                "TopicArn": "arn:aws:sns:eu-west-2:123456789012:RealWorlddemoTopic",
                "Subject": "example subject",
                "Message": "example message",
                "Timestamp": "2025-02-12T19:12:42.000Z",
                "SignatureVersion": "1",
                "Signature": "EXAMPLE",
                "SigningCertUrl": "EXAMPLE",
                "UnsubscribeUrl": "EXAMPLE",
                "MessageAttributes": {
                    "Test": { "Type": "String", "Value": "TestString" }
                }
            }),
        }],
    }
}

/// Invocation context for a test function with one second left to run
#[must_use]
pub fn mock_context() -> Context {
    let mut config = Config::default();
    config.function_name = "testFunction".to_string();
    config.version = "$LATEST".to_string();
    config.memory = 128;
    config.log_group = "/aws/lambda/testFunction".to_string();
    config.log_stream = "testLogStream".to_string();

    let deadline = Utc::now() + Duration::milliseconds(1000);

    let mut context = Context::default();
    context.request_id = "test-request-id".to_string();
    context.invoked_function_arn =
        "arn:aws:lambda:us-east-1:123456789012:function:testFunction".to_string();
    context.deadline = u64::try_from(deadline.timestamp_millis()).unwrap_or_default();
    context.env_config = Arc::new(config);
    context
}

/// The mock notification event wrapped with the mock context
#[must_use]
pub fn mock_lambda_event() -> LambdaEvent<NotificationBatch> {
    LambdaEvent::new(mock_notification_event(), mock_context())
}
