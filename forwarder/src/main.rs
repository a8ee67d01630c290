use std::sync::Arc;

use aws_sdk_sqs::Client as SqsClient;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use queue::SqsQueue;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

use sns_forwarder::{
    handler::function_handler, types::Environment, Forwarder, ForwarderConfig, NotificationBatch,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let environment = Environment::from_env();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // JSON for staging/production, CloudWatch stamps every line itself
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    }

    let config = ForwarderConfig::from_env();
    info!(
        "Starting SNS forwarder in {:?} environment, queue {} in {}",
        environment, config.queue_url, config.region
    );

    let aws_config = environment.aws_config(&config.region).await;
    let sqs_client = Arc::new(SqsClient::new(&aws_config));
    let forwarder = Forwarder::new(SqsQueue::new(sqs_client, config.queue_config()));

    let forwarder = &forwarder;
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<NotificationBatch>| async move {
            function_handler(forwarder, event).await
        },
    ))
    .await
}
