mod handler;
mod setup;

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{service_fn, LambdaEvent};
use mediarelay_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration; missing required variables stop the process here
    let config = Config::from_env().context("Failed to load configuration")?;

    mediarelay_infra::init_telemetry(config.log_format, &config.environment)
        .context("Failed to initialize telemetry")?;

    let dispatcher = Arc::new(setup::build_dispatcher(&config).await?);

    let result = lambda_runtime::run(service_fn(move |event: LambdaEvent<SqsEvent>| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { handler::handle_batch(&dispatcher, event).await }
    }))
    .await;

    mediarelay_infra::shutdown_telemetry().await;
    result.map_err(|e| anyhow::anyhow!("Function runtime exited: {}", e))
}
