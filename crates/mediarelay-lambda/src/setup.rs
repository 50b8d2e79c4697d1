//! Capabilities built once per process and shared by every invocation

use std::sync::Arc;

use anyhow::{Context, Result};
use mediarelay_core::Config;
use mediarelay_storage::create_storage;
use mediarelay_transcoder::MediaConvertClient;
use mediarelay_worker::{Dispatcher, DispatcherConfig};

pub async fn build_dispatcher(config: &Config) -> Result<Dispatcher> {
    tracing::info!("Initializing storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage")?;
    tracing::info!(
        backend = %storage.backend_type(),
        "Storage initialized"
    );

    let transcoder = MediaConvertClient::from_config(config)
        .await
        .context("Failed to initialize MediaConvert client")?;

    tracing::info!(
        destination_bucket = %config.destination_bucket,
        template_prefix = %config.template_prefix,
        endpoint = %transcoder.endpoint(),
        "Dispatcher ready"
    );

    Ok(Dispatcher::new(
        storage,
        Arc::new(transcoder),
        DispatcherConfig::from(config),
    ))
}
