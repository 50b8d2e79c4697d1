//! Configuration module
//!
//! Process-wide settings read once at startup: where transcoded outputs go,
//! which role MediaConvert assumes, where templates are read from and how
//! logs are formatted. Missing required values are startup-fatal.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const TEMPLATE_PREFIX: &str = "transcoder_config";
const JOB_APPLICATION_LABEL: &str = "MediaConvertApp";

/// Variables without which the process refuses to start.
pub const REQUIRED_ENV_VARS: &[&str] = &["DESTINATION_BUCKET", "MEDIACONVERT_ROLE"];

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub destination_bucket: String,
    pub mediaconvert_role: String,
    pub aws_region: Option<String>,
    /// Overrides the regional MediaConvert endpoint (account endpoints, local fakes)
    pub mediaconvert_endpoint: Option<String>,
    pub template_prefix: String,
    pub job_application_label: String,
    pub storage_backend: StorageBackend,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub local_storage_path: Option<String>,
    pub environment: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        validate_env()?;
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let destination_bucket = non_empty("DESTINATION_BUCKET")
            .ok_or_else(|| anyhow::anyhow!("DESTINATION_BUCKET must be set"))?;
        let mediaconvert_role = non_empty("MEDIACONVERT_ROLE")
            .ok_or_else(|| anyhow::anyhow!("MEDIACONVERT_ROLE must be set"))?;

        let storage_backend = match non_empty("STORAGE_BACKEND") {
            Some(s) => s.parse()?,
            None => StorageBackend::S3,
        };

        let log_format = match non_empty("LOG_FORMAT") {
            Some(s) => s.parse()?,
            None => LogFormat::Json,
        };

        let config = Config {
            destination_bucket: destination_bucket.trim().to_string(),
            mediaconvert_role: mediaconvert_role.trim().to_string(),
            aws_region: non_empty("AWS_REGION"),
            mediaconvert_endpoint: non_empty("MEDIACONVERT_ENDPOINT"),
            template_prefix: non_empty("TEMPLATE_PREFIX")
                .map(|p| p.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| TEMPLATE_PREFIX.to_string()),
            job_application_label: non_empty("JOB_APPLICATION_LABEL")
                .unwrap_or_else(|| JOB_APPLICATION_LABEL.to_string()),
            storage_backend,
            s3_endpoint: non_empty("S3_ENDPOINT"),
            local_storage_path: non_empty("LOCAL_STORAGE_PATH"),
            environment: non_empty("ENVIRONMENT")
                .or_else(|| non_empty("APP_ENV"))
                .unwrap_or_else(|| "development".to_string()),
            log_format,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.destination_bucket.contains('/') {
            return Err(anyhow::anyhow!(
                "DESTINATION_BUCKET must be a bucket name, not a path"
            ));
        }

        if self.template_prefix.contains("..") || self.template_prefix.starts_with('/') {
            return Err(anyhow::anyhow!(
                "TEMPLATE_PREFIX must not contain '..' or start with '/'"
            ));
        }

        if self.storage_backend == StorageBackend::Local && self.local_storage_path.is_none() {
            return Err(anyhow::anyhow!(
                "LOCAL_STORAGE_PATH must be set when using local storage backend"
            ));
        }

        Ok(())
    }
}

/// Report every required variable that is unset or empty.
pub fn validate_env() -> Result<(), anyhow::Error> {
    let missing: Vec<&str> = REQUIRED_ENV_VARS
        .iter()
        .copied()
        .filter(|name| env::var(name).map(|v| v.trim().is_empty()).unwrap_or(true))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Missing required environment variables: {}",
            missing.join(", ")
        ))
    }
}
