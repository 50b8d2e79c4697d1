//! AWS Elemental MediaConvert client
//!
//! Submits `CreateJob` over the service's REST API. The SDK's typed
//! `JobSettings` cannot carry an arbitrary authored template, so the request is
//! built from the settings document directly and signed with SigV4 using the
//! default AWS credential chain.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningParams, SigningSettings};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::SystemTime;

use mediarelay_core::Config;

use crate::traits::{JobHandle, Transcoder, TranscoderError, TranscoderResult};
use crate::wire::to_wire_casing;

const SIGNING_NAME: &str = "mediaconvert";
const CREATE_JOB_PATH: &str = "/2017-08-29/jobs";

#[derive(Debug, Deserialize)]
struct CreateJobResponse {
    job: Option<JobSummary>,
}

#[derive(Debug, Deserialize)]
struct JobSummary {
    id: Option<String>,
    arn: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceErrorBody {
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// MediaConvert implementation of [`Transcoder`]
#[derive(Clone)]
pub struct MediaConvertClient {
    http: reqwest::Client,
    endpoint: String,
    region: String,
    credentials: SharedCredentialsProvider,
}

impl Debug for MediaConvertClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MediaConvertClient")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .finish()
    }
}

impl MediaConvertClient {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        region: impl Into<String>,
        credentials: SharedCredentialsProvider,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            region: region.into(),
            credentials,
        }
    }

    /// Build a client from the shared AWS configuration chain.
    ///
    /// The endpoint defaults to the regional one,
    /// `https://mediaconvert.{region}.amazonaws.com`, unless overridden.
    pub async fn from_config(config: &Config) -> TranscoderResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.aws_region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let region = sdk_config
            .region()
            .map(|r| r.as_ref().to_string())
            .ok_or_else(|| {
                TranscoderError::ConfigError("AWS_REGION not configured".to_string())
            })?;
        let credentials = sdk_config.credentials_provider().ok_or_else(|| {
            TranscoderError::Credentials("no AWS credentials provider configured".to_string())
        })?;

        let endpoint = config
            .mediaconvert_endpoint
            .clone()
            .unwrap_or_else(|| format!("https://mediaconvert.{}.amazonaws.com", region));

        tracing::info!(endpoint = %endpoint, region = %region, "MediaConvert client configured");

        Ok(Self::new(reqwest::Client::new(), endpoint, region, credentials))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sign a JSON POST and return the headers to send with it.
    async fn signed_headers(&self, url: &str, body: &[u8]) -> TranscoderResult<Vec<(String, String)>> {
        let credentials = self
            .credentials
            .provide_credentials()
            .await
            .map_err(|e| TranscoderError::Credentials(e.to_string()))?;
        let identity: Identity = credentials.into();

        let signing_params: SigningParams<'_> = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(SIGNING_NAME)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| TranscoderError::Signing(e.to_string()))?
            .into();

        let content_headers = [("content-type", "application/json")];
        let signable = SignableRequest::new(
            "POST",
            url,
            content_headers.iter().copied(),
            SignableBody::Bytes(body),
        )
        .map_err(|e| TranscoderError::Signing(e.to_string()))?;

        let (instructions, _signature) = sign(signable, &signing_params)
            .map_err(|e| TranscoderError::Signing(e.to_string()))?
            .into_parts();

        let mut headers: Vec<(String, String)> = content_headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        headers.extend(
            instructions
                .headers()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        Ok(headers)
    }
}

#[async_trait]
impl Transcoder for MediaConvertClient {
    #[tracing::instrument(skip(self, user_metadata, settings), fields(endpoint = %self.endpoint))]
    async fn submit(
        &self,
        role: &str,
        user_metadata: &HashMap<String, String>,
        settings: &Value,
    ) -> TranscoderResult<JobHandle> {
        let url = format!("{}{}", self.endpoint, CREATE_JOB_PATH);
        let body = serde_json::to_vec(&json!({
            "role": role,
            "userMetadata": user_metadata,
            "settings": to_wire_casing(settings),
        }))
        .map_err(|e| TranscoderError::InvalidResponse(format!("request encoding: {}", e)))?;

        let headers = self.signed_headers(&url, &body).await?;
        let start = std::time::Instant::now();

        let mut request = self.http.post(&url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.body(body).send().await.map_err(|e| {
            tracing::error!(error = %e, "MediaConvert request failed");
            TranscoderError::Transport(e.to_string())
        })?;

        let status = response.status();
        let error_type = response
            .headers()
            .get("x-amzn-errortype")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(':').next().unwrap_or(v).to_string());
        let text = response
            .text()
            .await
            .map_err(|e| TranscoderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(text);
            tracing::warn!(
                status = status.as_u16(),
                error_type = error_type.as_deref().unwrap_or("Unknown"),
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "MediaConvert rejected job"
            );
            return Err(TranscoderError::Rejected {
                status: status.as_u16(),
                error_type: error_type.unwrap_or_else(|| "Unknown".to_string()),
                message,
            });
        }

        let job = serde_json::from_str::<CreateJobResponse>(&text)
            .map_err(|e| TranscoderError::InvalidResponse(e.to_string()))?
            .job
            .ok_or_else(|| TranscoderError::InvalidResponse("response has no job".to_string()))?;
        let id = job
            .id
            .ok_or_else(|| TranscoderError::InvalidResponse("job has no id".to_string()))?;

        tracing::info!(
            job_id = %id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "MediaConvert job created"
        );

        Ok(JobHandle {
            id,
            arn: job.arn,
            status: job.status,
        })
    }
}
