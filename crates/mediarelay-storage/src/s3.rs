use crate::traits::{ObjectSource, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStoreExt, Result as ObjectResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// S3 storage implementation
///
/// Notifications name the bucket, so one `AmazonS3` store is built per bucket
/// on first use and reused for the life of the process.
#[derive(Clone)]
pub struct S3Storage {
    stores: Arc<RwLock<HashMap<String, Arc<AmazonS3>>>>,
    region: Option<String>,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `region` - AWS region; when `None` the builder reads `AWS_REGION` itself
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(region: Option<String>, endpoint_url: Option<String>) -> Self {
        S3Storage {
            stores: Arc::new(RwLock::new(HashMap::new())),
            region,
            endpoint_url,
        }
    }

    fn build_store(&self, bucket: &str) -> StorageResult<AmazonS3> {
        // Credentials and region come from the environment, as in the function runtime.
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);

        if let Some(ref region) = self.region {
            builder = builder.with_region(region.clone());
        }

        if let Some(ref endpoint) = self.endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))
    }

    fn store_for(&self, bucket: &str) -> StorageResult<Arc<AmazonS3>> {
        {
            let stores = self
                .stores
                .read()
                .map_err(|_| StorageError::BackendError("S3 store cache poisoned".to_string()))?;
            if let Some(store) = stores.get(bucket) {
                return Ok(Arc::clone(store));
            }
        }

        let store = Arc::new(self.build_store(bucket)?);
        let mut stores = self
            .stores
            .write()
            .map_err(|_| StorageError::BackendError("S3 store cache poisoned".to_string()))?;
        let store = stores
            .entry(bucket.to_string())
            .or_insert(store)
            .clone();

        tracing::debug!(bucket = %bucket, "S3 store initialized");
        Ok(store)
    }
}

#[async_trait]
impl ObjectSource for S3Storage {
    async fn get(&self, bucket: &str, key: &str) -> StorageResult<Bytes> {
        let location = object_location(bucket, key)?;
        let store = self.store_for(bucket)?;
        let start = std::time::Instant::now();

        let result: ObjectResult<_> = store.get(&location).await;

        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(format!("{}/{}", bucket, key)),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 download failed"
                );
                StorageError::DownloadFailed(other.to_string())
            }
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = bytes.len() as u64,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 download successful"
        );

        Ok(bytes)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// S3 keys are opaque: any non-empty key is addressable, `..` and leading `/` included.
fn object_location(bucket: &str, key: &str) -> StorageResult<Path> {
    if bucket.is_empty() {
        return Err(StorageError::InvalidKey("Bucket name is empty".to_string()));
    }
    if key.is_empty() {
        return Err(StorageError::InvalidKey("Object key is empty".to_string()));
    }
    Ok(Path::from(key.to_string()))
}
