use pediguide_core::models::form_config::{default_form_config, FormConfig};
use pediguide_core::storage_keys;

use crate::bucket::Bucket;
use crate::error::StorageError;
use crate::BoxFuture;

/// Holder of the single active form configuration.
///
/// Backends implement `load_config`/`save_config`; callers use `get`/`put`.
/// Concurrent writers race and the last one wins.
pub trait ConfigStore: Send + Sync {
    /// Read the stored configuration. `None` = nothing saved yet.
    fn load_config(&self) -> BoxFuture<'_, Result<Option<FormConfig>, StorageError>>;

    /// Replace the stored configuration in one write.
    fn save_config<'a>(&'a self, config: &'a FormConfig) -> BoxFuture<'a, Result<(), StorageError>>;

    /// The active configuration. Persists the default on first access.
    fn get(&self) -> BoxFuture<'_, Result<FormConfig, StorageError>> {
        Box::pin(async move {
            if let Some(config) = self.load_config().await? {
                return Ok(config);
            }

            let config = default_form_config();
            self.save_config(&config).await?;
            tracing::info!("no stored form configuration, saved the default");
            Ok(config)
        })
    }

    /// Make `config` the active configuration.
    fn put(&self, config: FormConfig) -> BoxFuture<'_, Result<FormConfig, StorageError>> {
        Box::pin(async move {
            self.save_config(&config).await?;
            tracing::info!(fields = config.fields.len(), "form configuration replaced");
            Ok(config)
        })
    }
}

/// Stores the configuration as a single JSON object.
pub struct S3ConfigStore {
    bucket: Bucket,
}

impl S3ConfigStore {
    pub fn new(bucket: Bucket) -> Self {
        Self { bucket }
    }
}

impl ConfigStore for S3ConfigStore {
    fn load_config(&self) -> BoxFuture<'_, Result<Option<FormConfig>, StorageError>> {
        Box::pin(async move { self.bucket.find_json(&storage_keys::form_config()).await })
    }

    fn save_config<'a>(&'a self, config: &'a FormConfig) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move { self.bucket.put_json(&storage_keys::form_config(), config).await })
    }
}
