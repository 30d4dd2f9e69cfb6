//! Application context for CLI command execution.
//!
//! This module provides the `App` struct that owns the record store and
//! provides the execution context for CLI commands. The store is an
//! explicitly owned, injectable value rather than a process-wide
//! singleton, so tests construct isolated instances freely.

use crate::config::InspectaConfig;
use crate::error::Result;
use crate::store::{RecordStore, new_in_memory_store};
use std::path::Path;

/// Application context for CLI operations.
pub struct App {
    /// The store backend (trait object for polymorphism)
    store: Box<dyn RecordStore>,

    /// Configuration the store was built from
    config: InspectaConfig,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("store", &"<dyn RecordStore>")
            .finish()
    }
}

impl App {
    /// Create an App from an already loaded configuration.
    pub fn from_config(config: InspectaConfig) -> Self {
        let store = new_in_memory_store(config.store_options());
        Self { store, config }
    }

    /// Create an App by loading configuration from the given file.
    ///
    /// A missing file means default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn from_config_file(path: &Path) -> Result<Self> {
        let config = InspectaConfig::load_or_default(path).await?;
        Ok(Self::from_config(config))
    }

    /// Create an App around an externally constructed store.
    ///
    /// Used by tests to inject a store with known contents.
    pub fn with_store(store: Box<dyn RecordStore>, config: InspectaConfig) -> Self {
        Self { store, config }
    }

    /// Get an immutable reference to the store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Get a mutable reference to the store.
    pub fn store_mut(&mut self) -> &mut dyn RecordStore {
        self.store.as_mut()
    }

    /// Get the active configuration.
    pub fn config(&self) -> &InspectaConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordQuery;

    fn instant_config() -> InspectaConfig {
        InspectaConfig {
            latency_ms: 0,
            ..InspectaConfig::default()
        }
    }

    #[tokio::test]
    async fn app_builds_seeded_store_from_config() {
        let app = App::from_config(instant_config());

        let page = app.store().list(&RecordQuery::default()).await.unwrap();
        assert_eq!(page.total, 60);
    }

    #[tokio::test]
    async fn apps_are_isolated_instances() {
        let mut a = App::from_config(instant_config());
        let b = App::from_config(instant_config());

        let id = crate::domain::RecordId::new("rec-1");
        a.store_mut().delete(&id).await.unwrap();

        assert!(a.store().get(&id).await.unwrap().is_none());
        assert!(b.store().get(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn with_store_injects_externally_built_contents() {
        use crate::seed::SeedConfig;
        use crate::store::{StoreOptions, new_in_memory_store};

        let store = new_in_memory_store(StoreOptions::instant(SeedConfig { seed: 3, count: 5 }));
        let mut app = App::with_store(store, instant_config());

        let page = app.store().list(&RecordQuery::default()).await.unwrap();
        assert_eq!(page.total, 5);

        // The app operates on the injected store, not a fresh seeded one
        app.store_mut()
            .delete(&crate::domain::RecordId::new("rec-5"))
            .await
            .unwrap();
        let page = app.store().list(&RecordQuery::default()).await.unwrap();
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn missing_config_file_uses_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let app = App::from_config_file(&temp_dir.path().join("inspecta.yaml"))
            .await
            .unwrap();
        assert_eq!(app.config(), &InspectaConfig::default());
    }
}
