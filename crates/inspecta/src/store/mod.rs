//! Store abstraction layer for inspection records.
//!
//! This module provides the core store trait and factory for creating
//! store backends. Today there is a single implementation:
//!
//! - **In-memory**: ephemeral storage seeded with a deterministic dataset
//!
//! The trait is written so the in-memory backend can later be swapped for
//! a real HTTP/RPC-backed implementation without changing callers; the
//! signatures are the production contract.
//!
//! # Architecture
//!
//! The store layer uses an async trait to keep the call sites identical
//! between the in-memory backend (which only suspends at its simulated
//! latency) and a future network-backed one. The trait is object-safe,
//! allowing dynamic dispatch via `Box<dyn RecordStore>`.
//!
//! # Concurrency
//!
//! Operations are async units that suspend only at the artificial delay.
//! Overlapping mutations against the same record are not serialized
//! beyond the per-operation lock: last writer wins.
//!
//! # Example
//!
//! ```no_run
//! use inspecta::store::{RecordStore, new_in_memory_store, StoreOptions};
//! use inspecta::domain::RecordQuery;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let store = new_in_memory_store(StoreOptions::default());
//!     let page = store.list(&RecordQuery::default()).await?;
//!     println!("{} records total", page.total);
//!     Ok(())
//! }
//! ```

use crate::domain::{InspectionRecord, Page, RecordId, RecordPatch, RecordQuery};
use crate::error::Result;
use crate::seed::SeedConfig;
use async_trait::async_trait;
use std::time::Duration;

// Store backend implementations
pub mod in_memory;

pub use in_memory::new_in_memory_store;

/// Core store trait for inspection record management.
///
/// Implementations must be `Send + Sync` to support concurrent access in
/// async contexts.
///
/// # Error Handling
///
/// All methods return `Result<T>` where the error type includes:
/// - `RecordNotFound`: update/delete target doesn't exist
/// - `InvalidQuery`: pagination parameters that cannot describe a page
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// List records matching the query as one page.
    ///
    /// Filters to the query's `inspection_type` when present, computes
    /// `total` over the filtered set, and slices out the requested page.
    /// Pages past the end of the result set yield an empty `data` without
    /// error. Read-only.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuery` if `page` or `page_size` is zero.
    async fn list(&self, query: &RecordQuery) -> Result<Page<InspectionRecord>>;

    /// Get a record by ID.
    ///
    /// Returns `None` if the record doesn't exist.
    async fn get(&self, id: &RecordId) -> Result<Option<InspectionRecord>>;

    /// Update an existing record.
    ///
    /// Only fields present in `patch` are modified; the rest are
    /// preserved. Returns the updated record as stored.
    ///
    /// # Errors
    ///
    /// Returns `Error::RecordNotFound` if the record doesn't exist.
    async fn update(&mut self, id: &RecordId, patch: RecordPatch) -> Result<InspectionRecord>;

    /// Delete a record.
    ///
    /// Removes the record, preserving the relative order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `Error::RecordNotFound` if the record doesn't exist.
    async fn delete(&mut self, id: &RecordId) -> Result<()>;

    /// Export all records in store order.
    ///
    /// Suitable for JSON export or backup.
    async fn export_all(&self) -> Result<Vec<InspectionRecord>>;
}

/// Options for constructing a store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Seed dataset configuration
    pub seed: SeedConfig,

    /// Artificial latency awaited by every operation.
    ///
    /// Mirrors the network round-trip the real backend will have. Tests
    /// use `Duration::ZERO`.
    pub latency: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed: SeedConfig::default(),
            latency: Duration::from_millis(200),
        }
    }
}

impl StoreOptions {
    /// Options with no artificial latency, for tests and benchmarks.
    #[must_use]
    pub fn instant(seed: SeedConfig) -> Self {
        Self {
            seed,
            latency: Duration::ZERO,
        }
    }
}
