//! In-memory store backend.
//!
//! This module provides an ephemeral store implementation where all data
//! is held in RAM and lost when the process exits. It is the stand-in for
//! the real backend during MVP development and the backend used by tests.
//!
//! # Architecture
//!
//! The implementation uses:
//! - `Vec<InspectionRecord>` as the ordered record sequence; delete keeps
//!   the relative order of the remaining records
//! - linear scans for lookups, which is fine at seed-dataset scale
//!
//! # Thread Safety
//!
//! The store is wrapped in `Arc<Mutex<InMemoryStoreInner>>` to provide
//! thread-safe access in async contexts. Every operation first awaits the
//! configured artificial latency, then acquires the lock. Two overlapping
//! mutations against the same record therefore serialize only at the lock:
//! last writer wins, and no further isolation is provided.

mod inner;
mod trait_impl;

use super::{RecordStore, StoreOptions};
use inner::InMemoryStoreInner;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Thread-safe in-memory store.
///
/// This type alias wraps the inner store in `Arc<Mutex<>>` for thread-safe
/// async access. It implements [`RecordStore`] via the trait implementation
/// in `trait_impl.rs`.
pub(crate) type InMemoryStore = Arc<Mutex<InMemoryStoreInner>>;

/// Create a new in-memory store seeded per the given options.
///
/// Each call constructs an isolated instance; there is no shared global
/// store, so tests can create as many independent stores as they need.
///
/// # Example
///
/// ```
/// use inspecta::store::{new_in_memory_store, StoreOptions};
/// use inspecta::seed::SeedConfig;
///
/// let store = new_in_memory_store(StoreOptions::instant(SeedConfig::default()));
/// ```
pub fn new_in_memory_store(options: StoreOptions) -> Box<dyn RecordStore> {
    Box::new(Arc::new(Mutex::new(InMemoryStoreInner::new(options))))
}
