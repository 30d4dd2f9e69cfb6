//! Core in-memory store data structures.
//!
//! This module contains the inner store structure that holds all data and
//! is wrapped in `Arc<Mutex<>>` for thread safety.

use crate::domain::{InspectionRecord, RecordId};
use crate::seed::generate_records;
use crate::store::StoreOptions;
use std::time::Duration;

/// Inner store structure (not thread-safe).
///
/// Holds the ordered record sequence. Wrapped in `Arc<Mutex<>>` by the
/// public constructor.
pub(crate) struct InMemoryStoreInner {
    /// Records in store order. Seeded once at construction; update mutates
    /// in place, delete removes while preserving relative order.
    pub(super) records: Vec<InspectionRecord>,

    /// Artificial latency awaited before every operation
    pub(super) latency: Duration,
}

impl InMemoryStoreInner {
    /// Create a store seeded per the given options
    pub(crate) fn new(options: StoreOptions) -> Self {
        Self {
            records: generate_records(&options.seed),
            latency: options.latency,
        }
    }

    /// Position of a record in the sequence, if present
    pub(super) fn position_of(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }
}
