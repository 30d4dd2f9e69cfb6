//! Deterministic seed dataset for the record store.
//!
//! The production backend is not wired up yet; until it is, the store is
//! bootstrapped with a synthetic dataset that mirrors the shapes the real
//! system produces. Generation is fully determined by the configured seed
//! so tests and demos are reproducible run to run.
//!
//! Dataset shape:
//!
//! - ids `rec-1` .. `rec-{count}`
//! - `inspection_type` cycles through [`InspectionType::ALL`] by index,
//!   so a count divisible by six yields equally sized stage buckets
//! - `result` is ~65% pass / 35% fail
//! - `inspected_on` falls in September through December 2025

use crate::domain::{InspectionRecord, InspectionResult, InspectionType, RecordId};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default number of seeded records
pub const DEFAULT_RECORD_COUNT: usize = 60;

/// Probability that a seeded record passed inspection
const PASS_RATE: f64 = 0.65;

/// Configuration for seed dataset generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    /// RNG seed; the same seed always produces the same dataset
    pub seed: u64,

    /// Number of records to generate
    pub count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            count: DEFAULT_RECORD_COUNT,
        }
    }
}

/// Generate the seed dataset for the given configuration.
pub fn generate_records(config: &SeedConfig) -> Vec<InspectionRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let records: Vec<InspectionRecord> = (0..config.count)
        .map(|i| InspectionRecord {
            id: RecordId::new(format!("rec-{}", i + 1)),
            order_no: order_no_for(i),
            inspection_type: InspectionType::ALL[i % InspectionType::ALL.len()],
            material_code: "IT2022101001101".to_string(),
            material_name: "博世螺丝刀".to_string(),
            result: if rng.gen_bool(PASS_RATE) {
                InspectionResult::Pass
            } else {
                InspectionResult::Fail
            },
            inspected_on: random_date(&mut rng),
        })
        .collect();

    debug!(seed = config.seed, count = records.len(), "seed dataset generated");
    records
}

/// Work order numbers follow the upstream scheme: a fixed site prefix plus
/// the last four digits of a sequence stepping by six.
fn order_no_for(index: usize) -> String {
    let serial = 2000 + index * 6;
    format!("T00T70602202{:04}", serial % 10000)
}

/// A date in the fixed 2025 window: months 9-12, days 1-28.
///
/// Day is capped at 28 so every month in the window is valid.
fn random_date(rng: &mut StdRng) -> NaiveDate {
    let month = rng.gen_range(9..=12u32);
    let day = rng.gen_range(1..=28u32);
    // Every month in the window has at least 28 days
    NaiveDate::from_ymd_opt(2025, month, day)
        .unwrap_or_else(|| unreachable!("day 1-28 exists in every month"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn same_seed_same_dataset() {
        let config = SeedConfig::default();
        assert_eq!(generate_records(&config), generate_records(&config));
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_records(&SeedConfig { seed: 1, count: 60 });
        let b = generate_records(&SeedConfig { seed: 2, count: 60 });
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        let records = generate_records(&SeedConfig::default());
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
        assert_eq!(records[0].id.as_str(), "rec-1");
        assert_eq!(records[59].id.as_str(), "rec-60");
    }

    #[test]
    fn stages_cycle_evenly_over_sixty_records() {
        let records = generate_records(&SeedConfig::default());
        let mut per_stage: HashMap<InspectionType, usize> = HashMap::new();
        for record in &records {
            *per_stage.entry(record.inspection_type).or_default() += 1;
        }
        assert_eq!(per_stage.len(), 6);
        assert!(per_stage.values().all(|&n| n == 10));
    }

    #[test]
    fn dates_stay_in_the_2025_window() {
        use chrono::Datelike;

        for record in generate_records(&SeedConfig { seed: 7, count: 200 }) {
            assert_eq!(record.inspected_on.year(), 2025);
            assert!((9..=12).contains(&record.inspected_on.month()));
            assert!((1..=28).contains(&record.inspected_on.day()));
        }
    }

    #[test]
    fn order_numbers_follow_the_site_scheme() {
        let records = generate_records(&SeedConfig::default());
        assert_eq!(records[0].order_no, "T00T706022022000");
        assert_eq!(records[1].order_no, "T00T706022022006");
        assert!(records.iter().all(|r| r.order_no.len() == 16));
    }
}
