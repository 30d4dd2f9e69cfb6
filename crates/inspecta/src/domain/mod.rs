//! Domain types for inspection record management.
//!
//! This module contains the core domain types for the inspecta record
//! service: records, their category/result enums, partial patches, and
//! the pagination request/response pair.
//!
//! Wire representation matches the production JSON contract: camelCase
//! field names and the Chinese stage/result labels used by the shop-floor
//! system, so serialized output can later be backed by the real HTTP API
//! without changing callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default page size when a query does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Unique identifier for an inspection record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    /// Create a new record ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Stage at which an inspection takes place.
///
/// The serde representation uses the production labels so serialized
/// records match the upstream contract exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionType {
    /// 来料检验 - incoming material inspection
    #[serde(rename = "来料检验")]
    Incoming,

    /// 首检 - first-piece inspection
    #[serde(rename = "首检")]
    FirstPiece,

    /// 巡检 - patrol inspection
    #[serde(rename = "巡检")]
    Patrol,

    /// 自检 - operator self-inspection
    #[serde(rename = "自检")]
    SelfCheck,

    /// 成品检 - finished-goods inspection
    #[serde(rename = "成品检")]
    FinishedGoods,

    /// 出货检验 - outgoing shipment inspection
    #[serde(rename = "出货检验")]
    Outgoing,
}

impl InspectionType {
    /// All stages in their canonical order.
    ///
    /// Seed generation cycles through this slice by index, so its order is
    /// part of the dataset contract.
    pub const ALL: [InspectionType; 6] = [
        InspectionType::Incoming,
        InspectionType::FirstPiece,
        InspectionType::Patrol,
        InspectionType::SelfCheck,
        InspectionType::FinishedGoods,
        InspectionType::Outgoing,
    ];

    /// The production label for this stage
    pub fn label(self) -> &'static str {
        match self {
            InspectionType::Incoming => "来料检验",
            InspectionType::FirstPiece => "首检",
            InspectionType::Patrol => "巡检",
            InspectionType::SelfCheck => "自检",
            InspectionType::FinishedGoods => "成品检",
            InspectionType::Outgoing => "出货检验",
        }
    }
}

impl fmt::Display for InspectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Binary inspection outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionResult {
    /// 合格 - passed inspection
    #[serde(rename = "合格")]
    Pass,

    /// 不合格 - failed inspection
    #[serde(rename = "不合格")]
    Fail,
}

impl InspectionResult {
    /// The production label for this outcome
    pub fn label(self) -> &'static str {
        match self {
            InspectionResult::Pass => "合格",
            InspectionResult::Fail => "不合格",
        }
    }
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One inspection event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionRecord {
    /// Unique identifier, set once at creation and never reassigned
    pub id: RecordId,

    /// Work order number
    pub order_no: String,

    /// Stage at which the inspection happened
    pub inspection_type: InspectionType,

    /// Material code
    pub material_code: String,

    /// Material name
    pub material_name: String,

    /// Pass/fail outcome
    pub result: InspectionResult,

    /// Date of the inspection, serialized `YYYY-MM-DD`
    #[serde(rename = "inspectionTime")]
    pub inspected_on: NaiveDate,
}

/// Partial field set to merge into an existing record.
///
/// Fields present in the patch override the stored value; absent fields
/// are preserved. The record `id` is intentionally not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    /// New work order number (if updating)
    pub order_no: Option<String>,

    /// New inspection stage (if updating)
    pub inspection_type: Option<InspectionType>,

    /// New material code (if updating)
    pub material_code: Option<String>,

    /// New material name (if updating)
    pub material_name: Option<String>,

    /// New outcome (if updating)
    pub result: Option<InspectionResult>,

    /// New inspection date (if updating)
    #[serde(rename = "inspectionTime")]
    pub inspected_on: Option<NaiveDate>,
}

impl RecordPatch {
    /// Returns `true` if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.order_no.is_none()
            && self.inspection_type.is_none()
            && self.material_code.is_none()
            && self.material_name.is_none()
            && self.result.is_none()
            && self.inspected_on.is_none()
    }
}

/// Transient request descriptor for listing records
#[derive(Debug, Clone)]
pub struct RecordQuery {
    /// Keep only records at this stage (no filtering when absent)
    pub inspection_type: Option<InspectionType>,

    /// 1-based page index
    pub page: usize,

    /// Number of records per page
    pub page_size: usize,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            inspection_type: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RecordQuery {
    /// Query for a single page with the default page size and no filter
    pub fn page(page: usize) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Restrict the query to one inspection stage
    #[must_use]
    pub fn with_type(mut self, inspection_type: InspectionType) -> Self {
        self.inspection_type = Some(inspection_type);
        self
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of a filtered result set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records for the requested page, in store order
    pub data: Vec<T>,

    /// Count of records matching the filter, before pagination
    pub total: usize,

    /// 1-based page index this page was cut for
    pub page: usize,

    /// Page size this page was cut with
    pub page_size: usize,

    /// Ceiling division of `total` by `page_size`
    pub total_pages: usize,
}
