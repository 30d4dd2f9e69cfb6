//! RecordStore trait implementation for the in-memory store.

use super::InMemoryStore;
use crate::domain::{InspectionRecord, Page, RecordId, RecordPatch, RecordQuery};
use crate::error::{Error, Result};
use crate::store::RecordStore;
use async_trait::async_trait;
use tracing::debug;

/// Await the configured artificial latency without holding the lock.
///
/// The real backend pays a network round trip before touching any state;
/// the mock pays it here so callers observe the same suspension point.
async fn round_trip(store: &InMemoryStore) {
    let latency = store.lock().await.latency;
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// Reject pagination parameters that cannot describe a page.
fn validate_query(query: &RecordQuery) -> Result<()> {
    if query.page == 0 {
        return Err(Error::InvalidQuery {
            reason: "page is 1-based and must be nonzero",
            page: query.page,
            page_size: query.page_size,
        });
    }
    if query.page_size == 0 {
        return Err(Error::InvalidQuery {
            reason: "pageSize must be nonzero",
            page: query.page,
            page_size: query.page_size,
        });
    }
    Ok(())
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list(&self, query: &RecordQuery) -> Result<Page<InspectionRecord>> {
        validate_query(query)?;
        round_trip(self).await;

        let inner = self.lock().await;

        let filtered: Vec<&InspectionRecord> = inner
            .records
            .iter()
            .filter(|r| match query.inspection_type {
                Some(t) => r.inspection_type == t,
                None => true,
            })
            .collect();

        let total = filtered.len();
        let total_pages = total.div_ceil(query.page_size);

        // Out-of-range pages clamp to an empty slice rather than erroring.
        let start = (query.page - 1).saturating_mul(query.page_size);
        let data: Vec<InspectionRecord> = filtered
            .into_iter()
            .skip(start)
            .take(query.page_size)
            .cloned()
            .collect();

        debug!(
            page = query.page,
            page_size = query.page_size,
            total,
            returned = data.len(),
            "listed records"
        );

        Ok(Page {
            data,
            total,
            page: query.page,
            page_size: query.page_size,
            total_pages,
        })
    }

    async fn get(&self, id: &RecordId) -> Result<Option<InspectionRecord>> {
        round_trip(self).await;

        let inner = self.lock().await;
        Ok(inner.position_of(id).map(|i| inner.records[i].clone()))
    }

    async fn update(&mut self, id: &RecordId, patch: RecordPatch) -> Result<InspectionRecord> {
        round_trip(self).await;

        let mut inner = self.lock().await;

        let position = inner
            .position_of(id)
            .ok_or_else(|| Error::RecordNotFound(id.clone()))?;
        let record = &mut inner.records[position];

        // Partial merge: present fields override, absent fields are kept.
        // The id is not patchable.
        if let Some(order_no) = patch.order_no {
            record.order_no = order_no;
        }
        if let Some(inspection_type) = patch.inspection_type {
            record.inspection_type = inspection_type;
        }
        if let Some(material_code) = patch.material_code {
            record.material_code = material_code;
        }
        if let Some(material_name) = patch.material_name {
            record.material_name = material_name;
        }
        if let Some(result) = patch.result {
            record.result = result;
        }
        if let Some(inspected_on) = patch.inspected_on {
            record.inspected_on = inspected_on;
        }

        debug!(id = %record.id, "updated record");
        Ok(record.clone())
    }

    async fn delete(&mut self, id: &RecordId) -> Result<()> {
        round_trip(self).await;

        let mut inner = self.lock().await;

        let position = inner
            .position_of(id)
            .ok_or_else(|| Error::RecordNotFound(id.clone()))?;

        // Vec::remove shifts the tail left, keeping relative order.
        inner.records.remove(position);

        debug!(%id, remaining = inner.records.len(), "deleted record");
        Ok(())
    }

    async fn export_all(&self) -> Result<Vec<InspectionRecord>> {
        round_trip(self).await;

        let inner = self.lock().await;
        Ok(inner.records.clone())
    }
}
