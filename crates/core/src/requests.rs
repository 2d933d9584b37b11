//! Request contracts accepted by the route table's placeholder handlers.
//!
//! These are shape checks only. Whether an identifier exists, belongs to the
//! current team, or may transition to the requested state is decided by the
//! business layer, not here.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::types::RecordId;

/// Maximum number of identifiers accepted by a single bulk operation.
pub const MAX_BULK_IDS: u64 = 500;

/// Default page size for paginated listings.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u32 = 100;

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// State transitions available through `records/{id}/action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    Archive,
    Restore,
}

/// Body of `PATCH .../records/{id}/action`, e.g. `{"action": "archive"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: RecordAction,
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

/// Body of every `manage.*` operation that acts on a set of records.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkIdsRequest {
    #[validate(length(
        min = 1,
        max = MAX_BULK_IDS,
        message = "ids must hold at least one identifier and no more than the bulk limit"
    ))]
    pub ids: Vec<RecordId>,
}

impl BulkIdsRequest {
    /// Trim identifiers, reject blanks, and drop repeats keeping first
    /// occurrence order.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let mut ids: Vec<RecordId> = Vec::with_capacity(self.ids.len());
        for (position, id) in self.ids.into_iter().enumerate() {
            let id = id.trim();
            if id.is_empty() {
                return Err(CoreError::Validation(format!(
                    "ids[{position}] must not be blank"
                )));
            }
            if !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
        Ok(Self { ids })
    }
}

// ---------------------------------------------------------------------------
// Relationship changes
// ---------------------------------------------------------------------------

/// Extract the new foreign key from a `change` body such as
/// `{"product_id": "TPD123qweasd"}`.
///
/// Returns `Ok(None)` only when `nullable` is set and the field is `null`,
/// meaning the relation should be removed.
pub fn parse_change(
    field: &str,
    nullable: bool,
    body: &serde_json::Map<String, Value>,
) -> Result<Option<RecordId>, CoreError> {
    match body.get(field) {
        None => Err(CoreError::Validation(format!("{field} is required"))),
        Some(Value::Null) if nullable => Ok(None),
        Some(Value::Null) => Err(CoreError::Validation(format!(
            "{field} must not be null"
        ))),
        Some(Value::String(id)) if id.trim().is_empty() => Err(CoreError::Validation(
            format!("{field} must not be blank"),
        )),
        Some(Value::String(id)) => Ok(Some(id.trim().to_string())),
        Some(_) => Err(CoreError::Validation(format!("{field} must be a string"))),
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Pagination window for `records.list` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Apply defaults and clamp to the accepted range.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
