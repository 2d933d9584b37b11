//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&per_page=`).
///
/// Values are defaulted and clamped by
/// [`PageRequest::new`](mercato_core::requests::PageRequest::new).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
