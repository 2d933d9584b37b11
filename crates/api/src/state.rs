use std::sync::Arc;

use mercato_core::routing::RouteTable;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (accessed by middleware).
    pub config: Arc<ServerConfig>,
    /// The validated route table the router was generated from.
    pub routes: Arc<RouteTable>,
}
