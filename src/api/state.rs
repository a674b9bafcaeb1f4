//! API server state

use std::sync::Arc;

use crate::catalog::StaticCatalog;
use crate::db::Database;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Static JSON catalog, the fallback source of truth
    pub catalog: Arc<StaticCatalog>,

    /// Optional database gateway (absent in static-only deployments)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(catalog: Arc<StaticCatalog>, database: Option<Arc<Database>>) -> Self {
        Self { catalog, database }
    }

    /// Create state for static-only deployments
    pub fn static_only(catalog: Arc<StaticCatalog>) -> Self {
        Self {
            catalog,
            database: None,
        }
    }
}
