use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;
use voyara_booking::BookingWorkflow;
use voyara_catalog::TripCatalog;

use crate::app_config::{BookingConfig, CatalogConfig};

/// Shared application state: the immutable catalog snapshot and the live
/// booking sessions. Sessions exist for the process lifetime only.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TripCatalog>,
    pub sessions: Arc<RwLock<HashMap<Uuid, BookingWorkflow>>>,
    pub catalog_config: CatalogConfig,
    pub booking_config: BookingConfig,
}

impl AppState {
    pub fn new(
        catalog: TripCatalog,
        catalog_config: CatalogConfig,
        booking_config: BookingConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            catalog_config,
            booking_config,
        }
    }
}
