//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::{BeerRepository, CustomerRepository};
use crate::services::{BeerService, CustomerService};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the per-resource
/// services built over the injected repositories.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    beers: BeerService,
    customers: CustomerService,
}

impl AppState {
    /// Create a new application state over the given repositories.
    #[must_use]
    pub fn new(
        config: ApiConfig,
        beers: Arc<dyn BeerRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                beers: BeerService::new(beers),
                customers: CustomerService::new(customers),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the beer service.
    #[must_use]
    pub fn beers(&self) -> &BeerService {
        &self.inner.beers
    }

    /// Get a reference to the customer service.
    #[must_use]
    pub fn customers(&self) -> &CustomerService {
        &self.inner.customers
    }
}
