//! State

use std::sync::Arc;

use savvy_app::{auth::AuthService, context::AppContext, domain::prices::PricesService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) prices: Arc<dyn PricesService>,
    pub(crate) auth: Arc<dyn AuthService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(prices: Arc<dyn PricesService>, auth: Arc<dyn AuthService>) -> Self {
        Self { prices, auth }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.prices, app.auth))
    }
}
