use std::sync::Arc;

use crate::application::fakes::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
use crate::state::AppState;

/// Handles on the in-memory repositories behind a [`fake_state`].
pub struct Fakes {
    pub customers: Arc<InMemoryCustomerRepository>,
    pub products: Arc<InMemoryProductRepository>,
    pub orders: Arc<InMemoryOrderRepository>,
}

pub fn fake_state() -> (AppState, Fakes) {
    let fakes = Fakes {
        customers: Arc::new(InMemoryCustomerRepository::default()),
        products: Arc::new(InMemoryProductRepository::default()),
        orders: Arc::new(InMemoryOrderRepository::default()),
    };
    let state = AppState::new(
        fakes.customers.clone(),
        fakes.products.clone(),
        fakes.orders.clone(),
    );
    (state, fakes)
}
