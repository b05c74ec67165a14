use std::sync::Arc;

use crate::application::customer_service::CustomerService;
use crate::application::order_service::OrderService;
use crate::application::product_service::ProductService;
use crate::db::DbPool;
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::infrastructure::{
    DieselCustomerRepository, DieselOrderRepository, DieselProductRepository,
};

pub type Customers = Arc<dyn CustomerRepository>;
pub type Products = Arc<dyn ProductRepository>;
pub type Orders = Arc<dyn OrderRepository>;

/// Services shared by all handlers through `web::Data`.
pub struct AppState {
    pub customers: CustomerService<Customers>,
    pub products: ProductService<Products>,
    pub orders: OrderService<Customers, Products, Orders>,
}

impl AppState {
    pub fn new(customers: Customers, products: Products, orders: Orders) -> Self {
        Self {
            customers: CustomerService::new(customers.clone()),
            products: ProductService::new(products.clone()),
            orders: OrderService::new(customers, products, orders),
        }
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(DieselCustomerRepository::new(pool.clone())),
            Arc::new(DieselProductRepository::new(pool.clone())),
            Arc::new(DieselOrderRepository::new(pool)),
        )
    }
}
