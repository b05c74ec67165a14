//! In-memory port implementations used by service and handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use bigdecimal::BigDecimal;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, Order, OrderSummary, OrderedProduct};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::{NewProduct, Product};

pub fn customer(name: &str) -> Customer {
    let now = Utc::now();
    Customer {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{name}@example.com"),
        created_at: now,
        updated_at: now,
    }
}

pub fn product(name: &str, price: i64, quantity: i32) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price: BigDecimal::from(price),
        quantity,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn insert(&self, customer: Customer) -> Customer {
        self.customers.lock().unwrap().push(customer.clone());
        customer
    }

    pub fn count(&self) -> usize {
        self.customers.lock().unwrap().len()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.email == email).cloned())
    }

    fn create(&self, new: NewCustomer) -> Result<Customer, DomainError> {
        let mut created = customer(&new.name);
        created.email = new.email;
        Ok(self.insert(created))
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    lookups: AtomicUsize,
    updates: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn insert(&self, product: Product) -> Product {
        self.products.lock().unwrap().push(product.clone());
        product
    }

    pub fn quantity_of(&self, id: Uuid) -> Option<i32> {
        let products = self.products.lock().unwrap();
        products.iter().find(|p| p.id == id).map(|p| p.quantity)
    }

    pub fn set_price(&self, id: Uuid, price: BigDecimal) {
        let mut products = self.products.lock().unwrap();
        if let Some(p) = products.iter_mut().find(|p| p.id == id) {
            p.price = price;
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let products = self.products.lock().unwrap();
        // Reverse storage order so callers cannot rely on positions.
        Ok(products
            .iter()
            .rev()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    fn update_quantity(&self, updated: Vec<Product>) -> Result<(), DomainError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.lock().unwrap();
        for u in updated {
            if let Some(p) = products.iter_mut().find(|p| p.id == u.id) {
                p.quantity = u.quantity;
            }
        }
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.name == name).cloned())
    }

    fn create(&self, new: NewProduct) -> Result<Product, DomainError> {
        let mut created = product(&new.name, 0, new.quantity);
        created.price = new.price;
        Ok(self.insert(created))
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryOrderRepository {
    pub fn count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    /// Makes every following `create` fail with `DomainError::Internal(msg)`.
    pub fn fail_with(&self, msg: &str) {
        *self.failure.lock().unwrap() = Some(msg.to_string());
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create(
        &self,
        customer: Customer,
        products: Vec<OrderedProduct>,
    ) -> Result<Order, DomainError> {
        if let Some(msg) = self.failure.lock().unwrap().clone() {
            return Err(DomainError::Internal(msg));
        }
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            customer,
            products,
            created_at: now,
            updated_at: now,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.lock().unwrap();
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        let orders = self.orders.lock().unwrap();
        let offset = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
        Ok(ListResult {
            items: orders
                .iter()
                .rev()
                .skip(offset)
                .take(limit as usize)
                .map(|o| OrderSummary {
                    id: o.id,
                    customer_id: o.customer.id,
                    created_at: o.created_at,
                })
                .collect(),
            total: orders.len() as i64,
        })
    }
}
