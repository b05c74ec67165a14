use std::sync::Arc;

use uuid::Uuid;

use super::customer::{Customer, NewCustomer};
use super::errors::DomainError;
use super::order::{ListResult, Order, OrderedProduct};
use super::product::{NewProduct, Product};

pub trait CustomerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;
    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    /// Returns the products that exist among `ids`, in no particular order.
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError>;
    /// Persists the current `quantity` of every given product.
    fn update_quantity(&self, products: Vec<Product>) -> Result<(), DomainError>;
    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;
    fn create(&self, product: NewProduct) -> Result<Product, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn create(
        &self,
        customer: Customer,
        products: Vec<OrderedProduct>,
    ) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError>;
}

impl<T: CustomerRepository + ?Sized> CustomerRepository for Arc<T> {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        (**self).find_by_id(id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        (**self).find_by_email(email)
    }

    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        (**self).create(customer)
    }
}

impl<T: ProductRepository + ?Sized> ProductRepository for Arc<T> {
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        (**self).find_all_by_id(ids)
    }

    fn update_quantity(&self, products: Vec<Product>) -> Result<(), DomainError> {
        (**self).update_quantity(products)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        (**self).find_by_name(name)
    }

    fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        (**self).create(product)
    }
}

impl<T: OrderRepository + ?Sized> OrderRepository for Arc<T> {
    fn create(
        &self,
        customer: Customer,
        products: Vec<OrderedProduct>,
    ) -> Result<Order, DomainError> {
        (**self).create(customer, products)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        (**self).find_by_id(id)
    }

    fn list(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        (**self).list(page, limit)
    }
}
