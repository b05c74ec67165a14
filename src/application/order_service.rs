use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{CreateOrder, ListResult, Order, OrderedProduct};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::Product;

pub struct OrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerRepository,
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Places an order for `request.customer_id`.
    ///
    /// Every requested quantity must be at least 1.
    ///
    /// Every line is checked before anything is written: an unknown customer,
    /// an unknown product or a line asking for more than the remaining stock
    /// aborts the whole request. Lines naming the same product draw from the
    /// same stock, so each check sees the quantity left by the lines before it.
    ///
    /// Stock is read, decremented in memory and written back without a lock.
    /// Two concurrent orders for the same product can both pass the check.
    pub fn create_order(&self, request: CreateOrder) -> Result<Order, DomainError> {
        if let Some(item) = request.products.iter().find(|p| p.quantity < 1) {
            return Err(DomainError::InvalidInput(format!(
                "quantity for product {} must be positive, got {}",
                item.id, item.quantity
            )));
        }

        let Some(customer) = self.customers.find_by_id(request.customer_id)? else {
            log::warn!("order rejected: unknown customer {}", request.customer_id);
            return Err(DomainError::CustomerNotFound);
        };

        let ids: Vec<Uuid> = request.products.iter().map(|p| p.id).collect();
        let mut stock: Vec<Product> = self.products.find_all_by_id(&ids)?;

        let mut ordered = Vec::with_capacity(request.products.len());
        for item in &request.products {
            let Some(product) = stock.iter_mut().find(|p| p.id == item.id) else {
                log::warn!("order rejected: unknown product {}", item.id);
                return Err(DomainError::ProductNotFound);
            };
            if product.quantity < item.quantity {
                log::warn!(
                    "order rejected: product {} has {} left, {} requested",
                    product.id,
                    product.quantity,
                    item.quantity
                );
                return Err(DomainError::InsufficientQuantity);
            }

            product.quantity -= item.quantity;
            ordered.push(OrderedProduct {
                product_id: product.id,
                price: product.price.clone(),
                quantity: item.quantity,
            });
        }

        self.products.update_quantity(stock)?;

        let order = self.orders.create(customer, ordered)?;
        log::info!(
            "order {} created for customer {} with {} line(s)",
            order.id,
            order.customer.id,
            order.products.len()
        );
        Ok(order)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        self.orders.find_by_id(id)
    }

    pub fn list_orders(&self, page: i64, limit: i64) -> Result<ListResult, DomainError> {
        self.orders.list(page, limit)
    }
}
