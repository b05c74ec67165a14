use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::customer::Customer;

/// One product line of an incoming order request.
#[derive(Debug, Clone)]
pub struct RequestedProduct {
    pub id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_id: Uuid,
    pub products: Vec<RequestedProduct>,
}

/// Line item as it was sold. `price` is copied from the product when the order
/// is placed and does not follow later price changes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedProduct {
    pub product_id: Uuid,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer: Customer,
    pub products: Vec<OrderedProduct>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub items: Vec<OrderSummary>,
    pub total: i64,
}
