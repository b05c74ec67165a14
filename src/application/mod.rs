pub mod customer_service;
pub mod order_service;
pub mod product_service;

#[cfg(test)]
pub(crate) mod fakes;
