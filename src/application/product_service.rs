use bigdecimal::{BigDecimal, Zero};

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product};

/// Column width of `products.name`.
const MAX_NAME_LEN: usize = 255;
/// Digits after the decimal point kept by `products.price` (`NUMERIC(10, 2)`).
const PRICE_SCALE: i64 = 2;
/// Smallest price that no longer fits `NUMERIC(10, 2)`.
const PRICE_LIMIT: i64 = 100_000_000;

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_product(
        &self,
        name: &str,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Product, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("name must not be blank".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidInput(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(format!(
                "price must not be negative, got {price}"
            )));
        }
        if price.with_scale(PRICE_SCALE) != price {
            return Err(DomainError::InvalidInput(format!(
                "price must have at most {PRICE_SCALE} decimal places, got {price}"
            )));
        }
        if price >= BigDecimal::from(PRICE_LIMIT) {
            return Err(DomainError::InvalidInput(format!(
                "price must be below {PRICE_LIMIT}, got {price}"
            )));
        }
        if quantity < 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must not be negative, got {quantity}"
            )));
        }

        if self.repo.find_by_name(name)?.is_some() {
            log::warn!("product rejected: name '{name}' already in use");
            return Err(DomainError::ProductNameTaken);
        }

        let product = self.repo.create(NewProduct {
            name: name.to_string(),
            price,
            quantity,
        })?;
        log::info!(
            "product {} registered with {} in stock",
            product.id,
            product.quantity
        );
        Ok(product)
    }
}
