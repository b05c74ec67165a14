use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer does not exist")]
    CustomerNotFound,
    #[error("Product does not exist")]
    ProductNotFound,
    #[error("Insufficient quantity")]
    InsufficientQuantity,
    #[error("This e-mail is already registered")]
    EmailAlreadyRegistered,
    #[error("Product with this name already exists")]
    ProductNameTaken,
    #[error("Order not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Errors caused by the request itself rather than by the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::CustomerNotFound
                | DomainError::ProductNotFound
                | DomainError::InsufficientQuantity
                | DomainError::EmailAlreadyRegistered
                | DomainError::ProductNameTaken
                | DomainError::InvalidInput(_)
        )
    }
}
