use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

/// Column width of `customers.name` and `customers.email`.
const MAX_TEXT_LEN: usize = 255;

pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_customer(&self, name: &str, email: &str) -> Result<Customer, DomainError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("name must not be blank".into()));
        }
        if name.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::InvalidInput(format!(
                "name must be at most {MAX_TEXT_LEN} characters"
            )));
        }
        if email.chars().count() > MAX_TEXT_LEN {
            return Err(DomainError::InvalidInput(format!(
                "e-mail must be at most {MAX_TEXT_LEN} characters"
            )));
        }
        if !email.contains('@') {
            return Err(DomainError::InvalidInput(format!(
                "'{email}' is not an e-mail address"
            )));
        }

        if self.repo.find_by_email(email)?.is_some() {
            log::warn!("customer rejected: {email} already registered");
            return Err(DomainError::EmailAlreadyRegistered);
        }

        let customer = self.repo.create(NewCustomer {
            name: name.to_string(),
            email: email.to_string(),
        })?;
        log::info!("customer {} registered", customer.id);
        Ok(customer)
    }
}
