pub mod customers;
pub mod orders;
pub mod products;

#[cfg(test)]
pub(crate) mod testing;
