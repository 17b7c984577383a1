pub mod business;
pub mod enums;
pub mod independent;
pub mod salaried;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutils;
