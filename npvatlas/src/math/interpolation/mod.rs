pub mod linear;
pub mod traits;
