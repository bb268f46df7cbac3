pub mod error;
pub mod extract;
