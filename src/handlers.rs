pub mod appointments;
pub mod auth;
pub mod pets;
pub mod products;
pub mod services;
pub mod tutors;
