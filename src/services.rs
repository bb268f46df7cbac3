pub mod appointment_service;
pub use appointment_service::AppointmentService;
pub mod auth;
pub use auth::AuthService;
pub mod pet_service;
pub use pet_service::PetService;
