// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Tutors ---
        handlers::tutors::list_tutors,
        handlers::tutors::get_tutor,
        handlers::tutors::create_tutor,
        handlers::tutors::update_tutor,
        handlers::tutors::delete_tutor,

        // --- Pets ---
        handlers::pets::list_pets,
        handlers::pets::list_pets_by_tutor,
        handlers::pets::get_pet,
        handlers::pets::create_pet,
        handlers::pets::update_pet,
        handlers::pets::delete_pet,

        // --- Services ---
        handlers::services::list_services,
        handlers::services::get_service,
        handlers::services::create_service,
        handlers::services::update_service,
        handlers::services::delete_service,

        // --- Products ---
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,

        // --- Appointments ---
        handlers::appointments::list_appointments,
        handlers::appointments::get_appointment,
        handlers::appointments::create_appointment,
        handlers::appointments::update_appointment,
        handlers::appointments::delete_appointment,
    ),
    components(
        schemas(
            models::MessageResponse,

            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Clínica ---
            models::tutor::Tutor,
            models::tutor::TutorPayload,
            models::pet::Pet,
            models::pet::PetPayload,
            models::service::Service,
            models::service::ServicePayload,
            models::product::Product,
            models::product::ProductPayload,
            models::appointment::AppointmentStatus,
            models::appointment::Appointment,
            models::appointment::AppointmentDetail,
            models::appointment::AppointmentPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Tutors", description = "Tutores (donos dos pets)"),
        (name = "Pets", description = "Pets e seus tutores"),
        (name = "Services", description = "Serviços oferecidos pela clínica"),
        (name = "Products", description = "Produtos e estoque"),
        (name = "Appointments", description = "Agendamentos (tutor derivado do pet)")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
