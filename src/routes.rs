// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

pub fn create_router(app_state: AppState) -> Router {
    // Rotas públicas de autenticação
    let auth_routes = Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login));

    // Tudo abaixo exige token, inclusive listagem e criação de serviços
    let clinic_routes = Router::new()
        .route("/auth/me", get(handlers::auth::get_me))
        .route(
            "/tutors",
            get(handlers::tutors::list_tutors).post(handlers::tutors::create_tutor),
        )
        .route(
            "/tutors/{id}",
            get(handlers::tutors::get_tutor)
                .put(handlers::tutors::update_tutor)
                .delete(handlers::tutors::delete_tutor),
        )
        .route(
            "/pets",
            get(handlers::pets::list_pets).post(handlers::pets::create_pet),
        )
        .route("/pets/tutor/{id}", get(handlers::pets::list_pets_by_tutor))
        .route(
            "/pets/{id}",
            get(handlers::pets::get_pet)
                .put(handlers::pets::update_pet)
                .delete(handlers::pets::delete_pet),
        )
        .route(
            "/services",
            get(handlers::services::list_services).post(handlers::services::create_service),
        )
        .route(
            "/services/{id}",
            get(handlers::services::get_service)
                .put(handlers::services::update_service)
                .delete(handlers::services::delete_service),
        )
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route(
            "/appointments",
            get(handlers::appointments::list_appointments)
                .post(handlers::appointments::create_appointment),
        )
        .route(
            "/appointments/{id}",
            get(handlers::appointments::get_appointment)
                .put(handlers::appointments::update_appointment)
                .delete(handlers::appointments::delete_appointment),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(auth_routes)
        .merge(clinic_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
