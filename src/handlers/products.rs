// src/handlers/products.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    models::{
        product::{Product, ProductPayload},
        MessageResponse,
    },
};

// GET /products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "Envelope { products: [...] }", body = Vec<Product>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_repo.list(&app_state.db_pool).await?;
    Ok((StatusCode::OK, Json(json!({ "products": products }))))
}

// GET /products/{id}
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Envelope { product: {...} }", body = Product),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.product_repo.find_by_id(&app_state.db_pool, id).await?;
    Ok((StatusCode::OK, Json(json!({ "product": product }))))
}

// POST /products
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Envelope { message, product }", body = Product),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state.product_repo.create(&app_state.db_pool, &payload).await?;
    tracing::info!("📦 Produto {} criado", product.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Produto criado com sucesso", "product": product })),
    ))
}

// PUT /products/{id}
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "ID do produto")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = MessageResponse),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    app_state.product_repo.update(&app_state.db_pool, id, &payload).await?;
    tracing::info!("📦 Produto {} atualizado", id);

    Ok(Json(MessageResponse { message: "Produto atualizado com sucesso".into() }))
}

// DELETE /products/{id}
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto deletado", body = MessageResponse),
        (status = 404, description = "Produto não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    app_state.product_repo.delete(&app_state.db_pool, id).await?;
    tracing::info!("📦 Produto {} deletado", id);

    Ok(Json(MessageResponse { message: "Produto deletado com sucesso".into() }))
}
