// Extratores que devolvem AppError na rejeição, para manter o corpo `{ "error": ... }`
// também em JSON malformado e ids de rota inválidos.

use axum::extract::{FromRequest, FromRequestParts};

use crate::common::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
