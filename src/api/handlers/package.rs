use axum::{response::IntoResponse, Json};

use crate::domain::models::package::catalog;

pub async fn list_packages() -> impl IntoResponse {
    Json(catalog())
}
