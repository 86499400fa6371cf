use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::error;

use crate::api::dtos::requests::CreateCommentRequest;
use crate::domain::models::comment::Comment;
use crate::error::AppError;
use crate::state::AppState;

/// Guest reviews, newest first. A read failure degrades to an empty list so
/// the page still renders.
pub async fn list_comments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let comments = match state.comment_repo.list().await {
        Ok(comments) => comments,
        Err(e) => {
            error!("Failed to list comments: {:?}", e);
            Vec::new()
        }
    };
    Json(comments)
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::Validation("Rating must be between 1 and 5".into()));
    }
    if payload.author.trim().is_empty() || payload.text.trim().is_empty() {
        return Err(AppError::Validation("Author and text are required".into()));
    }

    let comment = Comment::new(payload.author, payload.text, payload.rating);
    let created = state.comment_repo.create(&comment).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
