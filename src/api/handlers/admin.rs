use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tracing::{error, info, warn};

use crate::api::dtos::requests::{
    AdminLoginRequest, AdminReservationRequest, CreateCommentRequest, DayQuery,
    ReservationSearchQuery, StatsQuery, UpdateCommentRequest,
};
use crate::api::dtos::responses::LoginResponse;
use crate::api::extractors::admin::{AdminSession, SESSION_COOKIE};
use crate::background::refresh_reservation_cache;
use crate::domain::models::comment::Comment;
use crate::domain::models::reservation::{NewReservationParams, Reservation, STATUS_CONFIRMED};
use crate::domain::services::availability::month_stats;
use crate::error::AppError;
use crate::state::AppState;

/// Shared-password gate. Any mismatch reads the same from the outside; a
/// match issues a random session token held in process memory only.
pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.password != state.config.admin_password {
        warn!("Admin login rejected");
        return Err(AppError::Unauthorized);
    }

    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    {
        let mut sessions = state
            .admin_sessions
            .write()
            .map_err(|_| AppError::Internal)?;
        sessions.insert(token.clone());
    }

    cookies.add(Cookie::new(SESSION_COOKIE, token));
    info!("Admin login accepted");
    Ok(Json(LoginResponse { status: "ok" }))
}

/// All reservations, optionally narrowed by a case-insensitive substring
/// match over name, phone and date. Read failures degrade to an empty list.
pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Query(query): Query<ReservationSearchQuery>,
) -> impl IntoResponse {
    let mut reservations = match state.reservation_repo.list().await {
        Ok(reservations) => reservations,
        Err(e) => {
            error!("Failed to list reservations: {:?}", e);
            Vec::new()
        }
    };

    if let Some(q) = query.q.as_deref()
        && !q.trim().is_empty()
    {
        let needle = q.to_lowercase();
        reservations.retain(|r| {
            r.customer_name.to_lowercase().contains(&needle)
                || r.customer_phone.to_lowercase().contains(&needle)
                || r.event_date.to_string().contains(&needle)
        });
    }

    Json(reservations)
}

/// Every reservation on the day regardless of status, for the day detail
/// view.
pub async fn list_day(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Query(query): Query<DayQuery>,
) -> impl IntoResponse {
    let reservations = match state.reservation_repo.list_by_date(query.date).await {
        Ok(reservations) => reservations,
        Err(e) => {
            error!("Failed to list reservations for {}: {:?}", query.date, e);
            Vec::new()
        }
    };
    Json(reservations)
}

/// Occupancy check for manual entry: confirmed reservations in the cached
/// list, skipping the record being edited.
async fn slot_taken(
    state: &Arc<AppState>,
    payload: &AdminReservationRequest,
    exclude_id: Option<&str>,
) -> bool {
    let cache = state.slot_cache.read().await;
    cache.iter().any(|r| {
        r.event_date == payload.event_date
            && r.time_slot == payload.time_slot
            && r.status == STATUS_CONFIRMED
            && exclude_id != Some(r.id.as_str())
    })
}

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(payload): Json<AdminReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.status == STATUS_CONFIRMED && slot_taken(&state, &payload, None).await {
        return Err(AppError::Conflict("That slot is already taken on this date".into()));
    }

    let reservation = Reservation::new(NewReservationParams {
        package_type: payload.package_type,
        space: payload.space,
        guest_count: payload.guest_count,
        event_date: payload.event_date,
        time_slot: payload.time_slot,
        extras: payload.extras,
        total_price: payload.total_price,
        deposit_paid: payload.deposit_paid,
        customer_name: payload.customer_name,
        customer_email: payload.customer_email,
        customer_phone: payload.customer_phone,
        notes: payload.notes,
        status: payload.status,
    });

    let created = state.reservation_repo.create(&reservation).await?;
    refresh_reservation_cache(&state).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_reservation(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<AdminReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .reservation_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Reservation not found".into()))?;

    if payload.status == STATUS_CONFIRMED && slot_taken(&state, &payload, Some(&id)).await {
        return Err(AppError::Conflict("That slot is already taken on this date".into()));
    }

    let updated = Reservation {
        id: existing.id,
        package_type: payload.package_type,
        space: payload.space,
        guest_count: payload.guest_count,
        event_date: payload.event_date,
        time_slot: payload.time_slot,
        extras: sqlx::types::Json(payload.extras),
        total_price: payload.total_price,
        deposit_paid: payload.deposit_paid,
        customer_name: payload.customer_name,
        customer_email: payload.customer_email,
        customer_phone: payload.customer_phone,
        notes: payload.notes,
        status: payload.status,
        created_at: existing.created_at,
    };

    let saved = state.reservation_repo.update(&updated).await?;
    refresh_reservation_cache(&state).await;
    Ok(Json(saved))
}

pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.reservation_repo.delete(&id).await?;
    refresh_reservation_cache(&state).await;
    Ok(StatusCode::NO_CONTENT)
}

/// Count and revenue of the displayed month.
pub async fn stats(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Query(query): Query<StatsQuery>,
) -> impl IntoResponse {
    let reservations = match state.reservation_repo.list().await {
        Ok(reservations) => reservations,
        Err(e) => {
            error!("Failed to list reservations for stats: {:?}", e);
            Vec::new()
        }
    };
    Json(month_stats(&reservations, query.year, query.month))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::Validation("Rating must be between 1 and 5".into()));
    }

    let comment = Comment::new(payload.author, payload.text, payload.rating);
    let created = state.comment_repo.create(&comment).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Edit replaces only the text.
pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.comment_repo.update_text(&id, &payload.text).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.comment_repo.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
