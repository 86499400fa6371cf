use axum::{extract::{Query, State}, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dtos::requests::{CalendarQuery, SlotsQuery};
use crate::api::dtos::responses::SlotsResponse;
use crate::domain::models::package::{PackageKey, TeenDuration};
use crate::domain::services::availability::{available_slots, month_days};
use crate::error::AppError;
use crate::state::AppState;

pub fn parse_package(s: &str) -> Result<PackageKey, AppError> {
    PackageKey::parse(s).ok_or_else(|| AppError::Validation(format!("Unknown package '{}'", s)))
}

pub fn parse_duration(hours: Option<u8>) -> Result<Option<TeenDuration>, AppError> {
    match hours {
        None => Ok(None),
        Some(h) => TeenDuration::from_hours(h)
            .map(Some)
            .ok_or_else(|| AppError::Validation("Teen parties last 3 or 4 hours".into())),
    }
}

/// Free slots for a package on a day, read from the cached reservation
/// snapshot.
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let package = parse_package(&query.package)?;
    let duration = parse_duration(query.duration)?;

    let cache = state.slot_cache.read().await;
    let slots = available_slots(package, query.date, &cache, duration);

    Ok(Json(SlotsResponse { date: query.date, slots }))
}

/// Day-by-day status of a calendar month for the booking calendar.
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=12).contains(&query.month) {
        return Err(AppError::Validation("Month must be between 1 and 12".into()));
    }

    let today = Utc::now().date_naive();
    let cache = state.slot_cache.read().await;
    let days = month_days(query.year, query.month, today, &cache);

    Ok(Json(days))
}
