use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::BookingRequest;
use crate::api::dtos::responses::{ContactRequiredResponse, PaymentReadyResponse, QuoteResponse};
use crate::api::handlers::availability::{parse_duration, parse_package};
use crate::background::refresh_reservation_cache;
use crate::domain::models::package::{PackageKey, SpaceType};
use crate::domain::models::reservation::{NewReservationParams, Reservation, STATUS_CONFIRMED};
use crate::domain::services::booking::{BookingDraft, DraftGuests};
use crate::error::AppError;
use crate::state::AppState;

/// Replay the client's selections through the draft transitions, in the same
/// order the form presents them. Absent fields simply leave their step
/// unsatisfied for `submit` to report.
fn build_draft(payload: &BookingRequest) -> Result<BookingDraft, AppError> {
    let package = parse_package(&payload.package)?;
    let mut draft = BookingDraft::new(package);

    if let Some(space) = &payload.space {
        let space = match space.as_str() {
            "open" => SpaceType::Open,
            "closed" => SpaceType::Closed,
            other => {
                return Err(AppError::Validation(format!("Unknown space type '{}'", other)));
            }
        };
        draft.select_space(space);
    }

    if let Some(duration) = parse_duration(payload.duration)? {
        draft.select_teen_duration(duration);
    }

    let guests = if package == PackageKey::Kids {
        DraftGuests::Kids { children: payload.children, adults: payload.adults }
    } else {
        DraftGuests::Standard { count: payload.guests }
    };
    draft.set_guests(guests);

    if let Some(date) = payload.date {
        draft.select_date(date);
    }
    if let Some(slot) = &payload.slot {
        draft.select_slot(slot.clone());
    }

    draft.set_extras(payload.extras.clone(), payload.waiter);
    draft.set_contact(payload.name.clone(), payload.phone.clone(), payload.email.clone());
    draft.notes = payload.notes.clone();

    Ok(draft)
}

fn submit(draft: &mut BookingDraft) -> Result<(), AppError> {
    draft
        .submit(Utc::now().date_naive())
        .map_err(|e| AppError::BookingStep {
            step: e.step.anchor(),
            message: e.message,
        })
}

fn quote_parts(draft: &BookingDraft, deposit: f64) -> (f64, f64, f64) {
    let total = draft.total_price();
    (total, deposit, total - deposit)
}

/// Price the current selections without touching the store.
pub async fn quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let draft = build_draft(&payload)?;
    let (total, deposit, remainder) = quote_parts(&draft, state.config.deposit_amount);
    Ok(Json(QuoteResponse { total, deposit, remainder }))
}

/// Run the validation chain. On success nothing is persisted; the client gets
/// the figures and the checkout button id and shows the payment widget.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut draft = build_draft(&payload)?;

    if draft.package == PackageKey::Premium {
        return Ok(Json(ContactRequiredResponse {
            status: "contact_required",
            message: "Premium celebrations are arranged over the phone.",
        })
        .into_response());
    }

    submit(&mut draft)?;

    let (total, deposit, remainder) = quote_parts(&draft, state.config.deposit_amount);
    info!("Booking validated for {} on {:?}, awaiting deposit", draft.package, draft.date);

    Ok(Json(PaymentReadyResponse {
        status: "payment_ready",
        total,
        deposit,
        remainder,
        paypal_button_id: state.config.paypal_button_id.clone(),
    })
    .into_response())
}

/// Payment-approved callback. The payload carries no trusted data, so the
/// whole form is revalidated and the slot re-checked against the live store
/// before the reservation is written.
pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut draft = build_draft(&payload)?;

    if draft.package == PackageKey::Premium {
        return Err(AppError::Validation(
            "Premium celebrations are arranged over the phone.".into(),
        ));
    }

    submit(&mut draft)?;

    // submit guarantees both are present
    let date = draft.date.ok_or(AppError::Internal)?;
    let slot = draft.slot.clone().ok_or(AppError::Internal)?;

    if state.reservation_repo.is_slot_occupied(date, &slot).await? {
        // The cache missed this reservation; pull a fresh snapshot so the
        // slot view stops offering the taken slot.
        refresh_reservation_cache(&state).await;
        return Err(AppError::Conflict(
            "This time slot has just been booked. Please pick another.".into(),
        ));
    }

    let space = draft.space.ok_or(AppError::Internal)?;
    let reservation = Reservation::new(NewReservationParams {
        package_type: draft.package.as_str().to_string(),
        space: space.as_str().to_string(),
        guest_count: draft.guest_total() as i32,
        event_date: date,
        time_slot: slot,
        extras: draft.extras.clone(),
        total_price: draft.total_price(),
        deposit_paid: true,
        customer_name: draft.customer_name.clone(),
        customer_email: draft.customer_email.clone(),
        customer_phone: draft.customer_phone.clone(),
        notes: draft.notes.clone(),
        status: STATUS_CONFIRMED.to_string(),
    });

    let created = state.reservation_repo.create(&reservation).await?;
    info!("Reservation {} confirmed for {} {}", created.id, created.event_date, created.time_slot);

    refresh_reservation_cache(&state).await;

    Ok((StatusCode::CREATED, Json(created)))
}
