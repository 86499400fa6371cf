use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{admin, availability, booking, comment, health, package};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public catalog & availability
        .route("/api/v1/packages", get(package::list_packages))
        .route("/api/v1/availability/slots", get(availability::get_slots))
        .route("/api/v1/availability/calendar", get(availability::get_calendar))

        // Public booking flow
        .route("/api/v1/quote", post(booking::quote))
        .route("/api/v1/bookings", post(booking::create_booking))
        .route("/api/v1/bookings/confirm", post(booking::confirm_booking))

        // Public reviews
        .route("/api/v1/comments", get(comment::list_comments).post(comment::create_comment))

        // Admin
        .route("/api/v1/admin/login", post(admin::login))
        .route("/api/v1/admin/reservations", get(admin::list_reservations).post(admin::create_reservation))
        .route("/api/v1/admin/reservations/day", get(admin::list_day))
        .route("/api/v1/admin/reservations/{id}", axum::routing::put(admin::update_reservation).delete(admin::delete_reservation))
        .route("/api/v1/admin/stats", get(admin::stats))
        .route("/api/v1/admin/comments", post(admin::create_comment))
        .route("/api/v1/admin/comments/{id}", axum::routing::put(admin::update_comment).delete(admin::delete_comment))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
