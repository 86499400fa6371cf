mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn kids_payload() -> Value {
    json!({
        "package": "kids",
        "space": "open",
        "children": 20,
        "adults": 30,
        "date": "2030-09-12",
        "slot": "11:00–14:00",
        "name": "Mila Petrov",
        "phone": "+381601234567",
        "email": "mila@example.com"
    })
}

async fn post(app: &TestApp, uri: &str, payload: &Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn admin_reservations(app: &TestApp) -> Value {
    let token = app.login_admin().await;
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/admin/reservations")
            .header(header::COOKIE, format!("admin_session={}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    parse_body(res).await
}

#[tokio::test]
async fn quote_matches_worked_example() {
    let app = TestApp::new().await;

    // 60 guests, two tables, ten kilograms of LED ice.
    let mut payload = kids_payload();
    payload["children"] = json!(40);
    payload["adults"] = json!(20);
    payload["extras"] = json!({
        "tables": 2, "waiter_hours": 0, "led_kg": 10.0,
        "photographer": false, "decoration": false, "catering": false,
        "makeup": false, "dj": false
    });

    let res = post(&app, "/api/v1/quote", &payload).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["total"], 178.0);
    assert_eq!(body["deposit"], 40.0);
    assert_eq!(body["remainder"], 138.0);
}

#[tokio::test]
async fn teen_four_hour_quote() {
    let app = TestApp::new().await;

    let payload = json!({
        "package": "teen",
        "space": "open",
        "duration": 4,
        "guests": 55,
        "date": "2030-09-12",
        "slot": "20:00–00:00",
        "name": "Luka",
        "phone": "+381601112223"
    });

    let res = post(&app, "/api/v1/quote", &payload).await;
    let body = parse_body(res).await;
    assert_eq!(body["total"], 230.0);
}

#[tokio::test]
async fn validation_failure_points_at_missing_step_and_persists_nothing() {
    let app = TestApp::new().await;

    let mut payload = kids_payload();
    payload.as_object_mut().unwrap().remove("space");

    let res = post(&app, "/api/v1/bookings", &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["step"], "space-step");

    let mut payload = kids_payload();
    payload.as_object_mut().unwrap().remove("date");
    let res = post(&app, "/api/v1/bookings", &payload).await;
    let body = parse_body(res).await;
    assert_eq!(body["step"], "date-step");

    let mut payload = kids_payload();
    payload.as_object_mut().unwrap().remove("slot");
    let res = post(&app, "/api/v1/bookings", &payload).await;
    let body = parse_body(res).await;
    assert_eq!(body["step"], "slot-step");

    let mut payload = kids_payload();
    payload["name"] = json!("");
    let res = post(&app, "/api/v1/bookings", &payload).await;
    let body = parse_body(res).await;
    assert_eq!(body["step"], "form-step");

    let reservations = admin_reservations(&app).await;
    assert_eq!(reservations.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn past_dates_are_rejected_and_never_persisted() {
    let app = TestApp::new().await;

    let mut payload = kids_payload();
    payload["date"] = json!("2020-01-10");

    let res = post(&app, "/api/v1/bookings", &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["step"], "date-step");

    // The payment callback revalidates the same chain.
    let res = post(&app, "/api/v1/bookings/confirm", &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["step"], "date-step");

    let reservations = admin_reservations(&app).await;
    assert_eq!(reservations.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn successful_submit_is_payment_ready_not_persisted() {
    let app = TestApp::new().await;

    let res = post(&app, "/api/v1/bookings", &kids_payload()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "payment_ready");
    assert_eq!(body["total"], 120.0);
    assert_eq!(body["deposit"], 40.0);
    assert_eq!(body["remainder"], 80.0);
    assert_eq!(body["paypal_button_id"], "TESTBUTTON");

    let reservations = admin_reservations(&app).await;
    assert_eq!(reservations.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn confirm_persists_a_confirmed_paid_reservation() {
    let app = TestApp::new().await;

    let res = post(&app, "/api/v1/bookings/confirm", &kids_payload()).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "confirmed");
    assert_eq!(body["deposit_paid"], true);
    assert_eq!(body["package_type"], "kids");
    assert_eq!(body["guest_count"], 50);
    assert_eq!(body["time_slot"], "11:00–14:00");

    let reservations = admin_reservations(&app).await;
    assert_eq!(reservations.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn second_confirm_of_the_same_slot_conflicts() {
    let app = TestApp::new().await;

    let res = post(&app, "/api/v1/bookings/confirm", &kids_payload()).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let mut rival = kids_payload();
    rival["name"] = json!("Second Caller");
    let res = post(&app, "/api/v1/bookings/confirm", &rival).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let reservations = admin_reservations(&app).await;
    assert_eq!(reservations.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn conflict_refreshes_the_slot_view() {
    use chrono::NaiveDate;
    use garden_booking_backend::domain::models::reservation::{
        ExtraServices, NewReservationParams, Reservation, STATUS_CONFIRMED,
    };

    let app = TestApp::new().await;

    // Seed the store behind the cache's back so the slot view is stale.
    let seeded = Reservation::new(NewReservationParams {
        package_type: "kids".into(),
        space: "open".into(),
        guest_count: 50,
        event_date: NaiveDate::from_ymd_opt(2030, 9, 12).unwrap(),
        time_slot: "11:00–14:00".into(),
        extras: ExtraServices::default(),
        total_price: 120.0,
        deposit_paid: true,
        customer_name: "Early Bird".into(),
        customer_email: "early@example.com".into(),
        customer_phone: "+381600000001".into(),
        notes: None,
        status: STATUS_CONFIRMED.into(),
    });
    app.state.reservation_repo.create(&seeded).await.unwrap();

    let res = post(&app, "/api/v1/bookings/confirm", &kids_payload()).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // The conflict forced a cache refresh, so the taken slot is gone.
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/availability/slots?package=kids&date=2030-09-12")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["slots"], json!(["15:00–18:00"]));
}

#[tokio::test]
async fn premium_short_circuits_to_phone_contact() {
    let app = TestApp::new().await;

    let payload = json!({ "package": "premium", "space": "open", "guests": 80 });
    let res = post(&app, "/api/v1/bookings", &payload).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "contact_required");

    let res = post(&app, "/api/v1/quote", &payload).await;
    let body = parse_body(res).await;
    assert_eq!(body["total"], 0.0);
}

#[tokio::test]
async fn holiday_date_carries_the_surcharge() {
    let app = TestApp::new().await;

    let mut payload = kids_payload();
    payload["date"] = json!("2031-01-01");
    let res = post(&app, "/api/v1/quote", &payload).await;
    let body = parse_body(res).await;
    assert_eq!(body["total"], 190.0);
}
