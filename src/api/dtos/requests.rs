use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::models::reservation::ExtraServices;

fn default_children() -> u32 {
    20
}

fn default_adults() -> u32 {
    30
}

fn default_guests() -> u32 {
    30
}

/// The full booking form as the client holds it. Everything except the
/// package is optional so the validation chain can point at the first
/// missing step.
#[derive(Deserialize)]
pub struct BookingRequest {
    pub package: String,
    pub space: Option<String>,
    /// Teen party length in hours (3 or 4).
    pub duration: Option<u8>,
    #[serde(default = "default_children")]
    pub children: u32,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default = "default_guests")]
    pub guests: u32,
    pub date: Option<NaiveDate>,
    pub slot: Option<String>,
    #[serde(default)]
    pub extras: ExtraServices,
    #[serde(default)]
    pub waiter: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub package: String,
    pub date: NaiveDate,
    pub duration: Option<u8>,
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub author: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Deserialize)]
pub struct ReservationSearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
}

#[derive(Deserialize)]
pub struct StatsQuery {
    pub year: i32,
    pub month: u32,
}

fn default_status() -> String {
    crate::domain::models::reservation::STATUS_CONFIRMED.to_string()
}

/// Admin manual-entry form. Unlike the public flow the admin supplies every
/// field directly, including the price.
#[derive(Deserialize)]
pub struct AdminReservationRequest {
    pub package_type: String,
    pub space: String,
    pub guest_count: i32,
    pub event_date: NaiveDate,
    pub time_slot: String,
    #[serde(default)]
    pub extras: ExtraServices,
    pub total_price: f64,
    #[serde(default)]
    pub deposit_paid: bool,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}
