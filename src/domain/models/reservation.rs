use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Optional add-on services layered onto a package. The service set is closed,
/// so every known service gets its own field.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExtraServices {
    pub tables: u32,
    pub waiter_hours: u32,
    pub led_kg: f64,
    pub photographer: bool,
    pub decoration: bool,
    pub catering: bool,
    pub makeup: bool,
    pub dj: bool,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Reservation {
    pub id: String,
    pub package_type: String,
    pub space: String,
    pub guest_count: i32,
    /// Calendar day only. All date comparisons happen on this canonical form.
    pub event_date: NaiveDate,
    pub time_slot: String,
    pub extras: Json<ExtraServices>,
    pub total_price: f64,
    pub deposit_paid: bool,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewReservationParams {
    pub package_type: String,
    pub space: String,
    pub guest_count: i32,
    pub event_date: NaiveDate,
    pub time_slot: String,
    pub extras: ExtraServices,
    pub total_price: f64,
    pub deposit_paid: bool,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub notes: Option<String>,
    pub status: String,
}

impl Reservation {
    pub fn new(params: NewReservationParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            package_type: params.package_type,
            space: params.space,
            guest_count: params.guest_count,
            event_date: params.event_date,
            time_slot: params.time_slot,
            extras: Json(params.extras),
            total_price: params.total_price,
            deposit_paid: params.deposit_paid,
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            customer_phone: params.customer_phone,
            notes: params.notes,
            status: params.status,
            created_at: Utc::now(),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == STATUS_CONFIRMED
    }
}
