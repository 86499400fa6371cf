use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub total: f64,
    pub deposit: f64,
    pub remainder: f64,
}

/// The validation chain passed; the client may now show the payment widget.
#[derive(Serialize)]
pub struct PaymentReadyResponse {
    pub status: &'static str,
    pub total: f64,
    pub deposit: f64,
    pub remainder: f64,
    pub paypal_button_id: String,
}

/// Premium celebrations skip the whole flow.
#[derive(Serialize)]
pub struct ContactRequiredResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
}
