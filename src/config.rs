use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Shared static admin credential, compared by string equality.
    pub admin_password: String,
    /// Hosted checkout button id handed to the payment widget.
    pub paypal_button_id: String,
    pub deposit_amount: f64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            admin_password: env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set"),
            paypal_button_id: env::var("PAYPAL_BUTTON_ID")
                .unwrap_or_else(|_| "KB6QMB3QM5CP8".to_string()),
            deposit_amount: env::var("DEPOSIT_AMOUNT")
                .unwrap_or_else(|_| "40".to_string())
                .parse()
                .expect("DEPOSIT_AMOUNT must be a number"),
        }
    }
}
