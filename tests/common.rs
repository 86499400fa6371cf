use garden_booking_backend::{
    api::router::create_router,
    background::start_background_worker,
    config::Config,
    infra::repositories::{
        sqlite_comment_repo::SqliteCommentRepo,
        sqlite_reservation_repo::SqliteReservationRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "garden-secret";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_password: ADMIN_PASSWORD.to_string(),
            paypal_button_id: "TESTBUTTON".to_string(),
            deposit_amount: 40.0,
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            reservation_repo: Arc::new(SqliteReservationRepo::new(pool.clone())),
            comment_repo: Arc::new(SqliteCommentRepo::new(pool.clone())),
            admin_sessions: Arc::new(RwLock::new(HashSet::new())),
            slot_cache: Arc::new(tokio::sync::RwLock::new(Vec::new())),
        });

        let worker_state = state.clone();
        tokio::spawn(async move {
            start_background_worker(worker_state).await;
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Log in with the shared password and return the session cookie value.
    #[allow(dead_code)]
    pub async fn login_admin(&self) -> String {
        let payload = serde_json::json!({ "password": ADMIN_PASSWORD });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Admin login failed in test helper: status {}", response.status());
        }

        let cookie = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .find(|c| c.contains("admin_session="))
            .expect("No admin_session cookie returned");

        let start = cookie.find("admin_session=").unwrap() + "admin_session=".len();
        let end = cookie[start..].find(';').unwrap_or(cookie.len() - start);
        cookie[start..start + end].to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
