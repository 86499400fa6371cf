use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use std::sync::Arc;
use tower_cookies::Cookies;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "admin_session";

/// Gate for admin routes: the request must carry a session cookie whose token
/// was issued by a successful login in this process.
pub struct AdminSession(pub String);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let token = cookies
            .get(SESSION_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let sessions = app_state
            .admin_sessions
            .read()
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        if !sessions.contains(&token) {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Ok(AdminSession(token))
    }
}
