use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use crate::config::Config;
use crate::domain::models::reservation::Reservation;
use crate::domain::ports::{CommentRepository, ReservationRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    /// Opaque session tokens for logged-in admins, process memory only.
    pub admin_sessions: Arc<RwLock<HashSet<String>>>,
    /// Snapshot of all reservations, refreshed by the poller and after
    /// mutations. Availability reads go through this, never the store.
    pub slot_cache: Arc<tokio::sync::RwLock<Vec<Reservation>>>,
}
