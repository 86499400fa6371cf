use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};
use crate::state::AppState;

/// Pull the full reservation list and swap it into the shared cache.
/// Last write wins; a failed poll leaves the previous snapshot in place.
pub async fn refresh_reservation_cache(state: &Arc<AppState>) {
    match state.reservation_repo.list().await {
        Ok(reservations) => {
            let mut cache = state.slot_cache.write().await;
            *cache = reservations;
            debug!("Reservation cache refreshed ({} rows)", cache.len());
        }
        Err(e) => error!("Failed to refresh reservation cache: {:?}", e),
    }
}

pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting reservation cache poller...");

    loop {
        refresh_reservation_cache(&state).await;
        sleep(Duration::from_secs(5)).await;
    }
}
