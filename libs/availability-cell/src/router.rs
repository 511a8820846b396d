use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn availability_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/{professional_id}/available-slots", get(handlers::get_available_slots))
        .route("/{professional_id}/availability", get(handlers::get_weekday_availability))
        .with_state(state)
}
