use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::AvailableSlotsResponse;
use crate::services::{AvailabilityLookup, AvailabilityResolver, SupabaseAvailabilityStore};

#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct WeekdayQuery {
    pub day_of_week: u8,
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppConfig>>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let store = Arc::new(SupabaseAvailabilityStore::new(&state));
    let resolver = AvailabilityResolver::new(store.clone(), store);

    let available_slots = resolver.resolve(professional_id, query.date).await?;

    Ok(Json(AvailableSlotsResponse {
        professional_id,
        date: query.date,
        total: available_slots.len(),
        available_slots,
    }))
}

#[axum::debug_handler]
pub async fn get_weekday_availability(
    State(state): State<Arc<AppConfig>>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<WeekdayQuery>,
) -> Result<Json<Value>, AppError> {
    if query.day_of_week > 6 {
        return Err(AppError::BadRequest(
            "Day of week must be between 0 (Sunday) and 6 (Saturday)".to_string(),
        ));
    }

    let store = SupabaseAvailabilityStore::new(&state);
    let windows = store
        .get_by_professional_and_day(professional_id, query.day_of_week)
        .await
        .map_err(|e| AppError::ExternalService(format!("{:#}", e)))?;

    Ok(Json(json!({
        "professional_id": professional_id,
        "day_of_week": query.day_of_week,
        "windows": windows
    })))
}
