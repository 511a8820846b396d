use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{AvailabilityWindow, BookedAppointment};
use crate::services::lookup::{AvailabilityLookup, BookedAppointmentLookup};

/// PostgREST-backed implementation of both lookups.
pub struct SupabaseAvailabilityStore {
    supabase: Arc<SupabaseClient>,
}

impl SupabaseAvailabilityStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: Arc::new(SupabaseClient::new(config)),
        }
    }

    pub fn with_client(supabase: Arc<SupabaseClient>) -> Self {
        Self { supabase }
    }
}

#[async_trait]
impl AvailabilityLookup for SupabaseAvailabilityStore {
    async fn get_by_professional_and_day(
        &self,
        professional_id: Uuid,
        day_of_week: u8,
    ) -> Result<Vec<AvailabilityWindow>> {
        debug!(
            "Fetching availability windows for professional {} on day {}",
            professional_id, day_of_week
        );

        let path = format!(
            "/rest/v1/availability_windows?professional_id=eq.{}&day_of_week=eq.{}&order=start_time.asc",
            professional_id, day_of_week
        );

        self.supabase
            .select(&path)
            .await
            .context("failed to load availability windows")
    }
}

#[async_trait]
impl BookedAppointmentLookup for SupabaseAvailabilityStore {
    async fn get_by_professional_and_date(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BookedAppointment>> {
        let date = date.format("%Y-%m-%d").to_string();
        debug!(
            "Fetching booked appointments for professional {} on {}",
            professional_id, date
        );

        let path = format!(
            "/rest/v1/appointments?professional_id=eq.{}&date=eq.{}&status=neq.cancelled&order=start_time.asc",
            professional_id, date
        );

        self.supabase
            .select(&path)
            .await
            .context("failed to load booked appointments")
    }
}
