use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{AvailabilityWindow, BookedAppointment};

/// Source of a professional's configured weekly windows.
#[async_trait]
pub trait AvailabilityLookup: Send + Sync {
    async fn get_by_professional_and_day(
        &self,
        professional_id: Uuid,
        day_of_week: u8,
    ) -> Result<Vec<AvailabilityWindow>>;
}

/// Source of the appointments already booked with a professional.
#[async_trait]
pub trait BookedAppointmentLookup: Send + Sync {
    async fn get_by_professional_and_date(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<BookedAppointment>>;
}
