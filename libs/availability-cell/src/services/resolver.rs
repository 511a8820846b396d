use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::AvailabilityError;
use crate::models::{
    day_of_week, AvailabilityWindow, BookedAppointment, Slot, SLOT_DURATION_MINUTES,
};
use crate::services::clock::{anchor, is_at_or_after, is_at_or_before};
use crate::services::lookup::{AvailabilityLookup, BookedAppointmentLookup};

/// Days after creation during which a one-off window is still honoured.
const ONE_OFF_VALIDITY_DAYS: i64 = 7;

/// Turns a professional's windows and bookings into open slots for a date.
pub struct AvailabilityResolver {
    windows: Arc<dyn AvailabilityLookup>,
    appointments: Arc<dyn BookedAppointmentLookup>,
}

impl AvailabilityResolver {
    pub fn new(
        windows: Arc<dyn AvailabilityLookup>,
        appointments: Arc<dyn BookedAppointmentLookup>,
    ) -> Self {
        Self { windows, appointments }
    }

    /// Open slot start times for `date`, as ascending `HH:MM` labels.
    pub async fn resolve(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<String>, AvailabilityError> {
        let slots = self.resolve_slots(professional_id, date).await?;
        Ok(slots.iter().map(Slot::start_label).collect())
    }

    pub async fn resolve_slots(
        &self,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Slot>, AvailabilityError> {
        let dow = day_of_week(date);
        debug!("Resolving slots for professional {} on {} (day {})", professional_id, date, dow);

        let (windows, appointments) = tokio::try_join!(
            self.windows.get_by_professional_and_day(professional_id, dow),
            self.appointments.get_by_professional_and_date(professional_id, date),
        )?;

        if windows.is_empty() {
            debug!("No availability windows for professional {} on day {}", professional_id, dow);
            return Ok(vec![]);
        }

        let slots = compute_slots(date, &windows, &appointments)?;
        debug!("Found {} available slots", slots.len());
        Ok(slots)
    }
}

/// Slot generation over already-fetched snapshots.
pub fn compute_slots(
    date: NaiveDate,
    windows: &[AvailabilityWindow],
    appointments: &[BookedAppointment],
) -> Result<Vec<Slot>, AvailabilityError> {
    let dow = day_of_week(date);
    let busy = busy_intervals(appointments)?;
    let step = Duration::minutes(SLOT_DURATION_MINUTES);

    let mut slots = Vec::new();

    for window in windows {
        if window.day_of_week != dow {
            warn!(
                "Skipping window {}: stored for day {}, requested day {}",
                window.id, window.day_of_week, dow
            );
            continue;
        }
        if !window.is_available || !window_applies(window, date) {
            continue;
        }

        let window_start = anchor(date, "start_time", &window.start_time)?;
        let window_end = anchor(date, "end_time", &window.end_time)?;

        let mut slot_start = window_start;
        loop {
            let slot_end = slot_start + step;
            if !is_at_or_before(slot_end, window_end) {
                break;
            }

            let taken = busy.iter().any(|&(busy_start, busy_end)| {
                overlaps(slot_start, slot_end, busy_start, busy_end)
            });

            if !taken {
                slots.push(Slot {
                    start_time: slot_start.time(),
                    end_time: slot_end.time(),
                });
            }

            slot_start = slot_end;
        }
    }

    slots.sort_by_key(|slot| slot.start_time);
    Ok(slots)
}

/// Recurring windows hold every week. A one-off window only holds on the
/// weekday it was created, up to a week after creation. Creation time is
/// read as wall-clock time in the offset it was recorded with.
pub fn window_applies(window: &AvailabilityWindow, date: NaiveDate) -> bool {
    if window.is_recurring {
        return true;
    }

    let created = window.created_at.naive_local().date();
    if day_of_week(created) != day_of_week(date) {
        return false;
    }

    let elapsed = (date - created).num_days();
    (0..=ONE_OFF_VALIDITY_DAYS).contains(&elapsed)
}

/// Any non-empty intersection of `[slot_start, slot_end)` with
/// `[busy_start, busy_end)`. Shared edges do not count.
pub fn overlaps(
    slot_start: NaiveDateTime,
    slot_end: NaiveDateTime,
    busy_start: NaiveDateTime,
    busy_end: NaiveDateTime,
) -> bool {
    let starts_during =
        is_at_or_after(slot_start, busy_start) && !is_at_or_after(slot_start, busy_end);
    let ends_during =
        !is_at_or_before(slot_end, busy_start) && is_at_or_before(slot_end, busy_end);
    let inside_busy =
        is_at_or_before(busy_start, slot_start) && is_at_or_before(slot_end, busy_end);
    let covers_busy =
        is_at_or_before(slot_start, busy_start) && is_at_or_before(busy_end, slot_end);

    starts_during || ends_during || inside_busy || covers_busy
}

/// Blocking bookings as anchored intervals. Bookings that end at or before
/// their start cover no time and are left out.
fn busy_intervals(
    appointments: &[BookedAppointment],
) -> Result<Vec<(NaiveDateTime, NaiveDateTime)>, AvailabilityError> {
    let mut busy = Vec::new();

    for appointment in appointments.iter().filter(|a| a.status.blocks_slot()) {
        let start = anchor(appointment.date, "appointment start_time", &appointment.start_time)?;
        let end = anchor(appointment.date, "appointment end_time", &appointment.end_time)?;

        if is_at_or_before(end, start) {
            warn!("Ignoring empty booking {} ({} - {})", appointment.id, start, end);
            continue;
        }
        busy.push((start, end));
    }

    Ok(busy)
}
