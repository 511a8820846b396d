pub mod clock;
pub mod lookup;
pub mod resolver;
pub mod supabase;

pub use lookup::{AvailabilityLookup, BookedAppointmentLookup};
pub use resolver::AvailabilityResolver;
pub use supabase::SupabaseAvailabilityStore;
