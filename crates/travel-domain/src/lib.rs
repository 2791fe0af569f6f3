mod booking;
mod errors;
mod profile;
mod trip_plan;
mod trip_repository;

pub use booking::{BookingKind, BookingRecord, BookingStatus};
pub use errors::DomainError;
pub use profile::{Gender, UserProfile};
pub use trip_plan::{TravelStyle, TripPlan};
pub use trip_repository::{InMemoryTripPlanRepository, TripPlanRepository};
