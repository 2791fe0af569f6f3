pub mod profile_setup;
pub mod trip_planner;

pub use profile_setup::{profile_from_values, profile_setup_steps, ProfileSubmit};
pub use trip_planner::{plan_from_values, trip_planner_steps, TripPlanSubmit};
