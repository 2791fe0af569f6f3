use crate::flows::{profile_setup_steps, trip_planner_steps};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wizard::StepDefinition;

/// Enum para identificar los wizards que soporta el crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardType {
    ProfileSetup,
    TripPlanner,
    #[default]
    Unknown,
}

impl WizardType {
    /// Secuencia de pasos del wizard; `None` para `Unknown`.
    pub fn steps(&self) -> Option<Vec<StepDefinition>> {
        match self {
            WizardType::ProfileSetup => Some(profile_setup_steps()),
            WizardType::TripPlanner => Some(trip_planner_steps()),
            WizardType::Unknown => None,
        }
    }
}

impl fmt::Display for WizardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardType::ProfileSetup => "profile_setup",
            WizardType::TripPlanner => "trip_planner",
            WizardType::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for WizardType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "profile_setup" | "profile" => Ok(WizardType::ProfileSetup),
            "trip_planner" | "trip" => Ok(WizardType::TripPlanner),
            _ => Ok(WizardType::Unknown),
        }
    }
}
