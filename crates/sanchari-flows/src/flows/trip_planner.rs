//! Wizard planificador de viajes: destino, fechas, viajeros, presupuesto y
//! estilo, con un paso final de resumen. Al terminar guarda un `TripPlan`.

use async_trait::async_trait;
use log::info;
use std::sync::{Arc, Mutex};
use travel_domain::{DomainError, TravelStyle, TripPlan, TripPlanRepository};
use uuid::Uuid;
use wizard::derived::{estimated_cost, traveler_counts};
use wizard::{fields, FieldMap, StepDefinition, StepKind, SubmitAction, SubmitOutcome, WizardConfig};

pub const STYLE_OPTIONS: &[&str] = &["adventure", "relaxation", "cultural", "family", "romantic", "business"];

pub fn trip_planner_steps() -> Vec<StepDefinition> {
  vec![StepDefinition::new("welcome", "Plan your next trip", StepKind::Intro),
       StepDefinition::new("destination", "Where do you want to go?", StepKind::Destination),
       StepDefinition::new("dates", "When are you travelling?", StepKind::Dates),
       StepDefinition::new("travelers", "Who is coming?", StepKind::Travelers).with_subtitle("Adults, children and infants"),
       StepDefinition::new("budget", "What's your budget?", StepKind::Budget),
       StepDefinition::new("style", "Pick a travel style", StepKind::Style),
       StepDefinition::new("review", "Review your plan", StepKind::Review),]
}

/// Construye el `TripPlan` a partir de los valores acumulados. El costo
/// estimado se calcula con la misma fórmula que los derivados del wizard.
pub fn plan_from_values(values: &FieldMap, config: &WizardConfig) -> Result<TripPlan, DomainError> {
  let destination = values.get(fields::DESTINATION).and_then(|v| v.as_str()).unwrap_or("");
  let start = values.get(fields::START_DATE)
                    .and_then(|v| v.as_date())
                    .ok_or_else(|| DomainError::ValidationError("Falta la fecha de inicio".into()))?;
  let end = values.get(fields::END_DATE)
                  .and_then(|v| v.as_date())
                  .ok_or_else(|| DomainError::ValidationError("Falta la fecha de fin".into()))?;
  let counts = traveler_counts(values);
  let tier = values.get(fields::BUDGET).and_then(|v| v.as_str()).unwrap_or("");
  let style: TravelStyle = values.get(fields::TRAVEL_STYLE)
                                 .and_then(|v| v.as_str())
                                 .unwrap_or("")
                                 .parse()?;
  TripPlan::new(destination,
                start,
                end,
                counts.adults,
                counts.children,
                counts.infants,
                tier,
                style,
                estimated_cost(values, config))
}

/// Acción terminal del planificador: guarda el plan en el repositorio.
pub struct TripPlanSubmit<R>
  where R: TripPlanRepository + ?Sized
{
  repo: Arc<R>,
  config: WizardConfig,
  last_saved: Mutex<Option<Uuid>>,
}

impl<R> TripPlanSubmit<R> where R: TripPlanRepository + ?Sized
{
  pub fn new(repo: Arc<R>, config: WizardConfig) -> Self {
    Self { repo,
           config,
           last_saved: Mutex::new(None) }
  }

  /// Id del último plan guardado por esta acción.
  pub fn last_saved(&self) -> Option<Uuid> {
    *self.last_saved.lock().unwrap_or_else(|e| e.into_inner())
  }
}

#[async_trait]
impl<R> SubmitAction for TripPlanSubmit<R> where R: TripPlanRepository + ?Sized
{
  async fn submit(&self, values: &FieldMap) -> SubmitOutcome {
    let saved = plan_from_values(values, &self.config).and_then(|plan| self.repo.save_plan(plan));
    match saved {
      Ok(id) => {
        info!("plan de viaje guardado: {}", id);
        *self.last_saved.lock().unwrap_or_else(|e| e.into_inner()) = Some(id);
        SubmitOutcome::Success
      }
      Err(e) => SubmitOutcome::failure(e.to_string()),
    }
  }
}
