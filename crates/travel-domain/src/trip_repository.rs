use crate::{DomainError, TripPlan};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Trait que define la persistencia de planes de viaje.
pub trait TripPlanRepository: Send + Sync {
  /// Guarda un plan y devuelve su `Uuid`. Si ya existe un plan con el mismo
  /// `plan_hash` se devuelve el id existente sin duplicar.
  fn save_plan(&self, plan: TripPlan) -> Result<Uuid, DomainError>;

  /// Recupera un plan por su `Uuid`.
  fn get_plan(&self, id: &Uuid) -> Result<Option<TripPlan>, DomainError>;

  /// Lista todos los planes.
  fn list_plans(&self) -> Result<Vec<TripPlan>, DomainError>;

  /// Elimina un plan. `NotFound` si no existe.
  fn delete_plan(&self, id: &Uuid) -> Result<(), DomainError>;
}

/// Implementación en memoria para tests y desarrollo.
pub struct InMemoryTripPlanRepository {
  plans: Arc<Mutex<HashMap<Uuid, TripPlan>>>,
}

impl InMemoryTripPlanRepository {
  pub fn new() -> Self {
    Self { plans: Arc::new(Mutex::new(HashMap::new())) }
  }

  fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, TripPlan>>, DomainError> {
    self.plans
        .lock()
        .map_err(|e| DomainError::StorageError(format!("Mutex 'plans' poisoned: {}", e)))
  }
}

impl Default for InMemoryTripPlanRepository {
  fn default() -> Self {
    Self::new()
  }
}

impl TripPlanRepository for InMemoryTripPlanRepository {
  fn save_plan(&self, plan: TripPlan) -> Result<Uuid, DomainError> {
    let mut plans = self.lock()?;
    if let Some(existing) = plans.values().find(|p| p.plan_hash() == plan.plan_hash()) {
      return Ok(existing.id());
    }
    let id = plan.id();
    plans.insert(id, plan);
    Ok(id)
  }

  fn get_plan(&self, id: &Uuid) -> Result<Option<TripPlan>, DomainError> {
    Ok(self.lock()?.get(id).cloned())
  }

  fn list_plans(&self) -> Result<Vec<TripPlan>, DomainError> {
    let mut out: Vec<TripPlan> = self.lock()?.values().cloned().collect();
    out.sort_by_key(|p| p.start_date());
    Ok(out)
  }

  fn delete_plan(&self, id: &Uuid) -> Result<(), DomainError> {
    self.lock()?
        .remove(id)
        .map(|_| ())
        .ok_or_else(|| DomainError::NotFound(format!("plan {}", id)))
  }
}
