// Archivo: engine.rs
// Propósito: implementar `Wizard`, el motor de pasos con validación por
// paso, navegación y envío terminal.
//
// El envío se divide en dos fases (`advance` -> `Submit(ticket)` y
// `complete_submission`) para que la capa de presentación no mantenga un
// préstamo del wizard a través del `await`. Mientras hay un envío
// pendiente toda la navegación es no-op (`Navigation::Busy`).
use crate::clock::{Clock, SystemClock};
use crate::config::WizardConfig;
use crate::derived::DerivedValues;
use crate::domain::{FieldMap, FieldValue, StepDefinition, StepKind, ValidationResult, WizardState};
use crate::errors::{Result, WizardError};
use crate::progress::Progress;
use crate::submit::{SubmissionTicket, SubmitAction, SubmitOutcome};
use crate::validation;
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Resultado de una operación de navegación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// El índice cambió.
    Moved { from: usize, to: usize },
    /// Operación válida pero sin movimiento (retroceder desde el índice 0,
    /// saltar al paso actual).
    Stayed,
    /// El paso actual no valida; los errores ya están en el estado.
    Blocked(ValidationResult),
    /// Salto hacia adelante no permitido.
    Rejected,
    /// El último paso validó: hay que ejecutar la acción de envío y luego
    /// llamar a `complete_submission`.
    Submit(SubmissionTicket),
    /// Hay un envío pendiente; no se hizo nada.
    Busy,
    /// El wizard ya terminó con éxito; queda congelado.
    Finished,
}

/// Resultado de aplicar el desenlace de un envío.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Completed,
    /// El envío falló; el usuario fue reposicionado en `resumed_at`.
    Failed { message: String, resumed_at: usize },
}

/// Resultado combinado de `advance_and_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Navigated(Navigation),
    Submitted(Completion),
}

/// Motor de wizard lineal.
///
/// Responsabilidades:
/// - Mantener la secuencia de pasos y el índice actual
/// - Validar el paso actual antes de avanzar
/// - Acumular los valores en un único registro
/// - Entregar el registro completo a la acción de envío del llamador
pub struct Wizard {
    steps: Vec<StepDefinition>,
    state: WizardState,
    config: WizardConfig,
    clock: Arc<dyn Clock>,
    pending: Option<Uuid>,
}

impl Wizard {
    /// Crea un wizard en el índice 0. Una lista de pasos vacía es un error
    /// de contrato.
    pub fn initialize(steps: Vec<StepDefinition>, initial_values: FieldMap, config: WizardConfig) -> Result<Self> {
        if steps.is_empty() {
            return Err(WizardError::Contract("un wizard necesita al menos un paso".into()));
        }
        config.check()?;
        Ok(Self { steps,
                  state: WizardState::new(initial_values),
                  config,
                  clock: Arc::new(SystemClock),
                  pending: None })
    }

    /// Rehidrata un wizard desde un snapshot producido por `snapshot()`.
    /// Un envío pendiente no sobrevive a la recarga: el flag se descarta.
    pub fn restore(steps: Vec<StepDefinition>, config: WizardConfig, snapshot: &serde_json::Value) -> Result<Self> {
        let mut state: WizardState = serde_json::from_value(snapshot.clone())?;
        if steps.is_empty() {
            return Err(WizardError::Contract("un wizard necesita al menos un paso".into()));
        }
        if state.index >= steps.len() {
            return Err(WizardError::Contract(format!("snapshot con índice {} fuera de rango (pasos: {})",
                                                     state.index,
                                                     steps.len())));
        }
        config.check()?;
        state.submitting = false;
        Ok(Self { steps,
                  state,
                  config,
                  clock: Arc::new(SystemClock),
                  pending: None })
    }

    /// Sustituye el reloj (útil para fijar "hoy" en pruebas).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Serializa el estado actual.
    pub fn snapshot(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.state)?)
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.steps[self.state.index]
    }

    pub fn is_last_step(&self) -> bool {
        self.state.index + 1 == self.steps.len()
    }

    pub fn values(&self) -> &FieldMap {
        &self.state.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.state.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.state.errors.get(name).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.state.submission_error.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.state.completed
    }

    /// Valores derivados, recalculados en cada llamada.
    pub fn derived(&self) -> DerivedValues {
        DerivedValues::compute(&self.state.values, &self.config)
    }

    pub fn progress(&self) -> Progress {
        Progress::compute(&self.steps, self.state.index, self.state.completed)
    }

    /// Actualiza un campo y borra su error previo. No valida. Devuelve
    /// `false` si hay un envío pendiente o el wizard ya terminó.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        if self.state.submitting || self.state.completed {
            return false;
        }
        self.state.values.insert(name.to_string(), value);
        self.state.errors.shift_remove(name);
        true
    }

    /// Valida el paso `index` sin modificar el estado.
    pub fn validate_step(&self, index: usize) -> Result<ValidationResult> {
        let step = self.steps.get(index).ok_or_else(|| {
                                           WizardError::Contract(format!("paso {} fuera de rango (pasos: {})",
                                                                         index,
                                                                         self.steps.len()))
                                       })?;
        Ok(self.validate_kind(step.kind))
    }

    fn validate_kind(&self, kind: StepKind) -> ValidationResult {
        validation::validate(kind, &self.state.values, &self.config, self.clock.today())
    }

    fn block(&mut self, result: ValidationResult) -> Navigation {
        debug!("paso '{}' bloqueado: {} error(es)", self.current_step().id, result.len());
        for (field, message) in result.iter() {
            self.state.errors.insert(field.clone(), message.clone());
        }
        Navigation::Blocked(result)
    }

    /// Estado que impide navegar: envío pendiente o wizard terminado.
    fn frozen(&self) -> Option<Navigation> {
        if self.state.completed {
            Some(Navigation::Finished)
        } else if self.state.submitting {
            Some(Navigation::Busy)
        } else {
            None
        }
    }

    fn move_to(&mut self, to: usize) -> Navigation {
        let from = self.state.index;
        self.state.errors.clear();
        if from == to {
            return Navigation::Stayed;
        }
        self.state.index = to;
        debug!("wizard: paso {} -> {}", from, to);
        Navigation::Moved { from, to }
    }

    /// Valida el paso actual y avanza. En el último paso inicia el envío y
    /// devuelve `Navigation::Submit` en lugar de avanzar.
    pub fn advance(&mut self) -> Result<Navigation> {
        if let Some(nav) = self.frozen() {
            return Ok(nav);
        }
        let result = self.validate_step(self.state.index)?;
        if !result.is_valid() {
            return Ok(self.block(result));
        }
        if self.is_last_step() {
            self.state.errors.clear();
            self.state.submitting = true;
            self.state.submission_error = None;
            let ticket = SubmissionTicket::new(self.state.values.clone());
            self.pending = Some(ticket.id);
            info!("wizard: iniciando envío {}", ticket.id);
            return Ok(Navigation::Submit(ticket));
        }
        let next = self.state.index + 1;
        Ok(self.move_to(next))
    }

    /// Retrocede un paso si es posible. Siempre borra los errores.
    pub fn retreat(&mut self) -> Navigation {
        if let Some(nav) = self.frozen() {
            return nav;
        }
        let to = self.state.index.saturating_sub(1);
        self.move_to(to)
    }

    /// Salta a `target`. Hacia atrás (o al mismo paso) siempre se permite.
    /// Hacia adelante sólo al paso siguiente y sólo si el actual valida; un
    /// salto más lejano devuelve `Rejected`.
    pub fn jump_to(&mut self, target: usize) -> Result<Navigation> {
        if target >= self.steps.len() {
            return Err(WizardError::Contract(format!("salto a {} fuera de rango (pasos: {})",
                                                     target,
                                                     self.steps.len())));
        }
        if let Some(nav) = self.frozen() {
            return Ok(nav);
        }
        let current = self.state.index;
        if target <= current {
            return Ok(self.move_to(target));
        }
        if target > current + 1 {
            return Ok(Navigation::Rejected);
        }
        let result = self.validate_step(current)?;
        if !result.is_valid() {
            return Ok(self.block(result));
        }
        Ok(self.move_to(target))
    }

    /// Índice al que se devuelve al usuario cuando el envío falla: el primer
    /// paso de contraseña, si existe; si no, el actual.
    fn recovery_index(&self) -> usize {
        self.steps
            .iter()
            .position(|s| s.kind == StepKind::Password)
            .unwrap_or(self.state.index)
    }

    /// Aplica el desenlace de un envío iniciado por `advance`.
    pub fn complete_submission(&mut self, ticket: SubmissionTicket, outcome: SubmitOutcome) -> Result<Completion> {
        match self.pending {
            Some(id) if id == ticket.id => {}
            Some(id) => {
                return Err(WizardError::Contract(format!("el envío {} no es el pendiente ({})", ticket.id, id)));
            }
            None => {
                return Err(WizardError::Contract(format!("no hay envío pendiente para {}", ticket.id)));
            }
        }
        self.pending = None;
        self.state.submitting = false;
        match outcome {
            SubmitOutcome::Success => {
                self.state.completed = true;
                info!("wizard: envío {} completado", ticket.id);
                Ok(Completion::Completed)
            }
            SubmitOutcome::Failure(message) => {
                let resumed_at = self.recovery_index();
                warn!("wizard: envío {} falló: {}", ticket.id, message);
                self.state.index = resumed_at;
                self.state.submission_error = Some(message.clone());
                Ok(Completion::Failed { message, resumed_at })
            }
        }
    }

    /// Conveniencia: `advance` y, si corresponde, ejecuta la acción de envío
    /// y aplica su desenlace.
    pub async fn advance_and_submit<S>(&mut self, action: &S) -> Result<StepOutcome>
        where S: SubmitAction + ?Sized
    {
        match self.advance()? {
            Navigation::Submit(ticket) => {
                let outcome = action.submit(&ticket.values).await;
                let completion = self.complete_submission(ticket, outcome)?;
                Ok(StepOutcome::Submitted(completion))
            }
            other => Ok(StepOutcome::Navigated(other)),
        }
    }
}
