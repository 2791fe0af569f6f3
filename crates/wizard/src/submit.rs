// Archivo: submit.rs
// Propósito: contrato del envío terminal. El llamador suministra una
// `SubmitAction` asíncrona; el motor la invoca sólo cuando el último paso
// valida.
use crate::domain::FieldMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Resultado de la acción de envío: éxito o fallo con mensaje.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Success,
    Failure(String),
}

impl SubmitOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        SubmitOutcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success)
    }
}

impl<E: Display> From<std::result::Result<(), E>> for SubmitOutcome {
    fn from(r: std::result::Result<(), E>) -> Self {
        match r {
            Ok(()) => SubmitOutcome::Success,
            Err(e) => SubmitOutcome::Failure(e.to_string()),
        }
    }
}

/// Acción terminal suministrada por el llamador (por ejemplo crear la
/// cuenta en el servicio de autenticación).
///
/// Debe convertir cualquier error remoto en `SubmitOutcome::Failure`; el
/// motor nunca recibe un `Err`.
#[async_trait]
pub trait SubmitAction: Send + Sync {
    async fn submit(&self, values: &FieldMap) -> SubmitOutcome;
}

/// Comprobante de un envío pendiente. Lo entrega `Wizard::advance` en el
/// último paso y debe devolverse a `Wizard::complete_submission`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub id: Uuid,
    /// Copia de los valores al momento de iniciar el envío.
    pub values: FieldMap,
}

impl SubmissionTicket {
    pub(crate) fn new(values: FieldMap) -> Self {
        Self { id: Uuid::new_v4(), values }
    }
}
