// Archivo: stubs.rs
// Propósito: implementaciones simples para pruebas y wiring rápido: un
// reloj fijo y una acción de envío que registra lo recibido y responde
// con desenlaces programados.
use crate::clock::Clock;
use crate::domain::FieldMap;
use crate::submit::{SubmitAction, SubmitOutcome};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Reloj que siempre devuelve la misma fecha.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Acción de envío en memoria.
///
/// Devuelve los desenlaces encolados en orden; cuando la cola se agota
/// responde `Success`. Guarda una copia de cada registro recibido.
#[derive(Debug, Default)]
pub struct RecordingSubmit {
    outcomes: Mutex<VecDeque<SubmitOutcome>>,
    received: Mutex<Vec<FieldMap>>,
}

impl RecordingSubmit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea la acción con una lista de desenlaces programados.
    pub fn with_outcomes(outcomes: Vec<SubmitOutcome>) -> Self {
        Self { outcomes: Mutex::new(outcomes.into()),
               received: Mutex::new(Vec::new()) }
    }

    /// Registros recibidos hasta ahora.
    pub fn received(&self) -> Vec<FieldMap> {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl SubmitAction for RecordingSubmit {
    async fn submit(&self, values: &FieldMap) -> SubmitOutcome {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).push(values.clone());
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(SubmitOutcome::Success)
    }
}
