// Archivo: progress.rs
// Propósito: indicadores de progreso calculados a partir del índice actual.
// El índice es la única fuente de verdad; aquí no se guarda nada.
use crate::domain::StepDefinition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProgress {
    pub id: String,
    pub title: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Posición 1-based para mostrar ("Paso 2 de 7").
    pub position: usize,
    pub total: usize,
    pub percent: u8,
    pub steps: Vec<StepProgress>,
}

impl Progress {
    pub fn compute(steps: &[StepDefinition], index: usize, completed: bool) -> Self {
        let total = steps.len();
        let done = if completed { total } else { index };
        let percent = if total == 0 { 0 } else { (done * 100 / total) as u8 };
        let steps = steps.iter()
                         .enumerate()
                         .map(|(i, s)| {
                             let status = if completed || i < index {
                                 StepStatus::Completed
                             } else if i == index {
                                 StepStatus::Current
                             } else {
                                 StepStatus::Upcoming
                             };
                             StepProgress { id: s.id.clone(),
                                            title: s.title.clone(),
                                            status }
                         })
                         .collect();
        Progress { position: index + 1,
                   total,
                   percent,
                   steps }
    }
}
