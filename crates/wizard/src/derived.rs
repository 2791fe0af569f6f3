// Archivo: derived.rs
// Propósito: valores derivados de solo lectura (duración del viaje, total
// de viajeros, costo estimado). Se recalculan en cada lectura a partir de
// los valores actuales; nunca se almacenan.
use crate::config::WizardConfig;
use crate::domain::{fields, FieldMap};
use serde::{Deserialize, Serialize};

/// Conteo de viajeros por categoría. Valores ausentes o negativos cuentan
/// como 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl TravelerCounts {
    /// Suma saturada: un conteo enorme no desborda.
    pub fn total(&self) -> u32 {
        self.adults.saturating_add(self.children).saturating_add(self.infants)
    }
}

/// Instantánea de todos los valores derivados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedValues {
    pub trip_duration_days: i64,
    pub total_travelers: u32,
    pub estimated_cost: Option<u64>,
}

impl DerivedValues {
    pub fn compute(values: &FieldMap, config: &WizardConfig) -> Self {
        DerivedValues { trip_duration_days: trip_duration_days(values),
                        total_travelers: total_travelers(values),
                        estimated_cost: estimated_cost(values, config) }
    }
}

fn count(values: &FieldMap, name: &str) -> u32 {
    values.get(name)
          .and_then(|v| v.as_integer())
          .map(|n| n.clamp(0, u32::MAX as i64) as u32)
          .unwrap_or(0)
}

pub fn traveler_counts(values: &FieldMap) -> TravelerCounts {
    TravelerCounts { adults: count(values, fields::ADULTS),
                     children: count(values, fields::CHILDREN),
                     infants: count(values, fields::INFANTS) }
}

/// Días entre inicio y fin. 0 si falta alguna fecha o si el fin es anterior
/// al inicio. Las fechas son días completos, así que el techo es exacto.
pub fn trip_duration_days(values: &FieldMap) -> i64 {
    let start = values.get(fields::START_DATE).and_then(|v| v.as_date());
    let end = values.get(fields::END_DATE).and_then(|v| v.as_date());
    match (start, end) {
        (Some(s), Some(e)) => (e - s).num_days().max(0),
        _ => 0,
    }
}

pub fn total_travelers(values: &FieldMap) -> u32 {
    traveler_counts(values).total()
}

/// Punto medio del nivel de presupuesto multiplicado por el total de
/// viajeros. La duración sólo condiciona la existencia del estimado: no es
/// multiplicador.
pub fn estimated_cost(values: &FieldMap, config: &WizardConfig) -> Option<u64> {
    let key = values.get(fields::BUDGET).and_then(|v| v.as_str())?;
    let tier = config.tier(key.trim())?;
    if trip_duration_days(values) == 0 {
        return None;
    }
    let travelers = total_travelers(values);
    if travelers == 0 {
        return None;
    }
    Some(tier.midpoint().saturating_mul(travelers as u64))
}
