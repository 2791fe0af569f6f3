// trip_plan.rs
use crate::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
  Adventure,
  Relaxation,
  Cultural,
  Family,
  Romantic,
  Business,
}

impl fmt::Display for TravelStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      TravelStyle::Adventure => "adventure",
      TravelStyle::Relaxation => "relaxation",
      TravelStyle::Cultural => "cultural",
      TravelStyle::Family => "family",
      TravelStyle::Romantic => "romantic",
      TravelStyle::Business => "business",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for TravelStyle {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "adventure" => Ok(TravelStyle::Adventure),
      "relaxation" => Ok(TravelStyle::Relaxation),
      "cultural" => Ok(TravelStyle::Cultural),
      "family" => Ok(TravelStyle::Family),
      "romantic" => Ok(TravelStyle::Romantic),
      "business" => Ok(TravelStyle::Business),
      other => Err(DomainError::ValidationError(format!("Estilo de viaje desconocido: {}", other))),
    }
  }
}

/// Plan de viaje producido por el wizard planificador. Inmutable: el hash
/// identifica el contenido (destino, fechas, viajeros, presupuesto, estilo)
/// y permite detectar planes duplicados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlan {
  id: Uuid,
  destination: String,
  start_date: NaiveDate,
  end_date: NaiveDate,
  adults: u32,
  children: u32,
  infants: u32,
  budget_tier: String,
  style: TravelStyle,
  estimated_cost: Option<u64>,
  plan_hash: String,
}

impl TripPlan {
  #[allow(clippy::too_many_arguments)]
  pub fn new(destination: &str,
             start_date: NaiveDate,
             end_date: NaiveDate,
             adults: u32,
             children: u32,
             infants: u32,
             budget_tier: &str,
             style: TravelStyle,
             estimated_cost: Option<u64>)
             -> Result<Self, DomainError> {
    if destination.trim().is_empty() {
      return Err(DomainError::ValidationError("El destino no puede estar vacío".to_string()));
    }
    if end_date <= start_date {
      return Err(DomainError::ValidationError("La fecha de fin debe ser posterior a la de inicio".to_string()));
    }
    if adults as u64 + children as u64 + infants as u64 == 0 {
      return Err(DomainError::ValidationError("Un plan necesita al menos un viajero".to_string()));
    }
    let destination = destination.trim().to_string();
    let budget_tier = budget_tier.trim().to_string();
    let plan_hash =
      Self::calculate_hash(&destination, start_date, end_date, [adults, children, infants], &budget_tier, style);
    Ok(Self { id: Uuid::new_v4(),
              destination,
              start_date,
              end_date,
              adults,
              children,
              infants,
              budget_tier,
              style,
              estimated_cost,
              plan_hash })
  }

  fn calculate_hash(destination: &str,
                    start: NaiveDate,
                    end: NaiveDate,
                    travelers: [u32; 3],
                    tier: &str,
                    style: TravelStyle)
                    -> String {
    let mut hasher = Sha256::new();
    hasher.update(destination.to_lowercase().as_bytes());
    hasher.update(start.to_string().as_bytes());
    hasher.update(end.to_string().as_bytes());
    for t in travelers {
      hasher.update(t.to_le_bytes());
    }
    hasher.update(tier.as_bytes());
    hasher.update(style.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
  }

  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn destination(&self) -> &str {
    &self.destination
  }

  pub fn start_date(&self) -> NaiveDate {
    self.start_date
  }

  pub fn end_date(&self) -> NaiveDate {
    self.end_date
  }

  pub fn nights(&self) -> i64 {
    (self.end_date - self.start_date).num_days()
  }

  pub fn travelers(&self) -> u32 {
    self.adults.saturating_add(self.children).saturating_add(self.infants)
  }

  pub fn budget_tier(&self) -> &str {
    &self.budget_tier
  }

  pub fn style(&self) -> TravelStyle {
    self.style
  }

  pub fn estimated_cost(&self) -> Option<u64> {
    self.estimated_cost
  }

  pub fn plan_hash(&self) -> &str {
    &self.plan_hash
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, day).unwrap()
  }

  #[test]
  fn same_content_same_hash() {
    let a = TripPlan::new("Goa", d(1), d(5), 2, 0, 0, "mid", TravelStyle::Relaxation, Some(200_000)).unwrap();
    let b = TripPlan::new(" goa ", d(1), d(5), 2, 0, 0, "mid", TravelStyle::Relaxation, None).unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.plan_hash(), b.plan_hash());
    assert_eq!(a.nights(), 4);
  }

  #[test]
  fn rejects_inverted_dates() {
    let r = TripPlan::new("Goa", d(5), d(5), 1, 0, 0, "mid", TravelStyle::Cultural, None);
    assert!(matches!(r, Err(DomainError::ValidationError(_))));
  }

  #[test]
  fn huge_party_saturates_instead_of_overflowing() {
    let p = TripPlan::new("Goa", d(1), d(3), u32::MAX, 1, 1, "mid", TravelStyle::Family, None).unwrap();
    assert_eq!(p.travelers(), u32::MAX);
  }
}
