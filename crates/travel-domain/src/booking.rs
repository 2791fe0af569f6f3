// booking.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
  Flight,
  Hotel,
  Package,
}

impl BookingKind {
  /// Clave de filtro usada por la vista de reservas.
  pub fn filter_key(&self) -> &'static str {
    match self {
      BookingKind::Flight => "flight",
      BookingKind::Hotel => "hotel",
      BookingKind::Package => "package",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
  Confirmed,
  Pending,
  Cancelled,
}

impl fmt::Display for BookingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      BookingStatus::Confirmed => "Confirmed",
      BookingStatus::Pending => "Pending",
      BookingStatus::Cancelled => "Cancelled",
    };
    write!(f, "{}", s)
  }
}

/// Registro de reserva tal como lo devuelve el servicio de datos de
/// usuario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
  pub id: Uuid,
  pub kind: BookingKind,
  pub title: String,
  pub location: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub status: BookingStatus,
  /// Importe total en la unidad monetaria menor.
  pub amount: u64,
}
