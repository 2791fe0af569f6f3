//! Modelo de presentación de la línea de tiempo de reservas.
//!
//! Deriva, a partir de la respuesta de `BookingsQuery`, qué debe mostrar
//! la vista: cargando, error, vacío o las reservas agrupadas en próximas,
//! en curso y pasadas.

use crate::collaborators::{BookingsQuery, BookingsResult};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use travel_domain::{BookingKind, BookingRecord, BookingStatus};
use uuid::Uuid;

/// Filtro de la vista. Una clave desconocida se trata como `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingFilter {
  #[default]
  All,
  Kind(BookingKind),
}

impl BookingFilter {
  pub fn from_key(key: Option<&str>) -> Self {
    match key.map(|k| k.trim().to_lowercase()).as_deref() {
      None | Some("") | Some("all") => BookingFilter::All,
      Some("flight") => BookingFilter::Kind(BookingKind::Flight),
      Some("hotel") => BookingFilter::Kind(BookingKind::Hotel),
      Some("package") => BookingFilter::Kind(BookingKind::Package),
      Some(other) => {
        warn!("filtro de reservas desconocido '{}', se muestran todas", other);
        BookingFilter::All
      }
    }
  }

  pub fn key(&self) -> &'static str {
    match self {
      BookingFilter::All => "all",
      BookingFilter::Kind(k) => k.filter_key(),
    }
  }

  fn accepts(&self, record: &BookingRecord) -> bool {
    match self {
      BookingFilter::All => true,
      BookingFilter::Kind(k) => record.kind == *k,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelinePhase {
  Upcoming,
  Ongoing,
  Past,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
  pub id: Uuid,
  pub kind: BookingKind,
  pub title: String,
  pub location: String,
  pub start_date: NaiveDate,
  pub end_date: NaiveDate,
  pub status: BookingStatus,
  pub phase: TimelinePhase,
  pub status_label: String,
  /// Días hasta el inicio; negativo si ya empezó.
  pub days_until: i64,
  pub nights: i64,
  pub amount: u64,
}

impl TimelineEntry {
  fn from_record(record: &BookingRecord, today: NaiveDate) -> Self {
    let phase = if record.status == BookingStatus::Cancelled || record.end_date < today {
      TimelinePhase::Past
    } else if record.start_date > today {
      TimelinePhase::Upcoming
    } else {
      TimelinePhase::Ongoing
    };
    let status_label = match (record.status, phase) {
      (BookingStatus::Cancelled, _) => "Cancelled".to_string(),
      (_, TimelinePhase::Past) => "Completed".to_string(),
      (_, TimelinePhase::Ongoing) => "In progress".to_string(),
      (status, TimelinePhase::Upcoming) => status.to_string(),
    };
    TimelineEntry { id: record.id,
                    kind: record.kind,
                    title: record.title.clone(),
                    location: record.location.clone(),
                    start_date: record.start_date,
                    end_date: record.end_date,
                    status: record.status,
                    phase,
                    status_label,
                    days_until: (record.start_date - today).num_days(),
                    nights: (record.end_date - record.start_date).num_days().max(0),
                    amount: record.amount }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
  /// Orden: inicio más cercano primero.
  pub upcoming: Vec<TimelineEntry>,
  pub ongoing: Vec<TimelineEntry>,
  /// Orden: más reciente primero.
  pub past: Vec<TimelineEntry>,
}

impl Timeline {
  pub fn len(&self) -> usize {
    self.upcoming.len() + self.ongoing.len() + self.past.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingsView {
  Loading,
  Failed(String),
  Empty,
  Timeline(Timeline),
}

impl BookingsView {
  /// Deriva la vista a partir de la respuesta de la consulta. El error
  /// tiene prioridad sobre `loading`.
  pub fn from_result(result: &BookingsResult, filter: BookingFilter, today: NaiveDate) -> Self {
    if let Some(err) = &result.error {
      return BookingsView::Failed(err.clone());
    }
    if result.loading {
      return BookingsView::Loading;
    }
    let mut timeline = Timeline::default();
    for entry in result.records
                       .iter()
                       .filter(|r| filter.accepts(r))
                       .map(|r| TimelineEntry::from_record(r, today))
    {
      match entry.phase {
        TimelinePhase::Upcoming => timeline.upcoming.push(entry),
        TimelinePhase::Ongoing => timeline.ongoing.push(entry),
        TimelinePhase::Past => timeline.past.push(entry),
      }
    }
    if timeline.is_empty() {
      return BookingsView::Empty;
    }
    timeline.upcoming.sort_by_key(|e| (e.start_date, e.id));
    timeline.ongoing.sort_by_key(|e| (e.end_date, e.id));
    timeline.past.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)));
    BookingsView::Timeline(timeline)
  }
}

/// Consulta las reservas y deriva la vista en un solo paso.
pub async fn load_timeline<Q>(query: &Q, filter_key: Option<&str>, today: NaiveDate) -> BookingsView
  where Q: BookingsQuery + ?Sized
{
  let filter = BookingFilter::from_key(filter_key);
  let result = query.fetch_bookings(Some(filter.key())).await;
  BookingsView::from_result(&result, filter, today)
}
