use chrono::{Duration, NaiveDate};
use sanchari_flows::stubs::InMemoryBookings;
use sanchari_flows::{load_timeline, BookingFilter, BookingsResult, BookingsView};
use travel_domain::{BookingKind, BookingRecord, BookingStatus};
use uuid::Uuid;

fn today() -> NaiveDate {
  NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()
}

fn booking(kind: BookingKind, title: &str, start_offset: i64, nights: i64, status: BookingStatus) -> BookingRecord {
  let start = today() + Duration::days(start_offset);
  BookingRecord { id: Uuid::new_v4(),
                  kind,
                  title: title.into(),
                  location: "Jaipur".into(),
                  start_date: start,
                  end_date: start + Duration::days(nights),
                  status,
                  amount: 12_500 }
}

fn sample() -> Vec<BookingRecord> {
  vec![booking(BookingKind::Hotel, "Palace stay", 30, 3, BookingStatus::Confirmed),
       booking(BookingKind::Flight, "DEL-JAI", 5, 0, BookingStatus::Pending),
       booking(BookingKind::Package, "Golden triangle", -2, 5, BookingStatus::Confirmed),
       booking(BookingKind::Hotel, "Lake view", -40, 2, BookingStatus::Confirmed),
       booking(BookingKind::Hotel, "Desert camp", 10, 2, BookingStatus::Cancelled),]
}

#[test]
fn groups_and_orders_entries() {
  let result = BookingsResult { records: sample(),
                                loading: false,
                                error: None };
  let view = BookingsView::from_result(&result, BookingFilter::All, today());
  let timeline = match view {
    BookingsView::Timeline(t) => t,
    other => panic!("expected timeline, got {:?}", other),
  };
  let upcoming: Vec<&str> = timeline.upcoming.iter().map(|e| e.title.as_str()).collect();
  assert_eq!(upcoming, vec!["DEL-JAI", "Palace stay"]);
  assert_eq!(timeline.upcoming[0].status_label, "Pending");
  assert_eq!(timeline.upcoming[0].days_until, 5);

  assert_eq!(timeline.ongoing.len(), 1);
  assert_eq!(timeline.ongoing[0].status_label, "In progress");
  assert_eq!(timeline.ongoing[0].nights, 5);

  let past: Vec<(&str, &str)> = timeline.past.iter().map(|e| (e.title.as_str(), e.status_label.as_str())).collect();
  assert_eq!(past, vec![("Desert camp", "Cancelled"), ("Lake view", "Completed")]);
}

#[test]
fn error_and_loading_states() {
  let failed = BookingsResult { records: sample(),
                                loading: true,
                                error: Some("timeout".into()) };
  assert_eq!(BookingsView::from_result(&failed, BookingFilter::All, today()),
             BookingsView::Failed("timeout".into()));

  let loading = BookingsResult { records: vec![],
                                 loading: true,
                                 error: None };
  assert_eq!(BookingsView::from_result(&loading, BookingFilter::All, today()), BookingsView::Loading);

  let empty = BookingsResult::default();
  assert_eq!(BookingsView::from_result(&empty, BookingFilter::All, today()), BookingsView::Empty);
}

#[test]
fn filter_keys() {
  assert_eq!(BookingFilter::from_key(Some("Hotel")), BookingFilter::Kind(BookingKind::Hotel));
  assert_eq!(BookingFilter::from_key(Some("cruise")), BookingFilter::All);
  assert_eq!(BookingFilter::from_key(None).key(), "all");
}

#[tokio::test]
async fn load_timeline_uses_query_and_filter() {
  let query = InMemoryBookings::new(sample());
  match load_timeline(&query, Some("flight"), today()).await {
    BookingsView::Timeline(t) => {
      assert_eq!(t.len(), 1);
      assert_eq!(t.upcoming[0].kind, BookingKind::Flight);
    }
    other => panic!("expected timeline, got {:?}", other),
  }

  query.set_failure(Some("service unavailable".into()));
  assert_eq!(load_timeline(&query, None, today()).await,
             BookingsView::Failed("service unavailable".into()));
}
