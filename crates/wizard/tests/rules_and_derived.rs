use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use wizard::stubs::FixedClock;
use wizard::{fields, FieldMap, FieldValue, Navigation, StepDefinition, StepKind, Wizard, WizardConfig};

fn today() -> NaiveDate {
  NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
}

fn trip_wizard() -> Wizard {
  let steps = vec![StepDefinition::new("destination", "Where to?", StepKind::Destination),
                   StepDefinition::new("dates", "When?", StepKind::Dates),
                   StepDefinition::new("travelers", "Who?", StepKind::Travelers),
                   StepDefinition::new("budget", "Budget", StepKind::Budget),
                   StepDefinition::new("style", "Style", StepKind::Style)];
  Wizard::initialize(steps, FieldMap::new(), WizardConfig::default()).unwrap()
                                                                     .with_clock(Arc::new(FixedClock(today())))
}

#[test]
fn end_date_equal_to_start_is_rejected() {
  let mut w = trip_wizard();
  let tomorrow = today() + Duration::days(1);
  w.set_field(fields::START_DATE, FieldValue::Date(tomorrow));
  w.set_field(fields::END_DATE, FieldValue::Date(tomorrow));
  let r = w.validate_step(1).unwrap();
  assert_eq!(r.get(fields::END_DATE), Some("End date must be after start date"));
  assert!(r.get(fields::START_DATE).is_none());
}

#[test]
fn start_date_in_the_past_is_rejected() {
  let mut w = trip_wizard();
  w.set_field(fields::START_DATE, FieldValue::Date(today() - Duration::days(1)));
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(3)));
  let r = w.validate_step(1).unwrap();
  assert_eq!(r.get(fields::START_DATE), Some("Start date cannot be in the past"));
}

#[test]
fn start_today_is_allowed() {
  let mut w = trip_wizard();
  w.set_field(fields::START_DATE, FieldValue::text("2026-05-01"));
  w.set_field(fields::END_DATE, FieldValue::text("2026-05-04"));
  assert!(w.validate_step(1).unwrap().is_valid());
  assert_eq!(w.derived().trip_duration_days, 3);
}

#[test]
fn missing_dates_are_reported() {
  let w = trip_wizard();
  let r = w.validate_step(1).unwrap();
  assert_eq!(r.get(fields::START_DATE), Some("Start date is required"));
  assert_eq!(r.get(fields::END_DATE), Some("End date is required"));
  assert_eq!(w.derived().trip_duration_days, 0);
}

#[test]
fn children_without_adults_is_rejected_but_total_still_counts() {
  let mut w = trip_wizard();
  w.set_field(fields::ADULTS, FieldValue::Integer(0));
  w.set_field(fields::CHILDREN, FieldValue::Integer(2));
  w.set_field(fields::INFANTS, FieldValue::Integer(0));
  let r = w.validate_step(2).unwrap();
  assert_eq!(r.get(fields::ADULTS),
             Some("At least one adult is required when traveling with children or infants"));
  assert_eq!(w.derived().total_travelers, 2);
}

#[test]
fn zero_travelers_is_rejected() {
  let w = trip_wizard();
  let r = w.validate_step(2).unwrap();
  assert_eq!(r.get(fields::ADULTS), Some("At least one traveler is required"));
}

#[test]
fn budget_estimate_uses_tier_midpoint_times_travelers() {
  let mut w = trip_wizard();
  w.set_field(fields::BUDGET, FieldValue::choice("mid"));
  w.set_field(fields::START_DATE, FieldValue::Date(today() + Duration::days(10)));
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(15)));
  w.set_field(fields::ADULTS, FieldValue::Integer(2));

  let d = w.derived();
  assert_eq!(d.trip_duration_days, 5);
  assert_eq!(d.total_travelers, 2);
  assert_eq!(d.estimated_cost, Some(200_000));
}

#[test]
fn budget_estimate_is_undefined_without_inputs() {
  let mut w = trip_wizard();
  w.set_field(fields::ADULTS, FieldValue::Integer(2));
  assert_eq!(w.derived().estimated_cost, None);

  w.set_field(fields::BUDGET, FieldValue::choice("mid"));
  assert_eq!(w.derived().estimated_cost, None, "no dates yet");

  w.set_field(fields::START_DATE, FieldValue::Date(today()));
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(2)));
  w.set_field(fields::BUDGET, FieldValue::choice("platinum"));
  assert_eq!(w.derived().estimated_cost, None, "unknown tier");
}

#[test]
fn derived_values_follow_edits() {
  let mut w = trip_wizard();
  w.set_field(fields::ADULTS, FieldValue::Integer(1));
  assert_eq!(w.derived().total_travelers, 1);
  w.set_field(fields::INFANTS, FieldValue::Integer(1));
  assert_eq!(w.derived().total_travelers, 2);
}

#[test]
fn blocked_advance_never_moves() {
  let mut w = trip_wizard();
  for _ in 0..3 {
    assert!(matches!(w.advance().unwrap(), Navigation::Blocked(_)));
    assert_eq!(w.index(), 0);
  }
  assert_eq!(w.error(fields::DESTINATION), Some("Please select a destination"));
}

#[test]
fn preferences_require_a_non_empty_selection() {
  let steps = vec![StepDefinition::new("prefs", "Interests", StepKind::Preferences),
                   StepDefinition::new("personal", "About you", StepKind::Personal)];
  let mut w = Wizard::initialize(steps, FieldMap::new(), WizardConfig::default()).unwrap();
  w.set_field(fields::INTERESTS, FieldValue::list(Vec::<String>::new()));
  assert_eq!(w.validate_step(0).unwrap().get(fields::INTERESTS),
             Some("Please select at least one interest"));
  w.set_field(fields::INTERESTS, FieldValue::list(["beaches", "food"]));
  assert!(w.validate_step(0).unwrap().is_valid());

  let r = w.validate_step(1).unwrap();
  assert_eq!(r.get(fields::GENDER), Some("Please select your gender"));
  assert_eq!(r.get(fields::DATE_OF_BIRTH), Some("Date of birth is required"));
}

#[test]
fn huge_traveler_counts_saturate_instead_of_overflowing() {
  let mut w = trip_wizard();
  w.set_field(fields::ADULTS, FieldValue::text("99999999999"));
  w.set_field(fields::CHILDREN, FieldValue::Integer(1));
  w.set_field(fields::INFANTS, FieldValue::Integer(i64::MAX));
  assert!(w.validate_step(2).unwrap().is_valid());
  assert_eq!(w.derived().total_travelers, u32::MAX);

  w.set_field(fields::BUDGET, FieldValue::choice("luxury"));
  w.set_field(fields::START_DATE, FieldValue::Date(today()));
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(1)));
  assert_eq!(w.derived().estimated_cost, Some(325_000 * u32::MAX as u64));
}

#[test]
fn trip_of_exactly_the_maximum_span_is_allowed() {
  let mut w = trip_wizard();
  w.set_field(fields::START_DATE, FieldValue::Date(today()));
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(365)));
  assert!(w.validate_step(1).unwrap().is_valid());
}

#[test]
fn end_date_without_start_reports_only_the_start() {
  let mut w = trip_wizard();
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(4)));
  let r = w.validate_step(1).unwrap();
  assert_eq!(r.get(fields::START_DATE), Some("Start date is required"));
  assert!(r.get(fields::END_DATE).is_none());
  assert_eq!(r.len(), 1);
}

#[test]
fn budget_and_style_messages() {
  let w = trip_wizard();
  assert_eq!(w.validate_step(3).unwrap().get(fields::BUDGET), Some("Please select a budget"));
  assert_eq!(w.validate_step(4).unwrap().get(fields::TRAVEL_STYLE), Some("Please select a travel style"));
}

fn account_wizard() -> Wizard {
  let steps = vec![StepDefinition::new("email", "Email", StepKind::Email),
                   StepDefinition::new("password", "Password", StepKind::Password),
                   StepDefinition::new("phone", "Phone", StepKind::Phone),
                   StepDefinition::new("personal", "About you", StepKind::Personal)];
  Wizard::initialize(steps, FieldMap::new(), WizardConfig::default()).unwrap()
}

#[test]
fn empty_email_is_required() {
  let mut w = account_wizard();
  assert_eq!(w.validate_step(0).unwrap().get(fields::EMAIL), Some("Email is required"));
  w.set_field(fields::EMAIL, FieldValue::text("   "));
  assert_eq!(w.validate_step(0).unwrap().get(fields::EMAIL), Some("Email is required"));
}

#[test]
fn matching_passwords_of_minimum_length_pass() {
  let mut w = account_wizard();
  w.set_field(fields::PASSWORD, FieldValue::text("abcdef"));
  w.set_field(fields::CONFIRM_PASSWORD, FieldValue::text("abcdef"));
  assert!(w.validate_step(1).unwrap().is_valid());
}

#[test]
fn phone_is_required() {
  let w = account_wizard();
  assert_eq!(w.validate_step(2).unwrap().get(fields::PHONE), Some("Phone number is required"));
}

#[test]
fn gender_must_be_one_of_the_offered_options() {
  let mut w = account_wizard();
  w.set_field(fields::DATE_OF_BIRTH, FieldValue::text("1990-01-01"));
  w.set_field(fields::GENDER, FieldValue::choice("robot"));
  assert_eq!(w.validate_step(3).unwrap().get(fields::GENDER), Some("Please select your gender"));

  w.set_field(fields::GENDER, FieldValue::choice("Prefer not to say"));
  assert!(w.validate_step(3).unwrap().is_valid());
}
