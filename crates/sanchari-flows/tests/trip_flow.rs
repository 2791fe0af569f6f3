use chrono::{Duration, NaiveDate};
use sanchari_flows::flows::{plan_from_values, TripPlanSubmit};
use sanchari_flows::{FlowsError, WizardFactory, WizardType};
use std::sync::Arc;
use travel_domain::{InMemoryTripPlanRepository, TravelStyle, TripPlanRepository};
use wizard::stubs::FixedClock;
use wizard::{fields, Completion, FieldValue, Navigation, StepOutcome, Wizard, WizardConfig};

fn today() -> NaiveDate {
  NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn trip_wizard() -> Wizard {
  WizardFactory::create(WizardType::TripPlanner, WizardConfig::default()).unwrap()
                                                                          .with_clock(Arc::new(FixedClock(today())))
}

fn fill_trip(w: &mut Wizard) {
  w.advance().unwrap();
  w.set_field(fields::DESTINATION, FieldValue::choice("Kerala"));
  w.advance().unwrap();
  w.set_field(fields::START_DATE, FieldValue::Date(today() + Duration::days(20)));
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(25)));
  w.advance().unwrap();
  w.set_field(fields::ADULTS, FieldValue::Integer(2));
  w.advance().unwrap();
  w.set_field(fields::BUDGET, FieldValue::choice("mid"));
  w.advance().unwrap();
  w.set_field(fields::TRAVEL_STYLE, FieldValue::choice("relaxation"));
  w.advance().unwrap();
}

#[tokio::test]
async fn trip_planner_saves_plan_with_estimate() -> Result<(), FlowsError> {
  let repo = Arc::new(InMemoryTripPlanRepository::new());
  let action = TripPlanSubmit::new(repo.clone(), WizardConfig::default());
  let mut w = trip_wizard();
  fill_trip(&mut w);
  assert!(w.is_last_step());
  assert!(w.state().errors.is_empty());

  let derived = w.derived();
  assert_eq!(derived.trip_duration_days, 5);
  assert_eq!(derived.estimated_cost, Some(200_000));

  let out = w.advance_and_submit(&action).await?;
  assert_eq!(out, StepOutcome::Submitted(Completion::Completed));

  let id = action.last_saved().expect("saved id");
  let plan = repo.get_plan(&id)?.expect("plan");
  assert_eq!(plan.destination(), "Kerala");
  assert_eq!(plan.nights(), 5);
  assert_eq!(plan.travelers(), 2);
  assert_eq!(plan.style(), TravelStyle::Relaxation);
  assert_eq!(plan.estimated_cost(), Some(200_000));
  Ok(())
}

#[test]
fn infants_only_party_is_blocked_on_travelers_step() {
  let mut w = trip_wizard();
  w.advance().unwrap();
  w.set_field(fields::DESTINATION, FieldValue::choice("Ooty"));
  w.advance().unwrap();
  w.set_field(fields::START_DATE, FieldValue::Date(today() + Duration::days(1)));
  w.set_field(fields::END_DATE, FieldValue::Date(today() + Duration::days(3)));
  w.advance().unwrap();
  w.set_field(fields::INFANTS, FieldValue::Integer(1));

  match w.advance().unwrap() {
    Navigation::Blocked(r) => assert_eq!(r.get(fields::ADULTS),
                                         Some("At least one adult is required when traveling with children or infants")),
    other => panic!("expected Blocked, got {:?}", other),
  }
  assert_eq!(w.derived().total_travelers, 1);
}

#[test]
fn unknown_style_fails_submission_not_validation() {
  let repo = Arc::new(InMemoryTripPlanRepository::new());
  let action = TripPlanSubmit::new(repo.clone(), WizardConfig::default());
  let mut w = trip_wizard();
  fill_trip(&mut w);
  let last = w.index();
  // saltar atrás al paso de estilo y escribir un valor fuera del catálogo
  w.jump_to(5).unwrap();
  w.set_field(fields::TRAVEL_STYLE, FieldValue::choice("space tourism"));
  w.jump_to(6).unwrap();
  assert_eq!(w.index(), last);

  let out = tokio_test::block_on(w.advance_and_submit(&action)).unwrap();
  match out {
    StepOutcome::Submitted(Completion::Failed { message, resumed_at }) => {
      assert!(message.contains("space tourism"), "{}", message);
      // sin paso de contraseña el usuario se queda donde estaba
      assert_eq!(resumed_at, last);
    }
    other => panic!("expected failure, got {:?}", other),
  }
  assert!(repo.list_plans().unwrap().is_empty());
}

#[test]
fn plan_from_values_requires_dates() {
  let w = trip_wizard();
  let r = plan_from_values(w.values(), w.config());
  assert!(r.is_err());
}
