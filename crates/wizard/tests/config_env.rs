use wizard::{WizardConfig, WizardError, ENV_BUDGET_TIERS, ENV_MAX_TRIP_DAYS, ENV_MIN_PASSWORD_LEN};

// Un único test: las variables de entorno son globales al proceso.
#[test]
fn from_env_overrides_and_rejects_garbage() {
  std::env::set_var(ENV_MIN_PASSWORD_LEN, "8");
  std::env::set_var(ENV_MAX_TRIP_DAYS, "30");
  std::env::set_var(ENV_BUDGET_TIERS, r#"[{"key":"mid","label":"Mid","min":100,"max":300}]"#);
  let cfg = WizardConfig::from_env().expect("config");
  assert_eq!(cfg.min_password_len, 8);
  assert_eq!(cfg.max_trip_days, 30);
  assert_eq!(cfg.tier("mid").map(|t| t.midpoint()), Some(200));

  std::env::set_var(ENV_MAX_TRIP_DAYS, "a year");
  assert!(matches!(WizardConfig::from_env(), Err(WizardError::Config(_))));

  std::env::remove_var(ENV_MIN_PASSWORD_LEN);
  std::env::remove_var(ENV_MAX_TRIP_DAYS);
  std::env::remove_var(ENV_BUDGET_TIERS);
  assert_eq!(WizardConfig::from_env().unwrap(), WizardConfig::default());
}
