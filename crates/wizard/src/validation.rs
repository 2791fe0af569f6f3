// Archivo: validation.rs
// Propósito: tabla de reglas de validación por `StepKind`.
//
// Todas las funciones son puras: dependen sólo de los valores, la
// configuración y la fecha "hoy" que inyecta el llamador.
use crate::config::WizardConfig;
use crate::derived;
use crate::domain::{fields, normalize_option, FieldMap, StepKind, ValidationResult, GENDER_OPTIONS};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// Valida los valores para un tipo de paso. Devuelve un resultado vacío si
/// el paso es válido.
pub fn validate(kind: StepKind, values: &FieldMap, config: &WizardConfig, today: NaiveDate) -> ValidationResult {
    let mut out = ValidationResult::new();
    match kind {
        StepKind::Intro | StepKind::Review => {}
        StepKind::Name => {
            require_text(values, fields::FIRST_NAME, "First name is required", &mut out);
            require_text(values, fields::LAST_NAME, "Last name is required", &mut out);
        }
        StepKind::Email => validate_email(values, &mut out),
        StepKind::Password => validate_password(values, config, &mut out),
        StepKind::Phone => require_text(values, fields::PHONE, "Phone number is required", &mut out),
        StepKind::Personal => {
            let gender = normalize_option(text(values, fields::GENDER));
            if !GENDER_OPTIONS.contains(&gender.as_str()) {
                out.add(fields::GENDER, "Please select your gender");
            }
            require_present(values, fields::DATE_OF_BIRTH, "Date of birth is required", &mut out);
        }
        StepKind::Preferences => {
            let selected = values.get(fields::INTERESTS)
                                 .and_then(|v| v.as_list())
                                 .map(|items| items.iter().any(|i| !i.trim().is_empty()))
                                 .unwrap_or(false);
            if !selected {
                out.add(fields::INTERESTS, "Please select at least one interest");
            }
        }
        StepKind::Destination => require_text(values, fields::DESTINATION, "Please select a destination", &mut out),
        StepKind::Dates => validate_dates(values, config, today, &mut out),
        StepKind::Travelers => validate_travelers(values, &mut out),
        StepKind::Budget => require_text(values, fields::BUDGET, "Please select a budget", &mut out),
        StepKind::Style => require_text(values, fields::TRAVEL_STYLE, "Please select a travel style", &mut out),
    }
    out
}

fn text<'a>(values: &'a FieldMap, name: &str) -> &'a str {
    values.get(name).and_then(|v| v.as_str()).unwrap_or("")
}

fn require_text(values: &FieldMap, name: &str, message: &str, out: &mut ValidationResult) {
    if text(values, name).trim().is_empty() {
        out.add(name, message);
    }
}

fn require_present(values: &FieldMap, name: &str, message: &str, out: &mut ValidationResult) {
    match values.get(name) {
        Some(v) if !v.is_blank() => {}
        _ => out.add(name, message),
    }
}

fn validate_email(values: &FieldMap, out: &mut ValidationResult) {
    let email = text(values, fields::EMAIL).trim();
    if email.is_empty() {
        out.add(fields::EMAIL, "Email is required");
    } else if !EMAIL_SHAPE.is_match(email) {
        out.add(fields::EMAIL, "Please enter a valid email address");
    }
}

fn validate_password(values: &FieldMap, config: &WizardConfig, out: &mut ValidationResult) {
    let password = text(values, fields::PASSWORD);
    let confirm = text(values, fields::CONFIRM_PASSWORD);
    if password.chars().count() < config.min_password_len {
        out.add(fields::PASSWORD,
                format!("Password must be at least {} characters", config.min_password_len));
    }
    if password != confirm {
        out.add(fields::CONFIRM_PASSWORD, "Passwords do not match");
    }
}

fn validate_dates(values: &FieldMap, config: &WizardConfig, today: NaiveDate, out: &mut ValidationResult) {
    let start = values.get(fields::START_DATE).and_then(|v| v.as_date());
    let end = values.get(fields::END_DATE).and_then(|v| v.as_date());

    match start {
        None => out.add(fields::START_DATE, "Start date is required"),
        Some(s) if s < today => out.add(fields::START_DATE, "Start date cannot be in the past"),
        Some(_) => {}
    }
    match (start, end) {
        (_, None) => out.add(fields::END_DATE, "End date is required"),
        (Some(s), Some(e)) if e <= s => out.add(fields::END_DATE, "End date must be after start date"),
        (Some(s), Some(e)) if (e - s).num_days() > config.max_trip_days => {
            out.add(fields::END_DATE,
                    format!("Trip cannot be longer than {} days", config.max_trip_days))
        }
        _ => {}
    }
}

fn validate_travelers(values: &FieldMap, out: &mut ValidationResult) {
    let counts = derived::traveler_counts(values);
    if counts.total() < 1 {
        out.add(fields::ADULTS, "At least one traveler is required");
    } else if counts.children + counts.infants > 0 && counts.adults < 1 {
        out.add(fields::ADULTS,
                "At least one adult is required when traveling with children or infants");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn map(pairs: &[(&str, FieldValue)]) -> FieldMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn email_shape() {
        let cfg = WizardConfig::default();
        for bad in ["plain", "a@b", "a b@c.com", "@x.io"] {
            let r = validate(StepKind::Email, &map(&[(fields::EMAIL, FieldValue::text(bad))]), &cfg, today());
            assert_eq!(r.get(fields::EMAIL), Some("Please enter a valid email address"), "{}", bad);
        }
        let ok = validate(StepKind::Email,
                          &map(&[(fields::EMAIL, FieldValue::text("asha@sanchari.in"))]),
                          &cfg,
                          today());
        assert!(ok.is_valid());
    }

    #[test]
    fn password_rules_report_both_fields() {
        let cfg = WizardConfig::default();
        let r = validate(StepKind::Password,
                         &map(&[(fields::PASSWORD, FieldValue::text("abc")),
                                (fields::CONFIRM_PASSWORD, FieldValue::text("abd"))]),
                         &cfg,
                         today());
        assert_eq!(r.get(fields::PASSWORD), Some("Password must be at least 6 characters"));
        assert_eq!(r.get(fields::CONFIRM_PASSWORD), Some("Passwords do not match"));
    }

    #[test]
    fn trip_span_limit() {
        let cfg = WizardConfig::default();
        let start = today();
        let end = start + chrono::Duration::days(366);
        let r = validate(StepKind::Dates,
                         &map(&[(fields::START_DATE, FieldValue::Date(start)), (fields::END_DATE, FieldValue::Date(end))]),
                         &cfg,
                         today());
        assert_eq!(r.get(fields::END_DATE), Some("Trip cannot be longer than 365 days"));
    }
}
