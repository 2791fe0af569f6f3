//! Wizard de configuración de perfil: bienvenida, nombre, email,
//! contraseña, teléfono, datos personales e intereses. Al terminar crea la
//! cuenta en el servicio de autenticación.

use crate::collaborators::AuthService;
use crate::context::ContextWriter;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use travel_domain::{DomainError, Gender, UserProfile};
use wizard::{fields, FieldMap, StepDefinition, StepKind, SubmitAction, SubmitOutcome};

/// Opciones de intereses que ofrece el paso de preferencias.
pub const INTEREST_OPTIONS: &[&str] =
  &["beaches", "mountains", "heritage", "food", "wildlife", "nightlife", "wellness", "adventure sports"];

pub fn profile_setup_steps() -> Vec<StepDefinition> {
  vec![StepDefinition::new("welcome", "Welcome to Sanchari", StepKind::Intro).with_subtitle("Let's set up your traveler profile"),
       StepDefinition::new("name", "What should we call you?", StepKind::Name),
       StepDefinition::new("email", "Your email", StepKind::Email),
       StepDefinition::new("password", "Create a password", StepKind::Password),
       StepDefinition::new("phone", "Phone number", StepKind::Phone).with_subtitle("For booking updates"),
       StepDefinition::new("personal", "About you", StepKind::Personal),
       StepDefinition::new("preferences", "What do you love?", StepKind::Preferences),]
}

fn text(values: &FieldMap, name: &str) -> String {
  values.get(name).and_then(|v| v.as_str()).unwrap_or("").trim().to_string()
}

/// Convierte el registro acumulado en un `UserProfile`.
pub fn profile_from_values(values: &FieldMap) -> Result<UserProfile, DomainError> {
  let gender_raw = text(values, fields::GENDER);
  let gender = if gender_raw.is_empty() { None } else { Some(gender_raw.parse::<Gender>()?) };
  let date_of_birth = values.get(fields::DATE_OF_BIRTH).and_then(|v| v.as_date());
  let interests = values.get(fields::INTERESTS)
                        .and_then(|v| v.as_list())
                        .map(|items| items.to_vec())
                        .unwrap_or_default();
  UserProfile::new(&text(values, fields::FIRST_NAME),
                   &text(values, fields::LAST_NAME),
                   &text(values, fields::EMAIL),
                   &text(values, fields::PHONE),
                   gender,
                   date_of_birth,
                   interests)
}

/// Acción terminal del registro: crea la cuenta y, si hay escritor de
/// contexto, deja la sesión iniciada.
pub struct ProfileSubmit<A>
  where A: AuthService + ?Sized
{
  auth: Arc<A>,
  writer: Option<ContextWriter>,
}

impl<A> ProfileSubmit<A> where A: AuthService + ?Sized
{
  pub fn new(auth: Arc<A>) -> Self {
    Self { auth, writer: None }
  }

  pub fn with_writer(mut self, writer: ContextWriter) -> Self {
    self.writer = Some(writer);
    self
  }

  /// Escritor del contexto en poder de la acción, si se entregó uno.
  pub fn writer(&self) -> Option<&ContextWriter> {
    self.writer.as_ref()
  }
}

#[async_trait]
impl<A> SubmitAction for ProfileSubmit<A> where A: AuthService + ?Sized
{
  async fn submit(&self, values: &FieldMap) -> SubmitOutcome {
    let profile = match profile_from_values(values) {
      Ok(p) => p,
      Err(e) => return SubmitOutcome::failure(e.to_string()),
    };
    let password = values.get(fields::PASSWORD).and_then(|v| v.as_str()).unwrap_or("");
    let result = self.auth.sign_up(profile.email(), password, &profile).await;
    if !result.success {
      return SubmitOutcome::failure(result.error.unwrap_or_else(|| "Sign up failed".to_string()));
    }
    if let (Some(writer), Some(session)) = (&self.writer, result.user) {
      info!("perfil creado para {}", session.email);
      writer.sign_in(session);
    }
    SubmitOutcome::Success
  }
}
