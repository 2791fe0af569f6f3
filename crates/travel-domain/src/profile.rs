// profile.rs
use crate::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
  Female,
  Male,
  NonBinary,
  PreferNotToSay,
}

impl fmt::Display for Gender {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Gender::Female => "female",
      Gender::Male => "male",
      Gender::NonBinary => "non_binary",
      Gender::PreferNotToSay => "prefer_not_to_say",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for Gender {
  type Err = DomainError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
      "female" => Ok(Gender::Female),
      "male" => Ok(Gender::Male),
      "non_binary" => Ok(Gender::NonBinary),
      "prefer_not_to_say" => Ok(Gender::PreferNotToSay),
      other => Err(DomainError::ValidationError(format!("Género desconocido: {}", other))),
    }
  }
}

/// Perfil de usuario creado al completar el wizard de registro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
  id: Uuid,
  first_name: String,
  last_name: String,
  email: String,
  phone: String,
  gender: Option<Gender>,
  date_of_birth: Option<NaiveDate>,
  interests: Vec<String>,
}

impl UserProfile {
  /// Construye un perfil. El email se normaliza a minúsculas y los
  /// intereses repetidos se descartan.
  pub fn new(first_name: &str,
             last_name: &str,
             email: &str,
             phone: &str,
             gender: Option<Gender>,
             date_of_birth: Option<NaiveDate>,
             interests: Vec<String>)
             -> Result<Self, DomainError> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
      return Err(DomainError::ValidationError("El nombre y el apellido son obligatorios".to_string()));
    }
    let email = email.trim().to_lowercase();
    if !email.contains('@') {
      return Err(DomainError::ValidationError(format!("Email inválido: {}", email)));
    }
    let mut seen = std::collections::HashSet::new();
    let interests = interests.into_iter()
                             .map(|i| i.trim().to_string())
                             .filter(|i| !i.is_empty() && seen.insert(i.clone()))
                             .collect();
    Ok(Self { id: Uuid::new_v4(),
              first_name: first_name.trim().to_string(),
              last_name: last_name.trim().to_string(),
              email,
              phone: phone.trim().to_string(),
              gender,
              date_of_birth,
              interests })
  }

  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn first_name(&self) -> &str {
    &self.first_name
  }

  pub fn last_name(&self) -> &str {
    &self.last_name
  }

  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  pub fn phone(&self) -> &str {
    &self.phone
  }

  pub fn gender(&self) -> Option<Gender> {
    self.gender
  }

  pub fn date_of_birth(&self) -> Option<NaiveDate> {
    self.date_of_birth
  }

  pub fn interests(&self) -> &[String] {
    &self.interests
  }
}
