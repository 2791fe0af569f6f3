//! Contratos de los colaboradores externos: autenticación, geolocalización
//! y consulta de datos de usuario. El motor nunca los llama directamente;
//! sólo las acciones de envío y las vistas los usan.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use travel_domain::{BookingRecord, UserProfile};
use uuid::Uuid;

/// Proveedor de identidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
  Password,
  Google,
  Facebook,
  Apple,
}

impl fmt::Display for AuthProvider {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      AuthProvider::Password => "password",
      AuthProvider::Google => "google",
      AuthProvider::Facebook => "facebook",
      AuthProvider::Apple => "apple",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for AuthProvider {
  type Err = crate::FlowsError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "password" => Ok(AuthProvider::Password),
      "google" => Ok(AuthProvider::Google),
      "facebook" => Ok(AuthProvider::Facebook),
      "apple" => Ok(AuthProvider::Apple),
      other => Err(crate::FlowsError::Collaborator(format!("proveedor desconocido: {}", other))),
    }
  }
}

/// Sesión del usuario autenticado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
  pub user_id: Uuid,
  pub email: String,
  pub display_name: String,
  pub provider: AuthProvider,
}

/// Resultado de una operación de autenticación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
  pub success: bool,
  pub error: Option<String>,
  pub user: Option<UserSession>,
}

impl AuthResult {
  pub fn ok(user: UserSession) -> Self {
    Self { success: true, error: None, user: Some(user) }
  }

  pub fn failed(message: impl Into<String>) -> Self {
    Self { success: false, error: Some(message.into()), user: None }
  }
}

#[async_trait]
pub trait AuthService: Send + Sync {
  async fn sign_in(&self, email: &str, password: &str) -> AuthResult;

  /// Crea la cuenta con los datos del perfil.
  async fn sign_up(&self, email: &str, password: &str, profile: &UserProfile) -> AuthResult;

  async fn sign_in_with_provider(&self, provider: AuthProvider) -> AuthResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
  pub latitude: f64,
  pub longitude: f64,
}

/// Coordenadas o error; nunca ambos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
  pub coordinates: Option<Coordinates>,
  pub error: Option<String>,
}

#[async_trait]
pub trait GeolocationProvider: Send + Sync {
  async fn request_location(&self) -> LocationResult;
}

/// Respuesta de la consulta de reservas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingsResult {
  pub records: Vec<BookingRecord>,
  pub loading: bool,
  pub error: Option<String>,
}

#[async_trait]
pub trait BookingsQuery: Send + Sync {
  /// `filter_key` es `None`, `"all"` o un tipo de reserva (`"flight"`,
  /// `"hotel"`, `"package"`).
  async fn fetch_bookings(&self, filter_key: Option<&str>) -> BookingsResult;
}
