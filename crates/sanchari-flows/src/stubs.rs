// stubs.rs
//
// Implementaciones en memoria de los colaboradores externos. No son
// durables y se usan para demos, la CLI y pruebas locales.
use crate::collaborators::{AuthProvider, AuthResult, AuthService, BookingsQuery, BookingsResult, Coordinates,
                           GeolocationProvider, LocationResult, UserSession};
use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use travel_domain::{BookingRecord, UserProfile};
use uuid::Uuid;

pub const NETWORK_ERROR: &str = "Network error, please try again";

#[derive(Debug, Clone)]
struct StoredAccount {
  user_id: Uuid,
  password_hash: String,
  display_name: String,
}

/// Servicio de autenticación en memoria. Las contraseñas se guardan como
/// SHA-256 con el email como sal.
#[derive(Debug, Default)]
pub struct InMemoryAuthService {
  accounts: DashMap<String, StoredAccount>,
  profiles: DashMap<Uuid, UserProfile>,
  offline: AtomicBool,
}

impl InMemoryAuthService {
  pub fn new() -> Self {
    Self::default()
  }

  /// Simula pérdida de conectividad: todas las operaciones fallan con
  /// `NETWORK_ERROR` mientras esté activo.
  pub fn set_offline(&self, offline: bool) {
    self.offline.store(offline, Ordering::SeqCst);
  }

  pub fn account_count(&self) -> usize {
    self.accounts.len()
  }

  /// Perfil guardado al registrarse, si existe.
  pub fn profile(&self, user_id: &Uuid) -> Option<UserProfile> {
    self.profiles.get(user_id).map(|p| p.value().clone())
  }

  fn hash(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update([0u8]);
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
  }

  fn is_offline(&self) -> bool {
    self.offline.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
  async fn sign_in(&self, email: &str, password: &str) -> AuthResult {
    if self.is_offline() {
      return AuthResult::failed(NETWORK_ERROR);
    }
    let email = email.trim().to_lowercase();
    match self.accounts.get(&email) {
      Some(acc) if acc.password_hash == Self::hash(&email, password) => {
        AuthResult::ok(UserSession { user_id: acc.user_id,
                                     email: email.clone(),
                                     display_name: acc.display_name.clone(),
                                     provider: AuthProvider::Password })
      }
      _ => AuthResult::failed("Invalid email or password"),
    }
  }

  async fn sign_up(&self, email: &str, password: &str, profile: &UserProfile) -> AuthResult {
    if self.is_offline() {
      return AuthResult::failed(NETWORK_ERROR);
    }
    let email = email.trim().to_lowercase();
    if self.accounts.contains_key(&email) {
      return AuthResult::failed("Email already in use");
    }
    let account = StoredAccount { user_id: profile.id(),
                                  password_hash: Self::hash(&email, password),
                                  display_name: profile.full_name() };
    self.accounts.insert(email.clone(), account.clone());
    self.profiles.insert(profile.id(), profile.clone());
    debug!("[stub] cuenta creada para {}", email);
    AuthResult::ok(UserSession { user_id: account.user_id,
                                 email,
                                 display_name: account.display_name,
                                 provider: AuthProvider::Password })
  }

  async fn sign_in_with_provider(&self, provider: AuthProvider) -> AuthResult {
    if self.is_offline() {
      return AuthResult::failed(NETWORK_ERROR);
    }
    if provider == AuthProvider::Password {
      return AuthResult::failed("Password sign-in requires email and password");
    }
    AuthResult::ok(UserSession { user_id: Uuid::new_v4(),
                                 email: format!("traveler@{}.example", provider),
                                 display_name: format!("{} traveler", provider),
                                 provider })
  }
}

/// Geolocalización que siempre devuelve la misma respuesta.
#[derive(Debug, Clone)]
pub struct FixedGeolocation {
  result: LocationResult,
}

impl FixedGeolocation {
  pub fn at(latitude: f64, longitude: f64) -> Self {
    Self { result: LocationResult { coordinates: Some(Coordinates { latitude, longitude }),
                                    error: None } }
  }

  pub fn denied(message: impl Into<String>) -> Self {
    Self { result: LocationResult { coordinates: None,
                                    error: Some(message.into()) } }
  }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
  async fn request_location(&self) -> LocationResult {
    self.result.clone()
  }
}

/// Consulta de reservas en memoria.
#[derive(Debug, Default)]
pub struct InMemoryBookings {
  records: Mutex<Vec<BookingRecord>>,
  failure: Mutex<Option<String>>,
}

impl InMemoryBookings {
  pub fn new(records: Vec<BookingRecord>) -> Self {
    Self { records: Mutex::new(records),
           failure: Mutex::new(None) }
  }

  /// Hace que las consultas siguientes fallen con `message` (o dejen de
  /// fallar con `None`).
  pub fn set_failure(&self, message: Option<String>) {
    *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = message;
  }

  pub fn push(&self, record: BookingRecord) {
    self.records.lock().unwrap_or_else(|e| e.into_inner()).push(record);
  }
}

#[async_trait]
impl BookingsQuery for InMemoryBookings {
  async fn fetch_bookings(&self, filter_key: Option<&str>) -> BookingsResult {
    if let Some(msg) = self.failure.lock().unwrap_or_else(|e| e.into_inner()).clone() {
      return BookingsResult { records: vec![],
                              loading: false,
                              error: Some(msg) };
    }
    let key = filter_key.map(|k| k.trim().to_lowercase());
    let records = self.records
                      .lock()
                      .unwrap_or_else(|e| e.into_inner())
                      .iter()
                      .filter(|r| match key.as_deref() {
                        None | Some("all") | Some("") => true,
                        Some(k) => r.kind.filter_key() == k,
                      })
                      .cloned()
                      .collect();
    BookingsResult { records,
                     loading: false,
                     error: None }
  }
}
