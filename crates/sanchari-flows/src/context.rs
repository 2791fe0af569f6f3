//! Contexto de aplicación compartido por las vistas: tema y sesión.
//!
//! Muchos lectores, un único escritor. El escritor (`ContextWriter`) se
//! entrega una sola vez, al proveedor de autenticación/tema; el resto de
//! componentes sólo recibe `Arc<AppContext>` y lee.
use crate::collaborators::UserSession;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

#[derive(Debug, Default)]
pub struct AppContext {
  theme: RwLock<Theme>,
  session: RwLock<Option<UserSession>>,
  writer_issued: AtomicBool,
}

impl AppContext {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn theme(&self) -> Theme {
    *self.theme.read().unwrap_or_else(|e| e.into_inner())
  }

  pub fn session(&self) -> Option<UserSession> {
    self.session.read().unwrap_or_else(|e| e.into_inner()).clone()
  }

  pub fn is_authenticated(&self) -> bool {
    self.session.read().unwrap_or_else(|e| e.into_inner()).is_some()
  }

  /// Entrega el escritor. Sólo la primera llamada obtiene `Some`.
  pub fn writer(self: &Arc<Self>) -> Option<ContextWriter> {
    if self.writer_issued.swap(true, Ordering::SeqCst) {
      return None;
    }
    Some(ContextWriter { ctx: Arc::clone(self) })
  }
}

/// Único punto de escritura del `AppContext`.
#[derive(Debug)]
pub struct ContextWriter {
  ctx: Arc<AppContext>,
}

impl ContextWriter {
  pub fn set_theme(&self, theme: Theme) {
    *self.ctx.theme.write().unwrap_or_else(|e| e.into_inner()) = theme;
  }

  pub fn toggle_theme(&self) -> Theme {
    let mut guard = self.ctx.theme.write().unwrap_or_else(|e| e.into_inner());
    *guard = match *guard {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    };
    *guard
  }

  pub fn sign_in(&self, session: UserSession) {
    *self.ctx.session.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
  }

  pub fn sign_out(&self) {
    *self.ctx.session.write().unwrap_or_else(|e| e.into_inner()) = None;
  }
}

/// Conjunto cerrado de modales de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "modal", content = "booking_id", rename_all = "snake_case")]
pub enum Modal {
  SignIn,
  SignUp,
  BookingDetails(Uuid),
  CancelBooking(Uuid),
  Settings,
}

/// Modal activo; como mucho uno a la vez.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
  active: Option<Modal>,
}

impl ModalState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Abre `modal`, reemplazando el que estuviera abierto. Devuelve el
  /// anterior.
  pub fn open(&mut self, modal: Modal) -> Option<Modal> {
    self.active.replace(modal)
  }

  pub fn close(&mut self) -> Option<Modal> {
    self.active.take()
  }

  pub fn active(&self) -> Option<&Modal> {
    self.active.as_ref()
  }

  pub fn is_open(&self, modal: &Modal) -> bool {
    self.active.as_ref() == Some(modal)
  }
}
