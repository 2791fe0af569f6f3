// error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
  #[error("Error de validación: {0}")]
  ValidationError(String),
  #[error("No encontrado: {0}")]
  NotFound(String),
  #[error("Error de almacenamiento: {0}")]
  StorageError(String),
}
