// Archivo: errors.rs
// Propósito: definir los errores del motor de wizards y el alias Result<T>
// usado por las APIs del crate.
//
// Los errores de validación de campos y los fallos de envío NO pasan por
// aquí: son datos (`ValidationResult`, `submission_error`) que la capa de
// presentación renderiza. Sólo las violaciones de contrato se propagan.
use thiserror::Error;

/// Errores del motor de wizards.
///
/// - `Contract`: uso incorrecto de la API (índice fuera de rango, lista de
///   pasos vacía, completar un envío inexistente).
/// - `Config`: valor de configuración inválido (por ejemplo variable de
///   entorno no numérica).
/// - `Serialization`: error al serializar/deserializar snapshots.
/// - `Other`: cualquier otro error.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Error del llamador, no una condición de usuario.
    #[error("Violación de contrato: {0}")]
    Contract(String),
    /// Configuración inválida.
    #[error("Configuración inválida: {0}")]
    Config(String),
    /// Errores de serialización JSON (snapshots).
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Otro tipo de error.
    #[error("Otro: {0}")]
    Other(String),
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, WizardError>;
