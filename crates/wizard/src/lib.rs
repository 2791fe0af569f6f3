//! Crate `wizard`: motor de formularios multipaso
//!
//! Este crate define el modelo de pasos (`StepDefinition`, `StepKind`), el
//! estado acumulado (`WizardState`), la tabla de validación por tipo de
//! paso, los valores derivados (duración, viajeros, costo estimado) y el
//! motor `Wizard` que gobierna la navegación y el envío terminal.
//!
//! Diseño resumido:
//! - Validación diferida: editar un campo nunca valida; sólo avanzar lo
//!   hace, y los errores se devuelven como datos (`ValidationResult`).
//! - Derivados puros: se recalculan en cada lectura, nunca se guardan.
//! - Envío en dos fases: `advance` entrega un `SubmissionTicket` y
//!   `complete_submission` aplica el desenlace; mientras tanto la
//!   navegación queda bloqueada.
//! - Sólo las violaciones de contrato producen `Err`.
//!
//! Ejemplo rápido:
//! ```rust
//! use wizard::{FieldMap, StepDefinition, StepKind, Wizard, WizardConfig};
//! let steps = vec![StepDefinition::new("welcome", "Welcome", StepKind::Intro),
//!                  StepDefinition::new("name", "Your name", StepKind::Name)];
//! let mut w = Wizard::initialize(steps, FieldMap::new(), WizardConfig::default()).unwrap();
//! w.advance().unwrap();
//! assert_eq!(w.index(), 1);
//! ```
pub mod clock;
pub mod config;
pub mod derived;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod progress;
pub mod stubs;
pub mod submit;
pub mod validation;

pub use clock::*;
pub use config::*;
pub use derived::{DerivedValues, TravelerCounts};
pub use domain::*;
pub use engine::*;
pub use errors::*;
pub use progress::*;
pub use submit::*;
