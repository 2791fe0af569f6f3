use thiserror::Error;

// Errores comunes de los flujos concretos.
//
// Este enum centraliza los errores que pueden ocurrir al construir o
// cablear los wizards: errores del motor (`WizardError`), errores del
// dominio (`DomainError`) y fallos de los colaboradores externos.
#[derive(Error, Debug)]
pub enum FlowsError {
  /// Errores originados por el motor de wizards.
  #[error("Error de wizard: {0}")]
  Wizard(#[from] wizard::WizardError),

  /// Errores originados por operaciones del dominio de viajes.
  #[error("Error de dominio: {0}")]
  Domain(#[from] travel_domain::DomainError),

  /// Fallos de autenticación, geolocalización o consulta de datos.
  #[error("Error de colaborador: {0}")]
  Collaborator(String),

  /// Tipo de wizard que la fábrica no sabe construir.
  #[error("Tipo de wizard desconocido: {0}")]
  UnknownWizard(String),
}
