use crate::wizard_type::WizardType;
use crate::FlowsError;
use log::debug;
use wizard::{FieldMap, Wizard, WizardConfig};

/// Fábrica para crear o rehidratar wizards por tipo.
///
/// Provee los constructores que usan las vistas y la CLI; las instancias
/// devueltas están en el índice 0 (o en el índice del snapshot) y listas
/// para navegar.
pub struct WizardFactory;

impl WizardFactory {
  /// Crea un wizard nuevo del tipo indicado con valores vacíos.
  pub fn create(wizard_type: WizardType, config: WizardConfig) -> Result<Wizard, FlowsError> {
    Self::create_with_values(wizard_type, FieldMap::new(), config)
  }

  /// Igual que `create` pero con valores iniciales (por ejemplo el email
  /// que el usuario ya escribió en la pantalla de login).
  pub fn create_with_values(wizard_type: WizardType,
                            initial_values: FieldMap,
                            config: WizardConfig)
                            -> Result<Wizard, FlowsError> {
    let steps = wizard_type.steps()
                           .ok_or_else(|| FlowsError::UnknownWizard(wizard_type.to_string()))?;
    debug!("creando wizard {} ({} pasos)", wizard_type, steps.len());
    Ok(Wizard::initialize(steps, initial_values, config)?)
  }

  /// Rehidrata un wizard a partir de un snapshot JSON.
  pub fn restore(wizard_type: WizardType,
                 config: WizardConfig,
                 snapshot: &serde_json::Value)
                 -> Result<Wizard, FlowsError> {
    let steps = wizard_type.steps()
                           .ok_or_else(|| FlowsError::UnknownWizard(wizard_type.to_string()))?;
    Ok(Wizard::restore(steps, config, snapshot)?)
  }

  /// Crea a partir del nombre textual (`"profile_setup"`, `"trip"`...).
  pub fn create_by_name(name: &str, config: WizardConfig) -> Result<Wizard, FlowsError> {
    let wizard_type = name.parse::<WizardType>().unwrap_or_default();
    if wizard_type == WizardType::Unknown {
      return Err(FlowsError::UnknownWizard(name.to_string()));
    }
    Self::create(wizard_type, config)
  }
}
