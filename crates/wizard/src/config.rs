// Archivo: config.rs
// Propósito: configuración del motor (longitud mínima de contraseña,
// duración máxima de viaje y rangos de presupuesto), con carga opcional
// desde variables de entorno / `.env`.
use crate::errors::{Result, WizardError};
use serde::{Deserialize, Serialize};

pub const ENV_MIN_PASSWORD_LEN: &str = "SANCHARI_MIN_PASSWORD_LEN";
pub const ENV_MAX_TRIP_DAYS: &str = "SANCHARI_MAX_TRIP_DAYS";
pub const ENV_BUDGET_TIERS: &str = "SANCHARI_BUDGET_TIERS";

/// Rango numérico de un nivel de presupuesto (por persona).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTier {
    pub key: String,
    pub label: String,
    pub min: u64,
    pub max: u64,
}

impl BudgetTier {
    pub fn new(key: &str, label: &str, min: u64, max: u64) -> Self {
        Self { key: key.to_string(),
               label: label.to_string(),
               min,
               max }
    }

    /// Punto medio del rango, sin desbordar con límites cercanos a `u64::MAX`.
    pub fn midpoint(&self) -> u64 {
        self.min / 2 + self.max / 2 + (self.min % 2 + self.max % 2) / 2
    }
}

/// Configuración del wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    pub min_password_len: usize,
    pub max_trip_days: i64,
    pub budget_tiers: Vec<BudgetTier>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        WizardConfig { min_password_len: 6,
                       max_trip_days: 365,
                       budget_tiers: vec![BudgetTier::new("budget", "Budget", 10_000, 50_000),
                                          BudgetTier::new("mid", "Mid-range", 50_000, 150_000),
                                          BudgetTier::new("luxury", "Luxury", 150_000, 500_000),] }
    }
}

impl WizardConfig {
    /// Construye la configuración desde el entorno. Las variables ausentes
    /// toman el valor por defecto; las presentes pero inválidas producen
    /// `WizardError::Config`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut cfg = WizardConfig::default();
        if let Ok(raw) = std::env::var(ENV_MIN_PASSWORD_LEN) {
            cfg.min_password_len = raw.trim()
                                      .parse()
                                      .map_err(|_| WizardError::Config(format!("{} no es un entero: {}", ENV_MIN_PASSWORD_LEN, raw)))?;
        }
        if let Ok(raw) = std::env::var(ENV_MAX_TRIP_DAYS) {
            cfg.max_trip_days = raw.trim()
                                   .parse()
                                   .map_err(|_| WizardError::Config(format!("{} no es un entero: {}", ENV_MAX_TRIP_DAYS, raw)))?;
        }
        if let Ok(raw) = std::env::var(ENV_BUDGET_TIERS) {
            cfg.budget_tiers = serde_json::from_str(&raw).map_err(|e| {
                                                             WizardError::Config(format!("{} inválido: {}", ENV_BUDGET_TIERS, e))
                                                         })?;
        }
        cfg.check()?;
        Ok(cfg)
    }

    /// Comprueba invariantes simples de la configuración.
    pub fn check(&self) -> Result<()> {
        if self.max_trip_days < 1 {
            return Err(WizardError::Config("max_trip_days debe ser >= 1".into()));
        }
        if let Some(t) = self.budget_tiers.iter().find(|t| t.min > t.max) {
            return Err(WizardError::Config(format!("rango de presupuesto '{}' invertido", t.key)));
        }
        Ok(())
    }

    /// Busca un nivel de presupuesto por clave.
    pub fn tier(&self, key: &str) -> Option<&BudgetTier> {
        self.budget_tiers.iter().find(|t| t.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mid_tier_matches_documented_range() {
        let cfg = WizardConfig::default();
        let mid = cfg.tier("mid").expect("mid tier");
        assert_eq!((mid.min, mid.max), (50_000, 150_000));
        assert_eq!(mid.midpoint(), 100_000);
    }

    #[test]
    fn check_rejects_inverted_tier() {
        let mut cfg = WizardConfig::default();
        cfg.budget_tiers.push(BudgetTier::new("odd", "Odd", 10, 1));
        assert!(matches!(cfg.check(), Err(WizardError::Config(_))));
    }

    #[test]
    fn midpoint_of_huge_tier_does_not_overflow() {
        let tier = BudgetTier::new("max", "Max", u64::MAX - 1, u64::MAX);
        assert_eq!(tier.midpoint(), u64::MAX - 1);
        assert_eq!(BudgetTier::new("odd", "Odd", 3, 4).midpoint(), 3);
        assert_eq!(BudgetTier::new("one", "One", 1, 1).midpoint(), 1);
    }
}
