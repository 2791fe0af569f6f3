// Archivo: domain.rs
// Propósito: tipos de dominio del motor de wizards: definición de pasos,
// valores de campos, estado del wizard y resultado de validación.
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nombres de campos conocidos por la tabla de validación.
///
/// Los wizards concretos deben usar estas claves para que las reglas de
/// cada `StepKind` encuentren los valores.
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    pub const PHONE: &str = "phone";
    pub const GENDER: &str = "gender";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const INTERESTS: &str = "interests";
    pub const DESTINATION: &str = "destination";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const ADULTS: &str = "adults";
    pub const CHILDREN: &str = "children";
    pub const INFANTS: &str = "infants";
    pub const BUDGET: &str = "budget";
    pub const TRAVEL_STYLE: &str = "travel_style";
}

/// Valores aceptados para `fields::GENDER`, en forma normalizada.
pub const GENDER_OPTIONS: &[&str] = &["female", "male", "non_binary", "prefer_not_to_say"];

/// Normaliza una opción escrita a mano: minúsculas, guiones y espacios
/// como `_`.
pub fn normalize_option(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Tipo de paso: selecciona el grupo de campos y la regla de validación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Paso de bienvenida sin campos; siempre válido.
    Intro,
    Name,
    Email,
    Password,
    Phone,
    /// Género y fecha de nacimiento.
    Personal,
    /// Intereses (al menos uno).
    Preferences,
    Destination,
    Dates,
    Travelers,
    Budget,
    Style,
    /// Resumen final sin campos; siempre válido.
    Review,
}

impl StepKind {
    /// Campos que este tipo de paso captura.
    pub fn field_names(&self) -> &'static [&'static str] {
        use fields::*;
        match self {
            StepKind::Intro | StepKind::Review => &[],
            StepKind::Name => &[FIRST_NAME, LAST_NAME],
            StepKind::Email => &[EMAIL],
            StepKind::Password => &[PASSWORD, CONFIRM_PASSWORD],
            StepKind::Phone => &[PHONE],
            StepKind::Personal => &[GENDER, DATE_OF_BIRTH],
            StepKind::Preferences => &[INTERESTS],
            StepKind::Destination => &[DESTINATION],
            StepKind::Dates => &[START_DATE, END_DATE],
            StepKind::Travelers => &[ADULTS, CHILDREN, INFANTS],
            StepKind::Budget => &[BUDGET],
            StepKind::Style => &[TRAVEL_STYLE],
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StepKind::Intro => "intro",
            StepKind::Name => "name",
            StepKind::Email => "email",
            StepKind::Password => "password",
            StepKind::Phone => "phone",
            StepKind::Personal => "personal",
            StepKind::Preferences => "preferences",
            StepKind::Destination => "destination",
            StepKind::Dates => "dates",
            StepKind::Travelers => "travelers",
            StepKind::Budget => "budget",
            StepKind::Style => "style",
            StepKind::Review => "review",
        };
        write!(f, "{}", s)
    }
}

/// Definición de un paso. El orden de la secuencia se fija al construir el
/// wizard y no cambia después.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub kind: StepKind,
    pub required: bool,
}

impl StepDefinition {
    /// Crea un paso requerido con el título dado.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: StepKind) -> Self {
        Self { id: id.into(),
               title: title.into(),
               subtitle: None,
               kind,
               required: true }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// `true` si el paso no captura campos (bienvenida o resumen).
    pub fn is_informational(&self) -> bool {
        self.kind.field_names().is_empty()
    }
}

/// Valor de un campo del formulario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// Selección de un conjunto cerrado (género, nivel de presupuesto...).
    Choice(String),
    List(Vec<String>),
    Date(NaiveDate),
    Record(IndexMap<String, FieldValue>),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn choice(s: impl Into<String>) -> Self {
        FieldValue::Choice(s.into())
    }

    pub fn list<I, S>(items: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Texto de `Text` o `Choice`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Entero; acepta también texto numérico (entrada de consola).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Fecha; acepta también texto `YYYY-MM-DD`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Un valor "vacío" es texto en blanco, lista vacía o registro vacío.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|i| i.trim().is_empty()),
            FieldValue::Record(map) => map.is_empty(),
            FieldValue::Integer(_) | FieldValue::Date(_) => false,
        }
    }
}

/// Mapa ordenado nombre de campo -> valor.
pub type FieldMap = IndexMap<String, FieldValue>;

/// Resultado de validar un paso: campo -> mensaje. Vacío = válido.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: IndexMap<String, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un error; si el campo ya tiene uno se conserva el primero.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.errors.iter()
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.errors
    }
}

impl IntoIterator for ValidationResult {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Estado mutable de un wizard. Pertenece en exclusiva a la instancia de
/// `Wizard`; los valores derivados nunca se guardan aquí.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// Índice del paso actual, `0 <= index < steps.len()`.
    pub index: usize,
    pub values: FieldMap,
    /// Sólo campos que fallaron en el último intento de avanzar.
    pub errors: IndexMap<String, String>,
    pub submitting: bool,
    pub submission_error: Option<String>,
    pub completed: bool,
}

impl WizardState {
    /// Estado inicial en el índice 0 con los valores dados.
    pub fn new(values: FieldMap) -> Self {
        Self { values, ..Default::default() }
    }
}
