//! sanchari-flows: wizards concretos de Sanchari
//!
//! Crate que cablea el motor `wizard` con el dominio de viajes: define el
//! wizard de configuración de perfil y el planificador de viajes, sus
//! acciones de envío, los contratos de los colaboradores externos
//! (autenticación, geolocalización, reservas) con implementaciones en
//! memoria, la vista de reservas y el contexto de aplicación.

pub mod bookings;
pub mod collaborators;
pub mod context;
pub mod errors;
pub mod factory;
pub mod flows;
pub mod stubs;
pub mod wizard_type;

pub use bookings::{load_timeline, BookingFilter, BookingsView, Timeline, TimelineEntry, TimelinePhase};
pub use collaborators::{AuthProvider, AuthResult, AuthService, BookingsQuery, BookingsResult, GeolocationProvider,
                        UserSession};
pub use context::{AppContext, ContextWriter, Modal, ModalState, Theme};
pub use errors::FlowsError;
pub use factory::WizardFactory;
pub use wizard_type::WizardType;
