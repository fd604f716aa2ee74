//! State Management
//!
//! Session context and dashboard workflow state.

pub mod session;
pub mod workflow;

pub use session::{provide_session, Role, Session, SessionUser};
pub use workflow::{EventCardState, RegistrationDraft};
