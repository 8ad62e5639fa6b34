pub mod session_model;
pub mod session_service;
pub mod session_store;

pub use session_model::Session;
pub use session_service::SessionContext;
pub use session_store::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};
