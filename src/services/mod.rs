// Service exports
pub mod catalog;
pub mod sessions;

pub use catalog::{Catalog, CatalogError};
pub use sessions::{PreferenceSession, PreferenceSessions, SessionError};
