//! Error handling types.

mod types;

pub use types::{AuditError, InitializationError};
