//! mctl core - shared types for the mctl command-line client.
//!
//! Error taxonomy, configuration file model and the application records
//! exchanged with the management service.

pub mod application;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use application::{Application, ApplicationPage, ApplicationView};
pub use config::CtlConfig;
pub use error::{CtlError, Result};

/// mctl version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
