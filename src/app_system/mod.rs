//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod purchase_system;
pub mod seed;
pub mod terminal;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use purchase_system::*;
pub use seed::*;
pub use terminal::*;
pub use self::tracing::*;
