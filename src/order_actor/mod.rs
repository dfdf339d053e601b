//! Order-specific store logic: the entity binding and the status action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
