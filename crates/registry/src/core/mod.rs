//! Shared registry infrastructure.

pub mod collision;
pub mod error;
pub mod options;

pub use collision::DuplicatePolicy;
pub use error::InvokeError;
pub use options::RegistryOptions;
