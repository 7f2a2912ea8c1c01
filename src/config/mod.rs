//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → NotifierConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; with no file the service binds 127.0.0.1:5088
//! - Validation separates syntactic (serde) from semantic checks
//! - The notification line format and sink are not configurable

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LimitsConfig, ListenerConfig, NotifierConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
