//! Configuration module for Bindigo
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BINDIGO_*)
//! 3. Project config (./bindigo.toml)
//! 4. User config (~/.bindigo/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! A `Config` is built once at startup and only ever replaced, never mutated
//! through shared references.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, PROJECT_CONFIG_FILE};
pub use types::{
    BindingSiteConfig, ColorMode, ConfidenceConfig, Config, DatabaseConfig, DockingConfig,
    LigandPrepConfig, ModelConfig, OutputConfig, PerformanceConfig, ProteinPrepConfig,
};
