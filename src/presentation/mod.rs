//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Turning parsed arguments into application requests
//!
//! Rendering lives in the binary's `ui` module.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands, InfoArgs, PredictArgs};
