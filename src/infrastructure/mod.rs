//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `predictor` - Affinity predictor implementations (placeholder only)
//! - `report` - CSV/JSON report reading and writing

pub mod predictor;
pub mod report;

// Re-export for convenience
pub use predictor::PlaceholderPredictor;
pub use report::{
    ensure_directory, read_csv, read_json, write_csv, write_json, write_prediction_report,
};
