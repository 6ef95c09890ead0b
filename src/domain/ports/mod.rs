//! Domain Ports
//!
//! Interfaces implemented outside the domain layer.

mod affinity_predictor;

pub use affinity_predictor::{AffinityPredictor, Prediction, PredictionOptions, ValidatedInputs};
