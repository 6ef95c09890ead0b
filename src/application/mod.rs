//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, ports) and on `validation`
//! - Does NOT classify inputs itself
//! - Hands validated inputs to an `AffinityPredictor`
//!
//! ## Use Cases
//!
//! - `Pipeline` - Validate, predict, and assemble a `PredictionResult`

pub mod pipeline;

pub use pipeline::{
    run_prediction, validate_request, Pipeline, PredictionRequest, PredictionResult,
};
