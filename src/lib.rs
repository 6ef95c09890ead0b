//! Bindigo - protein-ligand binding affinity prediction
//!
//! Bindigo classifies and validates a protein (PDB ID or structure file), a
//! ligand (SMILES string or structure file), a docking search box and an
//! output path, then hands them to an affinity predictor and writes a CSV
//! report. Docking and scoring are not implemented yet; the bundled
//! `PlaceholderPredictor` reports a `placeholder` status.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod validation;
pub mod version;

// Re-exports for convenience
pub use application::{run_prediction, Pipeline, PredictionRequest, PredictionResult};
pub use config::Config;
pub use domain::ports::{AffinityPredictor, Prediction, PredictionOptions, ValidatedInputs};
pub use domain::value_objects::{
    BindingSite, LigandInput, LigandKind, OutputTarget, ProteinInput, ProteinKind,
};
pub use error::{BindigoError, BindigoResult};
pub use validation::{
    classify_ligand, classify_protein, is_pdb_id, is_smiles, parse_center, validate_binding_site,
    validate_output_path,
};
pub use version::VERSION;
