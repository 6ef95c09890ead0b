//! AffinityPredictor port - abstraction over the docking/ML engine
//!
//! The pipeline validates inputs, then hands them to an implementation of this
//! trait. Errors are `anyhow` so engines can surface foreign failures; the
//! pipeline folds anything outside `BindigoError` into a pipeline failure.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::domain::value_objects::{BindingSite, LigandInput, OutputTarget, ProteinInput};

/// The four validated records of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedInputs {
    pub protein: ProteinInput,
    pub ligand: LigandInput,
    pub binding_site: BindingSite,
    pub output: OutputTarget,
}

/// Flags forwarded to the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PredictionOptions {
    pub save_pose: bool,
    pub verbose: bool,
}

/// What an engine reports back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Engine status tag ("placeholder" until docking exists)
    pub status: String,
    /// Predicted binding affinity (pKd), when computed
    pub affinity: Option<f64>,
    /// Best docking score in kcal/mol, when computed
    pub docking_score: Option<f64>,
    /// Docked pose written by the engine, when requested and produced
    pub pose_file: Option<PathBuf>,
}

/// Docking + feature extraction + scoring engine.
pub trait AffinityPredictor {
    /// Short engine name, shown in verbose output
    fn name(&self) -> &str;

    /// Score one validated protein-ligand pair
    fn predict(&self, inputs: &ValidatedInputs, options: PredictionOptions) -> Result<Prediction>;
}
