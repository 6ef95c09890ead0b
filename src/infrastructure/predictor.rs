//! Placeholder Affinity Predictor
//!
//! Stands in for docking + scoring until those stages exist. Reports the
//! `placeholder` status and never produces an affinity or a pose.

use anyhow::Result;

use crate::domain::ports::{AffinityPredictor, Prediction, PredictionOptions, ValidatedInputs};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderPredictor;

impl PlaceholderPredictor {
    pub const STATUS: &'static str = "placeholder";
}

impl AffinityPredictor for PlaceholderPredictor {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn predict(&self, inputs: &ValidatedInputs, options: PredictionOptions) -> Result<Prediction> {
        tracing::debug!(
            protein = %inputs.protein.value,
            ligand = %inputs.ligand.value,
            save_pose = options.save_pose,
            "docking and scoring not implemented, returning placeholder"
        );

        Ok(Prediction {
            status: Self::STATUS.to_string(),
            affinity: None,
            docking_score: None,
            pose_file: None,
        })
    }
}
