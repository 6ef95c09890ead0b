//! Prediction pipeline
//!
//! ## Flow
//!
//! 1. Validate protein, ligand, binding site, output (first failure wins)
//! 2. Hand the validated records to the affinity predictor
//! 3. Assemble a `PredictionResult` with timing
//!
//! Only the placeholder predictor exists today, so step 2 produces no affinity
//! and no pose.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::config::Config;
use crate::domain::ports::{AffinityPredictor, Prediction, PredictionOptions, ValidatedInputs};
use crate::domain::value_objects::{BindingSite, LigandKind, ProteinKind, DEFAULT_BOX_SIZE};
use crate::error::{BindigoError, BindigoResult};
use crate::infrastructure::PlaceholderPredictor;
use crate::validation::{classify_ligand, classify_protein, validate_output_path};

/// Raw user input for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub protein: String,
    pub ligand: String,
    pub output: String,
    pub center: Option<Vec<f64>>,
    pub box_size: f64,
    pub save_pose: bool,
    pub verbose: bool,
}

impl PredictionRequest {
    pub fn new(
        protein: impl Into<String>,
        ligand: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            protein: protein.into(),
            ligand: ligand.into(),
            output: output.into(),
            center: None,
            box_size: DEFAULT_BOX_SIZE,
            save_pose: true,
            verbose: false,
        }
    }

    pub fn with_center(mut self, center: Vec<f64>) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_box_size(mut self, size: f64) -> Self {
        self.box_size = size;
        self
    }

    pub fn with_save_pose(mut self, save_pose: bool) -> Self {
        self.save_pose = save_pose;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Outcome of one pipeline run. Field names double as CSV headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub protein: String,
    pub ligand: String,
    pub protein_type: ProteinKind,
    pub ligand_type: LigandKind,
    pub output: PathBuf,
    pub center: Option<String>,
    pub box_size: f64,
    pub affinity: Option<f64>,
    pub docking_score: Option<f64>,
    /// Seconds
    pub execution_time: f64,
    pub status: String,
    pub pose_file: Option<PathBuf>,
}

impl PredictionResult {
    fn assemble(inputs: &ValidatedInputs, prediction: Prediction, execution_time: f64) -> Self {
        Self {
            protein: inputs.protein.value.clone(),
            ligand: inputs.ligand.value.clone(),
            protein_type: inputs.protein.kind,
            ligand_type: inputs.ligand.kind,
            output: inputs.output.path.clone(),
            center: inputs
                .binding_site
                .center
                .map(|[x, y, z]| format!("{} {} {}", x, y, z)),
            box_size: inputs.binding_site.size,
            affinity: prediction.affinity,
            docking_score: prediction.docking_score,
            execution_time,
            status: prediction.status,
            pose_file: prediction.pose_file,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.status == PlaceholderPredictor::STATUS
    }
}

/// Run every validator over `request`, in order, stopping at the first failure.
pub fn validate_request(request: &PredictionRequest) -> BindigoResult<ValidatedInputs> {
    let protein = classify_protein(&request.protein)?;
    let ligand = classify_ligand(&request.ligand)?;
    let binding_site = BindingSite::new(request.center.as_deref(), request.box_size)?;
    let output = validate_output_path(&request.output)?;

    Ok(ValidatedInputs {
        protein,
        ligand,
        binding_site,
        output,
    })
}

/// Validation followed by prediction.
pub struct Pipeline<P: AffinityPredictor = PlaceholderPredictor> {
    predictor: P,
    config: Config,
}

impl Pipeline<PlaceholderPredictor> {
    pub fn placeholder(config: Config) -> Self {
        Self::new(PlaceholderPredictor, config)
    }
}

impl<P: AffinityPredictor> Pipeline<P> {
    pub fn new(predictor: P, config: Config) -> Self {
        Self { predictor, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, request: &PredictionRequest) -> BindigoResult<PredictionResult> {
        let started = Instant::now();

        match self.run_inner(request, started) {
            Ok(result) => {
                tracing::info!(
                    status = %result.status,
                    seconds = result.execution_time,
                    "pipeline execution completed"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::error!(kind = e.kind(), "pipeline failed: {}", e);
                Err(e)
            }
        }
    }

    fn run_inner(
        &self,
        request: &PredictionRequest,
        started: Instant,
    ) -> BindigoResult<PredictionResult> {
        tracing::info!("validating inputs");
        let inputs = validate_request(request)?;

        let max_size = self.config.binding_site.max_size;
        if inputs.binding_site.size > max_size {
            return Err(BindigoError::Input(format!(
                "Binding site box size too large ({} Å). Configured maximum is {} Å.",
                inputs.binding_site.size, max_size
            )));
        }

        tracing::info!(protein_type = %inputs.protein.kind, "protein input classified");
        tracing::info!(ligand_type = %inputs.ligand.kind, "ligand input classified");
        tracing::debug!(
            predictor = self.predictor.name(),
            model = %self.config.model.name,
            exhaustiveness = self.config.docking.exhaustiveness,
            "running predictor"
        );

        let options = PredictionOptions {
            save_pose: request.save_pose,
            verbose: request.verbose,
        };
        let prediction = self
            .predictor
            .predict(&inputs, options)
            .map_err(|e| match e.downcast::<BindigoError>() {
                Ok(known) => known,
                Err(other) => BindigoError::pipeline(other),
            })?;

        let elapsed = started.elapsed().as_secs_f64();
        Ok(PredictionResult::assemble(&inputs, prediction, elapsed))
    }
}

/// Validate `request` and run it through the placeholder predictor.
pub fn run_prediction(request: &PredictionRequest, config: &Config) -> BindigoResult<PredictionResult> {
    Pipeline::placeholder(config.clone()).run(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    struct FailingPredictor {
        typed: bool,
    }

    impl AffinityPredictor for FailingPredictor {
        fn name(&self) -> &str {
            "failing"
        }

        fn predict(
            &self,
            _inputs: &ValidatedInputs,
            _options: PredictionOptions,
        ) -> anyhow::Result<Prediction> {
            if self.typed {
                Err(BindigoError::Docking("vina crashed".to_string()).into())
            } else {
                Err(anyhow::anyhow!("segfault in scorer"))
            }
        }
    }

    struct PoseWritingPredictor;

    impl AffinityPredictor for PoseWritingPredictor {
        fn name(&self) -> &str {
            "pose"
        }

        fn predict(
            &self,
            inputs: &ValidatedInputs,
            options: PredictionOptions,
        ) -> anyhow::Result<Prediction> {
            Ok(Prediction {
                status: "ok".to_string(),
                affinity: Some(6.2),
                docking_score: Some(-7.4),
                pose_file: options
                    .save_pose
                    .then(|| inputs.output.path.with_file_name("ligand_pose.pdb")),
            })
        }
    }

    fn request_in(dir: &std::path::Path) -> PredictionRequest {
        PredictionRequest::new("1hsg", "CCO", dir.join("results").to_string_lossy())
    }

    #[test]
    fn run_prediction_returns_placeholder_result() {
        let dir = tempdir().unwrap();
        let result = run_prediction(&request_in(dir.path()), &Config::default()).unwrap();

        assert_eq!(result.protein, "1HSG");
        assert_eq!(result.ligand, "CCO");
        assert_eq!(result.protein_type, ProteinKind::PdbId);
        assert_eq!(result.ligand_type, LigandKind::Smiles);
        assert_eq!(result.output, dir.path().join("results.csv"));
        assert_eq!(result.status, "placeholder");
        assert!(result.is_placeholder());
        assert!(result.pose_file.is_none());
        assert!(result.affinity.is_none());
        assert!(result.execution_time >= 0.0);
    }

    #[test]
    fn center_is_carried_into_result() {
        let dir = tempdir().unwrap();
        let request = request_in(dir.path()).with_center(vec![10.0, -2.5, 3.0]);

        let result = run_prediction(&request, &Config::default()).unwrap();
        assert_eq!(result.center.as_deref(), Some("10 -2.5 3"));
    }

    #[test]
    fn protein_error_wins_over_later_errors() {
        let request = PredictionRequest::new("INVALID", "xyz", "/nonexistent/dir/out.csv");
        let err = run_prediction(&request, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("protein"));
    }

    #[test]
    fn binding_site_is_checked_before_output() {
        let request =
            PredictionRequest::new("1HSG", "CCO", "/nonexistent/dir/out.csv").with_box_size(0.0);
        let err = run_prediction(&request, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("box size"));
    }

    #[test]
    fn configured_max_size_tightens_ceiling() {
        let dir = tempdir().unwrap();
        let config = Config::default()
            .with_value("binding_site.max_size", "30")
            .unwrap();
        let request = request_in(dir.path()).with_box_size(40.0);

        let err = run_prediction(&request, &config).unwrap_err();
        assert!(matches!(err, BindigoError::Input(_)));
        assert!(err.to_string().contains("Configured maximum is 30"));
    }

    #[test]
    fn foreign_predictor_errors_are_wrapped() {
        let dir = tempdir().unwrap();
        let pipeline = Pipeline::new(FailingPredictor { typed: false }, Config::default());

        let err = pipeline.run(&request_in(dir.path())).unwrap_err();
        assert!(matches!(err, BindigoError::Pipeline(_)));
        assert_eq!(err.to_string(), "Prediction failed: segfault in scorer");
    }

    #[test]
    fn typed_predictor_errors_pass_through() {
        let dir = tempdir().unwrap();
        let pipeline = Pipeline::new(FailingPredictor { typed: true }, Config::default());

        let err = pipeline.run(&request_in(dir.path())).unwrap_err();
        assert!(matches!(err, BindigoError::Docking(_)));
    }

    #[test]
    fn save_pose_flag_reaches_predictor() {
        let dir = tempdir().unwrap();
        let ligand = dir.path().join("lig.sdf");
        fs::write(&ligand, "").unwrap();
        let pipeline = Pipeline::new(PoseWritingPredictor, Config::default());

        let request = PredictionRequest::new(
            "1HSG",
            ligand.to_string_lossy(),
            dir.path().join("out.csv").to_string_lossy(),
        );
        let with_pose = pipeline.run(&request).unwrap();
        assert_eq!(with_pose.pose_file, Some(dir.path().join("ligand_pose.pdb")));
        assert_eq!(with_pose.ligand_type, LigandKind::FilePath);
        assert_eq!(with_pose.affinity, Some(6.2));

        let without_pose = pipeline.run(&request.with_save_pose(false)).unwrap();
        assert!(without_pose.pose_file.is_none());
    }
}
