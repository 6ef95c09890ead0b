//! Error types for Bindigo
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

/// Result type alias for Bindigo operations
pub type BindigoResult<T> = Result<T, BindigoError>;

/// Main error type for Bindigo operations
#[derive(Error, Debug)]
pub enum BindigoError {
    /// Malformed, missing or out-of-range user input
    #[error("{0}")]
    Input(String),

    /// Recognised file with an unsupported extension
    #[error("{0}")]
    FileFormat(String),

    /// Protein preparation failed
    #[error("{0}")]
    Protein(String),

    /// Ligand preparation failed
    #[error("{0}")]
    Ligand(String),

    /// Docking failed
    #[error("{0}")]
    Docking(String),

    /// ML prediction failed
    #[error("{0}")]
    Prediction(String),

    /// Structure database fetch failed
    #[error("{0}")]
    Database(String),

    /// Binding site detection failed
    #[error("{0}")]
    BindingSite(String),

    /// A required dependency is missing or incompatible
    #[error("{0}")]
    Dependency(String),

    /// Configuration file or key is invalid
    #[error("{0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV report error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any failure outside the taxonomy, wrapped by the pipeline
    #[error("Prediction failed: {0}")]
    Pipeline(String),
}

impl BindigoError {
    /// Wrap a foreign error as a generic pipeline failure.
    pub fn pipeline(cause: impl std::fmt::Display) -> Self {
        BindigoError::Pipeline(cause.to_string())
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            BindigoError::Input(_) => "input_error",
            BindigoError::FileFormat(_) => "file_format_error",
            BindigoError::Protein(_) => "protein_error",
            BindigoError::Ligand(_) => "ligand_error",
            BindigoError::Docking(_) => "docking_error",
            BindigoError::Prediction(_) => "prediction_error",
            BindigoError::Database(_) => "database_error",
            BindigoError::BindingSite(_) => "binding_site_error",
            BindigoError::Dependency(_) => "dependency_error",
            BindigoError::Config(_) => "config_error",
            BindigoError::Io(_) => "io_error",
            BindigoError::Csv(_) => "csv_error",
            BindigoError::Json(_) => "json_error",
            BindigoError::Pipeline(_) => "pipeline_error",
        }
    }

    /// Remediation hint shown under the error message, when one applies.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            BindigoError::Input(msg) if msg.starts_with("Invalid protein") || msg.starts_with("Protein") => Some(
                "Pass a 4-character PDB ID such as '1HSG' or the path to an existing .pdb, .ent or .cif file.",
            ),
            BindigoError::Input(msg) if msg.starts_with("Invalid ligand") || msg.starts_with("Ligand") => Some(
                "Pass a SMILES string such as 'CCO' or the path to an existing .sdf, .mol2, .mol or .pdb file.",
            ),
            BindigoError::Input(msg) if msg.starts_with("Binding site box size") => {
                Some("Use --size with a value greater than 0 and at most 100 Angstroms.")
            }
            BindigoError::Input(msg) if msg.starts_with("Binding site") => {
                Some("Use --center X Y Z with three numeric coordinates in Angstroms.")
            }
            BindigoError::Input(msg) if msg.starts_with("Output") => {
                Some("Write results to a .csv file inside an existing directory.")
            }
            BindigoError::FileFormat(_) => {
                Some("Convert the structure to a supported format and try again.")
            }
            BindigoError::Config(_) => Some("Check bindigo.toml for typos and invalid values."),
            _ => None,
        }
    }

    /// True for errors raised by input classification and validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, BindigoError::Input(_) | BindigoError::FileFormat(_))
    }
}
