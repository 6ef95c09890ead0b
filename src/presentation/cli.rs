//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --config, --log-file) are inherited by all subcommands
//! - Options left unset on the command line fall back to the loaded `Config`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::PredictionRequest;
use crate::config::Config;
use crate::error::BindigoResult;
use crate::validation::parse_center;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Bindigo - Protein-Ligand Binding Affinity Prediction
///
/// Predicts protein-ligand binding affinities using molecular docking
/// (AutoDock Vina) combined with machine learning.
#[derive(Parser, Debug)]
#[command(name = "bindigo")]
#[command(author, version, about, long_about)]
#[command(after_help = "Examples:
  # Basic prediction using PDB ID and SMILES
  $ bindigo predict --protein 1HSG --ligand \"CC(=O)Oc1ccccc1C(=O)O\" --output results.csv

  # Using local files
  $ bindigo predict --protein protein.pdb --ligand ligand.sdf --output results.csv

  # Custom binding site
  $ bindigo predict --protein 1HSG --ligand \"CCO\" --center 10 20 15 --output results.csv")]
pub struct Cli {
    /// Machine-readable NDJSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Configuration file (default: ./bindigo.toml, then ~/.bindigo/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write debug logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict protein-ligand binding affinity using docking + ML
    Predict(PredictArgs),

    /// Show package and model information
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    /// PDB ID (e.g., '1HSG') or file path (e.g., './protein.pdb')
    #[arg(long)]
    pub protein: String,

    /// SMILES string (e.g., 'CCO') or SDF/MOL2 file path (e.g., './ligand.sdf')
    #[arg(long)]
    pub ligand: String,

    /// Output CSV file path (e.g., 'results.csv')
    #[arg(long)]
    pub output: String,

    /// Binding site center in Angstroms; the largest pocket is used when omitted
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    pub center: Option<Vec<String>>,

    /// Binding site box size in Angstroms [default: 20.0]
    #[arg(long, value_name = "ANGSTROMS", allow_negative_numbers = true)]
    pub size: Option<f64>,

    /// Save docked ligand pose as PDB file [default]
    #[arg(long, overrides_with = "no_save_pose")]
    pub save_pose: bool,

    /// Do not save the docked ligand pose
    #[arg(long, overrides_with = "save_pose")]
    pub no_save_pose: bool,

    /// Show detailed progress and intermediate results
    #[arg(long)]
    pub verbose: bool,
}

impl PredictArgs {
    /// Resolve the request, filling unset options from `config`.
    pub fn to_request(&self, config: &Config) -> BindigoResult<PredictionRequest> {
        let save_pose = match (self.save_pose, self.no_save_pose) {
            (_, true) => false,
            (true, false) => true,
            (false, false) => config.output.save_poses,
        };

        let mut request = PredictionRequest::new(&self.protein, &self.ligand, &self.output)
            .with_box_size(self.size.unwrap_or(config.binding_site.default_size))
            .with_save_pose(save_pose)
            .with_verbose(self.verbose || config.output.verbose);

        if let Some(tokens) = &self.center {
            request = request.with_center(parse_center(tokens)?);
        }
        Ok(request)
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoArgs {
    /// Show package version
    #[arg(long = "version")]
    pub show_version: bool,

    /// Show available ML models
    #[arg(long = "models")]
    pub show_models: bool,

    /// Show citation information
    #[arg(long = "cite")]
    pub show_citation: bool,
}

impl InfoArgs {
    /// With no flag set, every section is shown.
    pub fn sections(self) -> Self {
        if self.show_version || self.show_models || self.show_citation {
            self
        } else {
            Self {
                show_version: true,
                show_models: true,
                show_citation: true,
            }
        }
    }
}
