//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConfigWarning, DEFAULT_BOX_SIZE, MAX_BOX_SIZE};
use crate::error::{BindigoError, BindigoResult};

use super::loader;

/// Docking engine parameters (AutoDock Vina)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockingConfig {
    #[serde(default = "default_exhaustiveness")]
    pub exhaustiveness: u32,

    #[serde(default = "default_num_modes")]
    pub num_modes: u32,

    /// kcal/mol
    #[serde(default = "default_energy_range")]
    pub energy_range: f64,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            exhaustiveness: default_exhaustiveness(),
            num_modes: default_num_modes(),
            energy_range: default_energy_range(),
        }
    }
}

fn default_exhaustiveness() -> u32 {
    8
}

fn default_num_modes() -> u32 {
    9
}

fn default_energy_range() -> f64 {
    3.0
}

/// Binding site detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSiteConfig {
    #[serde(default = "default_true")]
    pub auto_detect: bool,

    /// Angstroms
    #[serde(default = "default_box_size")]
    pub default_size: f64,

    /// Angstroms
    #[serde(default = "default_max_size")]
    pub max_size: f64,
}

impl Default for BindingSiteConfig {
    fn default() -> Self {
        Self {
            auto_detect: true,
            default_size: DEFAULT_BOX_SIZE,
            max_size: MAX_BOX_SIZE,
        }
    }
}

fn default_box_size() -> f64 {
    DEFAULT_BOX_SIZE
}

fn default_max_size() -> f64 {
    MAX_BOX_SIZE
}

/// Trained model selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,

    #[serde(default = "default_model_file")]
    pub model_file: String,

    #[serde(default = "default_scaler_file")]
    pub scaler_file: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            model_file: default_model_file(),
            scaler_file: default_scaler_file(),
        }
    }
}

fn default_model_name() -> String {
    "default".to_string()
}

fn default_model_file() -> String {
    "default_model.pkl".to_string()
}

fn default_scaler_file() -> String {
    "scaler.pkl".to_string()
}

/// Applicability-domain confidence thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
        }
    }
}

fn default_high_threshold() -> f64 {
    0.8
}

fn default_medium_threshold() -> f64 {
    0.5
}

/// Protein preprocessing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinPrepConfig {
    #[serde(default = "default_true")]
    pub remove_water: bool,

    #[serde(default = "default_true")]
    pub add_hydrogens: bool,

    /// Chain used when the structure has several
    #[serde(default = "default_chain")]
    pub select_chain: String,
}

impl Default for ProteinPrepConfig {
    fn default() -> Self {
        Self {
            remove_water: true,
            add_hydrogens: true,
            select_chain: default_chain(),
        }
    }
}

fn default_chain() -> String {
    "A".to_string()
}

/// Ligand preprocessing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LigandPrepConfig {
    #[serde(default = "default_true")]
    pub add_hydrogens: bool,

    #[serde(default = "default_true")]
    pub generate_3d: bool,

    #[serde(default = "default_charge_method")]
    pub charge_method: String,
}

impl Default for LigandPrepConfig {
    fn default() -> Self {
        Self {
            add_hydrogens: true,
            generate_3d: true,
            charge_method: default_charge_method(),
        }
    }
}

fn default_charge_method() -> String {
    "gasteiger".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub save_poses: bool,

    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_poses: true,
            format: default_format(),
            verbose: false,
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_format() -> String {
    "csv".to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Structure download settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_pdb_base_url")]
    pub pdb_base_url: String,

    #[serde(default = "default_pdb_cache_dir")]
    pub pdb_cache_dir: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            pdb_base_url: default_pdb_base_url(),
            pdb_cache_dir: default_pdb_cache_dir(),
        }
    }
}

fn default_pdb_base_url() -> String {
    "https://files.rcsb.org/download/".to_string()
}

fn default_pdb_cache_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".bindigo")
        .join("cache")
        .join("pdb")
}

/// Resource limits per prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceConfig {
    #[serde(default = "default_max_memory_gb")]
    pub max_memory_gb: f64,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_memory_gb: default_max_memory_gb(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_max_memory_gb() -> f64 {
    2.0
}

fn default_timeout_seconds() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
///
/// Built once at startup and passed by reference. Never mutated in place:
/// `with_value` and `with_env_overrides` return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub docking: DockingConfig,

    #[serde(default)]
    pub binding_site: BindingSiteConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub confidence: ConfidenceConfig,

    #[serde(default)]
    pub protein: ProteinPrepConfig,

    #[serde(default)]
    pub ligand: LigandPrepConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BindigoResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BindigoResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Explicit file, else project/user files, else defaults; then env overrides.
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> BindigoResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, project_root)
    }

    /// Apply environment variable overrides (BINDIGO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Return a copy with one dotted key replaced, e.g.
    /// `with_value("docking.exhaustiveness", "16")`.
    ///
    /// The new value is parsed as the type of the current one. Keys are
    /// case-insensitive; unknown keys are an error.
    pub fn with_value(&self, key: &str, value: &str) -> BindigoResult<Self> {
        let mut root = toml::Value::try_from(self).map_err(|e| BindigoError::Config(e.to_string()))?;

        let normalized = key.trim().to_lowercase();
        let slot = normalized
            .split('.')
            .try_fold(&mut root, |node, segment| node.get_mut(segment))
            .filter(|slot| !slot.is_table())
            .ok_or_else(|| BindigoError::Config(format!("Unknown configuration key: {}", key)))?;

        *slot = coerce_value(slot, key, value)?;

        let updated: Config = root
            .try_into()
            .map_err(|e: toml::de::Error| BindigoError::Config(e.to_string()))?;
        updated.validate()?;
        Ok(updated)
    }

    /// Flatten into dotted `section.key` → display value pairs.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        if let Ok(root) = toml::Value::try_from(self) {
            flatten(&root, "", &mut out);
        }
        out
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> BindigoResult<()> {
        let invalid = |msg: String| Err(BindigoError::Config(msg));

        if self.docking.exhaustiveness == 0 || self.docking.num_modes == 0 {
            return invalid("docking.exhaustiveness and docking.num_modes must be positive".into());
        }
        if self.docking.energy_range <= 0.0 {
            return invalid(format!(
                "docking.energy_range must be positive, got {}",
                self.docking.energy_range
            ));
        }

        let bs = &self.binding_site;
        if !(bs.max_size > 0.0 && bs.max_size <= MAX_BOX_SIZE) {
            return invalid(format!(
                "binding_site.max_size must be in (0, {}], got {}",
                MAX_BOX_SIZE, bs.max_size
            ));
        }
        if !(bs.default_size > 0.0 && bs.default_size <= bs.max_size) {
            return invalid(format!(
                "binding_site.default_size must be in (0, {}], got {}",
                bs.max_size, bs.default_size
            ));
        }

        let c = &self.confidence;
        let in_unit = |v: f64| v > 0.0 && v <= 1.0;
        if !in_unit(c.high_threshold) || !in_unit(c.medium_threshold) {
            return invalid("confidence thresholds must be in (0, 1]".into());
        }
        if c.high_threshold <= c.medium_threshold {
            return invalid(format!(
                "confidence.high_threshold ({}) must exceed confidence.medium_threshold ({})",
                c.high_threshold, c.medium_threshold
            ));
        }

        Ok(())
    }
}

fn coerce_value(current: &toml::Value, key: &str, raw: &str) -> BindigoResult<toml::Value> {
    let bad = |kind: &str| {
        BindigoError::Config(format!(
            "Invalid value for {}: expected {}, got '{}'",
            key, kind, raw
        ))
    };

    match current {
        toml::Value::String(_) => Ok(toml::Value::String(raw.to_string())),
        toml::Value::Integer(_) => raw
            .trim()
            .parse::<i64>()
            .map(toml::Value::Integer)
            .map_err(|_| bad("an integer")),
        toml::Value::Float(_) => raw
            .trim()
            .parse::<f64>()
            .map(toml::Value::Float)
            .map_err(|_| bad("a number")),
        toml::Value::Boolean(_) => parse_bool(raw)
            .map(toml::Value::Boolean)
            .ok_or_else(|| bad("true or false")),
        _ => Err(bad("a scalar")),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn flatten(value: &toml::Value, prefix: &str, out: &mut BTreeMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (k, v) in table {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten(v, &key, out);
            }
        }
        toml::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
