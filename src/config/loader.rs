//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{BindigoError, BindigoResult};

use super::types::{parse_bool, ColorMode, Config};

/// File name looked up in the project (working) directory.
pub const PROJECT_CONFIG_FILE: &str = "bindigo.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BindigoResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BindigoError::Config(format!("invalid config in {}: {}", path.display(), e)))?;

    config.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    match resolve(None, project_root) {
        Ok((config, _warnings)) => config,
        Err(_) => with_env_overrides(Config::default()),
    }
}

/// Resolve the effective configuration.
///
/// An explicit path must load cleanly. Otherwise the project file, then the
/// user file, is tried; a broken file is logged and skipped. Environment
/// overrides are applied last.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> BindigoResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates.filter(|p| p.exists()) {
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                return Ok((with_env_overrides(config), warnings));
            }
            Err(e) => tracing::warn!("ignoring {}: {}", path.display(), e),
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `~/.bindigo/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bindigo").join("config.toml"))
}

/// Apply environment variable overrides (BINDIGO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(val) = get_env("BINDIGO_VERBOSE").and_then(|v| parse_bool(&v)) {
        config.output.verbose = val;
    }

    if let Some(val) = get_env("BINDIGO_SAVE_POSES").and_then(|v| parse_bool(&v)) {
        config.output.save_poses = val;
    }

    // Out-of-range sizes are left for validation to report at predict time.
    if let Some(size) = get_env("BINDIGO_BOX_SIZE").and_then(|v| v.trim().parse::<f64>().ok()) {
        config.binding_site.default_size = size;
    }

    if let Some(model) = get_env("BINDIGO_MODEL").filter(|m| !m.trim().is_empty()) {
        config.model.name = model.trim().to_string();
    }

    if let Some(dir) = get_env("BINDIGO_PDB_CACHE_DIR").filter(|d| !d.is_empty()) {
        config.database.pdb_cache_dir = PathBuf::from(dir);
    }

    if let Some(color) = get_env("BINDIGO_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    if get_env("NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "docking",
        "exhaustiveness",
        "num_modes",
        "energy_range",
        "binding_site",
        "auto_detect",
        "default_size",
        "max_size",
        "model",
        "name",
        "model_file",
        "scaler_file",
        "confidence",
        "high_threshold",
        "medium_threshold",
        "protein",
        "remove_water",
        "add_hydrogens",
        "select_chain",
        "ligand",
        "generate_3d",
        "charge_method",
        "output",
        "save_poses",
        "format",
        "verbose",
        "color",
        "unicode",
        "database",
        "pdb_base_url",
        "pdb_cache_dir",
        "performance",
        "max_memory_gb",
        "timeout_seconds",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
