use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::{ProteinInput, PROTEIN_EXTENSIONS};
use crate::error::{BindigoError, BindigoResult};

use super::{absolute_string, dotted_extension};

static PDB_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9][A-Za-z0-9]{3}$").expect("PDB ID pattern is a valid regex")
});

/// True when `raw` has the lexical shape of a PDB identifier: one digit
/// followed by three alphanumerics. No registry lookup is made.
pub fn is_pdb_id(raw: &str) -> bool {
    PDB_ID.is_match(raw)
}

/// Classify the protein argument.
///
/// The PDB ID test runs before any filesystem check, so an extension-less file
/// named like `1hsg` in the working directory is still read as a PDB ID.
pub fn classify_protein(raw: &str) -> BindigoResult<ProteinInput> {
    if is_pdb_id(raw) {
        tracing::debug!(protein = raw, "protein classified as PDB ID");
        return Ok(ProteinInput::pdb_id(raw.to_uppercase()));
    }

    let path = Path::new(raw);
    if !path.exists() {
        return Err(BindigoError::Input(format!(
            "Invalid protein input: '{}'. Must be a valid PDB ID (e.g., '1HSG') or path to a PDB file.",
            raw
        )));
    }

    if !path.is_file() {
        return Err(BindigoError::Input(format!(
            "Protein path is a directory, not a file: {}",
            raw
        )));
    }

    let ext = dotted_extension(path);
    if !PROTEIN_EXTENSIONS.contains(&ext.as_str()) {
        return Err(BindigoError::FileFormat(format!(
            "Unsupported protein file format: {}. Supported formats: {}",
            if ext.is_empty() { "(none)" } else { ext.as_str() },
            PROTEIN_EXTENSIONS.join(", ")
        )));
    }

    tracing::debug!(protein = raw, "protein classified as structure file");
    Ok(ProteinInput::file(absolute_string(path)))
}
