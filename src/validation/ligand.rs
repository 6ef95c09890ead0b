use std::path::Path;

use crate::domain::value_objects::{LigandInput, LIGAND_EXTENSIONS};
use crate::error::{BindigoError, BindigoResult};

use super::{absolute_string, dotted_extension};

/// Characters that mark a string as plausibly SMILES.
const SMILES_ALPHABET: &str = "CNOSPFIHcnospfih123456789()[]=#-+@/\\";

/// Membership heuristic for SMILES.
///
/// Rejects anything that looks like a structure filename, then accepts any
/// string holding at least one organic-chemistry character. Brackets, ring
/// closures and valence are not checked: `"CC(=O"` passes.
pub fn is_smiles(raw: &str) -> bool {
    if raw.contains('.') && LIGAND_EXTENSIONS.iter().any(|ext| raw.ends_with(ext)) {
        return false;
    }

    raw.chars().any(|c| SMILES_ALPHABET.contains(c))
}

/// Classify the ligand argument.
///
/// Files win over SMILES: the path test runs first and SMILES is only the
/// fallback for strings that name nothing on disk.
pub fn classify_ligand(raw: &str) -> BindigoResult<LigandInput> {
    let path = Path::new(raw);
    if path.exists() {
        if !path.is_file() {
            return Err(BindigoError::Input(format!(
                "Ligand path is a directory, not a file: {}",
                raw
            )));
        }

        let ext = dotted_extension(path);
        if !LIGAND_EXTENSIONS.contains(&ext.as_str()) {
            return Err(BindigoError::FileFormat(format!(
                "Unsupported ligand file format: {}. Supported formats: {}",
                if ext.is_empty() { "(none)" } else { ext.as_str() },
                LIGAND_EXTENSIONS.join(", ")
            )));
        }

        tracing::debug!(ligand = raw, "ligand classified as structure file");
        return Ok(LigandInput::file(absolute_string(path)));
    }

    if is_smiles(raw) {
        tracing::debug!(ligand = raw, "ligand classified as SMILES");
        return Ok(LigandInput::smiles(raw));
    }

    Err(BindigoError::Input(format!(
        "Invalid ligand input: '{}'. Must be a valid SMILES string or path to an SDF/MOL2 file.",
        raw
    )))
}
