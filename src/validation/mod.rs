//! Input classification and validation
//!
//! Decides what each raw CLI argument means before anything else runs:
//!
//! - `protein` - PDB identifier or structure file
//! - `ligand` - structure file or SMILES string
//! - `binding_site` - search box center and size
//! - `output` - CSV report destination
//!
//! Every function is synchronous and touches the filesystem with at most one
//! existence/type check. Failures are `BindigoError::Input` or
//! `BindigoError::FileFormat`, returned at the first problem found.

mod binding_site;
mod ligand;
mod output;
mod protein;

pub use binding_site::{parse_center, validate_binding_site};
pub use ligand::{classify_ligand, is_smiles};
pub use output::validate_output_path;
pub use protein::{classify_protein, is_pdb_id};

use std::path::Path;

/// Lowercased extension of `path` including the leading dot, or `""`.
pub(crate) fn dotted_extension(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_lowercase()),
        _ => String::new(),
    }
}

/// Absolute form of `path` as a display string. Falls back to the path as
/// given when the working directory cannot be read.
pub(crate) fn absolute_string(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}
