//! Classified protein input.

use std::fmt;

use serde::Serialize;

/// Extensions accepted for protein structure files (lowercase, with dot).
pub const PROTEIN_EXTENSIONS: &[&str] = &[".pdb", ".ent", ".cif"];

/// How the protein argument was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinKind {
    /// 4-character Protein Data Bank identifier
    PdbId,
    /// Local structure file
    #[serde(rename = "file")]
    FilePath,
}

impl ProteinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProteinKind::PdbId => "pdb_id",
            ProteinKind::FilePath => "file",
        }
    }
}

impl fmt::Display for ProteinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protein argument after classification.
///
/// A `PdbId` value is upper-cased; a `FilePath` value is an absolute path to an
/// existing `.pdb`, `.ent` or `.cif` file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProteinInput {
    pub kind: ProteinKind,
    pub value: String,
}

impl ProteinInput {
    pub fn pdb_id(id: impl Into<String>) -> Self {
        Self {
            kind: ProteinKind::PdbId,
            value: id.into(),
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: ProteinKind::FilePath,
            value: path.into(),
        }
    }

    pub fn is_pdb_id(&self) -> bool {
        self.kind == ProteinKind::PdbId
    }
}
