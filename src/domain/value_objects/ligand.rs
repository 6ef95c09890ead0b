//! Classified ligand input.

use std::fmt;

use serde::Serialize;

/// Extensions accepted for ligand structure files (lowercase, with dot).
pub const LIGAND_EXTENSIONS: &[&str] = &[".sdf", ".mol2", ".mol", ".pdb"];

/// How the ligand argument was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LigandKind {
    /// SMILES string (membership heuristic, not chemically validated)
    Smiles,
    /// Local structure file
    #[serde(rename = "file")]
    FilePath,
}

impl LigandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LigandKind::Smiles => "smiles",
            LigandKind::FilePath => "file",
        }
    }
}

impl fmt::Display for LigandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ligand argument after classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LigandInput {
    pub kind: LigandKind,
    pub value: String,
}

impl LigandInput {
    pub fn smiles(smiles: impl Into<String>) -> Self {
        Self {
            kind: LigandKind::Smiles,
            value: smiles.into(),
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: LigandKind::FilePath,
            value: path.into(),
        }
    }

    pub fn is_smiles(&self) -> bool {
        self.kind == LigandKind::Smiles
    }
}
