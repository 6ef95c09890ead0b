//! Domain Value Objects
//!
//! Immutable records describing one validated invocation. None of them carries
//! identity beyond the call that produced it.

mod binding_site;
mod config_warning;
mod ligand;
mod output_target;
mod protein;

pub use binding_site::{BindingSite, DEFAULT_BOX_SIZE, MAX_BOX_SIZE};
pub use config_warning::ConfigWarning;
pub use ligand::{LigandInput, LigandKind, LIGAND_EXTENSIONS};
pub use output_target::OutputTarget;
pub use protein::{ProteinInput, ProteinKind, PROTEIN_EXTENSIONS};
