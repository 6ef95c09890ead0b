//! Domain Layer
//!
//! Value records produced by input classification, and the port through which
//! the pipeline reaches the affinity engine.
//!
//! ## Structure
//!
//! - `value_objects/` - Classified inputs (ProteinInput, LigandInput, BindingSite, OutputTarget)
//! - `ports/` - Interface definitions for the docking/ML collaborator
//!
//! This layer performs no I/O. Filesystem checks live in `crate::validation`.

pub mod ports;
pub mod value_objects;
