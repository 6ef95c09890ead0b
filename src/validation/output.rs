use std::path::Path;

use crate::domain::value_objects::OutputTarget;
use crate::error::{BindigoError, BindigoResult};

use super::dotted_extension;

/// Check the report destination and normalise its extension.
///
/// The parent directory must already exist; it is never created here. An
/// existing file is accepted, overwriting is the caller's call. A missing
/// extension becomes `.csv`, any extension other than `.csv` is rejected.
pub fn validate_output_path(raw: &str) -> BindigoResult<OutputTarget> {
    let path = Path::new(raw);

    if path.file_name().is_none() {
        return Err(BindigoError::Input(format!(
            "Output path must name a file, got '{}'",
            raw
        )));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(BindigoError::Input(format!(
            "Output directory does not exist: {}",
            parent.display()
        )));
    }

    let ext = dotted_extension(path);
    match ext.as_str() {
        "" => Ok(OutputTarget::new(path.with_extension("csv"))),
        ".csv" => Ok(OutputTarget::new(path)),
        other => Err(BindigoError::Input(format!(
            "Output file must be CSV format (got {}). Use .csv extension.",
            other
        ))),
    }
}
