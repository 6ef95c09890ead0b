use crate::domain::value_objects::MAX_BOX_SIZE;
use crate::error::{BindigoError, BindigoResult};

/// Parse raw `--center` tokens into coordinates.
///
/// Arity is left to `validate_binding_site`; this only rejects tokens that are
/// not numbers.
pub fn parse_center(raw: &[String]) -> BindigoResult<Vec<f64>> {
    raw.iter()
        .map(|token| {
            token.trim().parse::<f64>().map_err(|_| {
                BindigoError::Input(format!(
                    "Binding site coordinates must be numeric, got '{}'",
                    token
                ))
            })
        })
        .collect()
}

/// Check binding-site parameters.
///
/// `center == None` is always valid and means "auto-detect the largest pocket".
/// `size` must lie in `(0, 100]` Angstroms.
pub fn validate_binding_site(center: Option<&[f64]>, size: f64) -> BindigoResult<()> {
    if let Some(center) = center {
        if center.len() != 3 {
            return Err(BindigoError::Input(format!(
                "Binding site center must have 3 coordinates (X Y Z), got {}",
                center.len()
            )));
        }

        if let Some(bad) = center.iter().find(|c| !c.is_finite()) {
            return Err(BindigoError::Input(format!(
                "Binding site coordinates must be finite numbers, got {}",
                bad
            )));
        }
    }

    if size.is_nan() || size <= 0.0 {
        return Err(BindigoError::Input(format!(
            "Binding site box size must be positive, got {}",
            size
        )));
    }

    if size > MAX_BOX_SIZE {
        return Err(BindigoError::Input(format!(
            "Binding site box size too large ({} Å). Maximum recommended size is {} Å.",
            size, MAX_BOX_SIZE
        )));
    }

    Ok(())
}
