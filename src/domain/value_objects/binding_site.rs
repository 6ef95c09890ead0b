//! Docking search box.

use serde::Serialize;

use crate::error::BindigoResult;
use crate::validation::validate_binding_site;

/// Default edge length of the search box, in Angstroms.
pub const DEFAULT_BOX_SIZE: f64 = 20.0;

/// Largest accepted edge length, in Angstroms.
pub const MAX_BOX_SIZE: f64 = 100.0;

/// Region within which the docking search is constrained.
///
/// `center == None` asks the docking engine to pick the largest pocket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BindingSite {
    pub center: Option<[f64; 3]>,
    pub size: f64,
}

impl BindingSite {
    /// Validate and build a binding site from raw CLI values.
    pub fn new(center: Option<&[f64]>, size: f64) -> BindigoResult<Self> {
        validate_binding_site(center, size)?;
        let center = center.map(|c| [c[0], c[1], c[2]]);
        Ok(Self { center, size })
    }

    pub fn auto_detect(&self) -> bool {
        self.center.is_none()
    }
}

impl Default for BindingSite {
    fn default() -> Self {
        Self {
            center: None,
            size: DEFAULT_BOX_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_copies_validated_center() {
        let site = BindingSite::new(Some(&[10.0, -20.5, 30.0]), 25.0).unwrap();
        assert_eq!(site.center, Some([10.0, -20.5, 30.0]));
        assert_eq!(site.size, 25.0);
        assert!(!site.auto_detect());
    }

    #[test]
    fn new_rejects_two_coordinates() {
        assert!(BindingSite::new(Some(&[10.0, 20.0]), 20.0).is_err());
    }

    #[test]
    fn default_auto_detects_with_default_size() {
        let site = BindingSite::default();
        assert!(site.auto_detect());
        assert_eq!(site.size, DEFAULT_BOX_SIZE);
    }
}
