//! Crop profiles used by the ROI estimator.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::AppError;

/// A crop and its relative value density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    /// Unique lowercase identifier (e.g. "wheat")
    pub identifier: String,
    /// Scaling factor applied to the per-acre yield value. Always positive.
    pub yield_multiplier: f64,
}

impl CropProfile {
    pub fn new(identifier: impl Into<String>, yield_multiplier: f64) -> Self {
        Self {
            identifier: identifier.into(),
            yield_multiplier,
        }
    }

    /// Translation key for the crop's display name
    pub fn label_key(&self) -> String {
        format!("crop.{}", self.identifier)
    }
}

static DEFAULT_CROPS: LazyLock<CropCatalog> = LazyLock::new(|| CropCatalog {
    profiles: vec![
        CropProfile::new("wheat", 1.2),
        CropProfile::new("rice", 1.5),
        CropProfile::new("cotton", 1.8),
        CropProfile::new("sugarcane", 2.1),
        CropProfile::new("maize", 1.3),
    ],
});

/// Read-only, ordered crop catalog. The first entry is the default crop.
///
/// Serialized as a plain list of profiles; deserialization goes through
/// the same checks as [`CropCatalog::from_profiles`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CropProfile>", into = "Vec<CropProfile>")]
pub struct CropCatalog {
    profiles: Vec<CropProfile>,
}

impl CropCatalog {
    /// The built-in catalog, shared for the process lifetime
    pub fn builtin() -> &'static CropCatalog {
        &DEFAULT_CROPS
    }

    /// Build a catalog from custom profiles.
    ///
    /// Fails when empty, when an identifier is blank or repeats, or when a
    /// multiplier is not a positive finite number.
    pub fn from_profiles(profiles: Vec<CropProfile>) -> Result<Self, AppError> {
        if profiles.is_empty() {
            return Err(AppError::Config("crop catalog is empty".to_string()));
        }

        let mut normalized: Vec<CropProfile> = Vec::with_capacity(profiles.len());
        for profile in profiles {
            let identifier = normalize(&profile.identifier);
            if identifier.is_empty() {
                return Err(AppError::Config("crop identifier is empty".to_string()));
            }
            if !(profile.yield_multiplier.is_finite() && profile.yield_multiplier > 0.0) {
                return Err(AppError::Config(format!(
                    "crop '{}' has invalid yield multiplier {}",
                    identifier, profile.yield_multiplier
                )));
            }
            if normalized.iter().any(|p| p.identifier == identifier) {
                return Err(AppError::Config(format!("duplicate crop '{}'", identifier)));
            }
            normalized.push(CropProfile::new(identifier, profile.yield_multiplier));
        }

        Ok(Self {
            profiles: normalized,
        })
    }

    /// Find a profile by identifier, ignoring case and surrounding whitespace
    pub fn find(&self, identifier: &str) -> Option<&CropProfile> {
        let wanted = normalize(identifier);
        self.profiles.iter().find(|p| p.identifier == wanted)
    }

    /// The crop substituted when lookup is lenient
    pub fn default_profile(&self) -> Option<&CropProfile> {
        self.profiles.first()
    }

    pub fn profiles(&self) -> &[CropProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl TryFrom<Vec<CropProfile>> for CropCatalog {
    type Error = AppError;

    fn try_from(profiles: Vec<CropProfile>) -> Result<Self, Self::Error> {
        Self::from_profiles(profiles)
    }
}

impl From<CropCatalog> for Vec<CropProfile> {
    fn from(catalog: CropCatalog) -> Self {
        catalog.profiles
    }
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = CropCatalog::builtin();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.default_profile().unwrap().identifier, "wheat");
        assert_eq!(catalog.find("cotton").unwrap().yield_multiplier, 1.8);
        assert_eq!(catalog.find("sugarcane").unwrap().yield_multiplier, 2.1);
    }

    #[test]
    fn test_lookup_normalizes() {
        let catalog = CropCatalog::builtin();

        assert_eq!(catalog.find("  Rice ").unwrap().identifier, "rice");
        assert!(catalog.find("barley").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_custom_catalog_validation() {
        let rejected = [
            vec![],
            vec![CropProfile::new("millet", 0.0)],
            vec![CropProfile::new("millet", f64::NAN)],
            vec![CropProfile::new("  ", 1.0)],
            vec![CropProfile::new("millet", 1.1), CropProfile::new("Millet", 1.4)],
        ];
        for profiles in rejected {
            let result = CropCatalog::from_profiles(profiles.clone());
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Expected rejection for {:?}",
                profiles
            );
        }

        let catalog = CropCatalog::from_profiles(vec![CropProfile::new("Millet", 1.1)]).unwrap();
        assert_eq!(catalog.default_profile().unwrap().identifier, "millet");
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<CropCatalog>("[]").is_err());
        assert!(serde_json::from_str::<CropCatalog>(r#"{"profiles":[]}"#).is_err());
        assert!(serde_json::from_str::<CropCatalog>(
            r#"[{"identifier":"rice","yieldMultiplier":-1.0}]"#
        )
        .is_err());

        let catalog: CropCatalog = serde_json::from_str(
            r#"[{"identifier":" Jowar ","yieldMultiplier":1.1},{"identifier":"bajra","yieldMultiplier":0.9}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.default_profile().unwrap().identifier, "jowar");
    }

    #[test]
    fn test_builtin_catalog_serializes_as_list() {
        let json = serde_json::to_value(CropCatalog::builtin()).unwrap();
        assert_eq!(json[0]["identifier"], "wheat");

        let reloaded: CropCatalog = serde_json::from_value(json).unwrap();
        assert_eq!(&reloaded, CropCatalog::builtin());
    }

    #[test]
    fn test_label_key() {
        assert_eq!(CropProfile::new("maize", 1.3).label_key(), "crop.maize");
    }
}
