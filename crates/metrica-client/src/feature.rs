//! Capability negotiation against the server's interface versions
//!
//! Optional server capabilities each carry a documented minimum interface
//! version. The [`FeatureMatrix`] evaluates every flag once against the
//! version the server reports; gated operations consult it before any
//! network call and fail fast when the server is too old.

use metrica_api::{ApiVersion, InterfaceVersionRange};

use crate::error::{DataServiceError, Result};

/// Optional server capabilities, each tied to a minimum interface version
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Deleting measurements of a part and all parts below it
    DeleteMeasurementsForSubParts,
    /// Creating inspection plan version entries when creating parts or
    /// characteristics
    CreateVersionEntries,
    /// Checking whether an attribute value is in use
    CheckAttributeUsage,
    /// Fetching distinct values of a measurement attribute
    DistinctMeasurementValueSearch,
    /// Restricting measurement searches by merge attributes
    RestrictMeasurementSearchByMergeAttributes,
    /// Restricting measurement searches by a merge master part
    RestrictMeasurementSearchByMergeMasterPart,
    /// Clearing a part without deleting it
    ClearPart,
    /// Fetching characteristics restricted by a uuid collection
    CharacteristicUuidRestrictedFetch,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::DeleteMeasurementsForSubParts,
        Feature::CreateVersionEntries,
        Feature::CheckAttributeUsage,
        Feature::DistinctMeasurementValueSearch,
        Feature::RestrictMeasurementSearchByMergeAttributes,
        Feature::RestrictMeasurementSearchByMergeMasterPart,
        Feature::ClearPart,
        Feature::CharacteristicUuidRestrictedFetch,
    ];

    /// Minimum interface version the server must support
    pub const fn min_version(self) -> ApiVersion {
        match self {
            Feature::DeleteMeasurementsForSubParts => ApiVersion::new(1, 2, 0),
            Feature::CreateVersionEntries => ApiVersion::new(1, 2, 0),
            Feature::CheckAttributeUsage => ApiVersion::new(1, 2, 0),
            Feature::DistinctMeasurementValueSearch => ApiVersion::new(1, 2, 0),
            Feature::RestrictMeasurementSearchByMergeAttributes => ApiVersion::new(1, 2, 0),
            Feature::RestrictMeasurementSearchByMergeMasterPart => ApiVersion::new(1, 4, 0),
            Feature::ClearPart => ApiVersion::new(1, 5, 0),
            Feature::CharacteristicUuidRestrictedFetch => ApiVersion::new(1, 5, 0),
        }
    }

    /// Human readable name used in gating errors
    pub const fn describe(self) -> &'static str {
        match self {
            Feature::DeleteMeasurementsForSubParts => "deleting measurements for sub parts",
            Feature::CreateVersionEntries => "creating inspection plan version entries",
            Feature::CheckAttributeUsage => "checking attribute usage",
            Feature::DistinctMeasurementValueSearch => {
                "fetching distinct measurement attribute values"
            }
            Feature::RestrictMeasurementSearchByMergeAttributes => {
                "restricting measurement search by merge attributes"
            }
            Feature::RestrictMeasurementSearchByMergeMasterPart => {
                "restricting measurement search by merge master part"
            }
            Feature::ClearPart => "clearing a part",
            Feature::CharacteristicUuidRestrictedFetch => {
                "restricting characteristic fetch by uuids"
            }
        }
    }
}

/// Boolean capability flags for one server, computed at construction
#[derive(Clone, Debug)]
pub struct FeatureMatrix {
    current_version: ApiVersion,
    supported: [bool; Feature::ALL.len()],
}

impl FeatureMatrix {
    /// Builds the matrix from the server's reported version range. An
    /// empty range is treated as the oldest interface version 1.0.0,
    /// matching servers that predate version reporting.
    pub fn new(range: &InterfaceVersionRange) -> Self {
        let current_version = range
            .current_version()
            .unwrap_or(ApiVersion::new(1, 0, 0));

        let mut supported = [false; Feature::ALL.len()];
        for (flag, feature) in supported.iter_mut().zip(Feature::ALL) {
            *flag = current_version >= feature.min_version();
        }

        Self {
            current_version,
            supported,
        }
    }

    /// The interface version capability checks are evaluated against
    pub fn current_version(&self) -> ApiVersion {
        self.current_version
    }

    /// Whether the server supports the given feature
    pub fn supports(&self, feature: Feature) -> bool {
        self.supported[feature as usize]
    }

    /// Fails with [`DataServiceError::OperationNotSupported`] naming the
    /// required and reported versions when the feature is unavailable.
    pub fn require(&self, feature: Feature) -> Result<()> {
        if self.supports(feature) {
            Ok(())
        } else {
            Err(DataServiceError::OperationNotSupported {
                feature: feature.describe(),
                min_version: feature.min_version(),
                current_version: self.current_version,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(version: ApiVersion) -> FeatureMatrix {
        FeatureMatrix::new(&InterfaceVersionRange::single(version))
    }

    #[test]
    fn test_oldest_server_supports_nothing_optional() {
        let matrix = matrix(ApiVersion::new(1, 0, 0));
        for feature in Feature::ALL {
            assert!(!matrix.supports(feature), "{feature:?}");
        }
    }

    #[test]
    fn test_flags_by_version() {
        let mid = matrix(ApiVersion::new(1, 2, 0));
        assert!(mid.supports(Feature::CheckAttributeUsage));
        assert!(!mid.supports(Feature::RestrictMeasurementSearchByMergeMasterPart));
        assert!(!mid.supports(Feature::ClearPart));

        let newest = matrix(ApiVersion::new(1, 5, 0));
        for feature in Feature::ALL {
            assert!(newest.supports(feature), "{feature:?}");
        }
    }

    #[test]
    fn test_flags_monotonic_in_version() {
        let versions = [
            ApiVersion::new(1, 0, 0),
            ApiVersion::new(1, 1, 0),
            ApiVersion::new(1, 2, 0),
            ApiVersion::new(1, 4, 0),
            ApiVersion::new(1, 5, 0),
            ApiVersion::new(1, 5, 1),
            ApiVersion::new(2, 0, 0),
        ];

        for pair in versions.windows(2) {
            let older = matrix(pair[0]);
            let newer = matrix(pair[1]);
            for feature in Feature::ALL {
                if older.supports(feature) {
                    assert!(newer.supports(feature), "{feature:?} regressed at {}", pair[1]);
                }
            }
        }
    }

    #[test]
    fn test_range_reduces_to_highest_version() {
        let range = InterfaceVersionRange {
            supported_versions: vec![
                ApiVersion::new(1, 0, 0),
                ApiVersion::new(1, 4, 0),
                ApiVersion::new(1, 2, 0),
            ],
        };
        let matrix = FeatureMatrix::new(&range);
        assert_eq!(matrix.current_version(), ApiVersion::new(1, 4, 0));
        assert!(matrix.supports(Feature::RestrictMeasurementSearchByMergeMasterPart));
    }

    #[test]
    fn test_empty_range_treated_as_oldest_version() {
        let matrix = FeatureMatrix::new(&InterfaceVersionRange::default());
        assert_eq!(matrix.current_version(), ApiVersion::new(1, 0, 0));
    }

    #[test]
    fn test_require_names_versions() {
        let matrix = matrix(ApiVersion::new(1, 0, 0));
        let err = matrix.require(Feature::ClearPart).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("1.5.0"));
        assert!(message.contains("1.0.0"));
        assert!(message.contains("clearing a part"));
    }
}
