// REST path constants and transport limits for the data service

/// Relative paths below the data service endpoint
pub mod api_path {
    pub const SERVICE_INFORMATION: &str = "serviceInformation";
    /// The endpoint root reports the supported interface versions.
    /// Servers predating interface 1.1.0 do not expose it at all.
    pub const INTERFACE_INFORMATION: &str = "";

    pub const CONFIGURATION: &str = "configuration";
    pub const ATTRIBUTES: &str = "attributes";

    pub const PARTS: &str = "parts";
    pub const CHARACTERISTICS: &str = "characteristics";
    pub const CATALOGS: &str = "catalogs";

    pub const MEASUREMENTS: &str = "measurements";
    pub const VALUES: &str = "values";
    pub const DISTINCT_MEASUREMENT_VALUES: &str = "distinctMeasurementAttributeValues";
}

/// Query parameter names for identifier collections
pub mod param {
    pub const PART_UUIDS: &str = "partUuids";
    pub const MEASUREMENT_UUIDS: &str = "measurementUuids";
    pub const CHARACTERISTIC_UUIDS: &str = "characteristicUuids";
    pub const PART_PATH: &str = "partPath";
}

/// Default upper bound for the total request URI length
pub const DEFAULT_MAX_URI_LENGTH: usize = 8 * 1024;

/// Upper bound for a single path segment. Identifier collections embedded
/// as a path segment are split against this budget instead of the
/// computed query budget.
pub const MAX_PATH_SEGMENT_LENGTH: usize = 255;

/// Serialized length of a uuid token (hyphenated, no braces)
pub const UUID_TOKEN_LENGTH: usize = 36;
