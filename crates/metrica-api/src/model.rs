//! DTO types for the measurement data service
//!
//! Entities carry their descriptive data as key/value attribute lists;
//! attribute semantics are defined by the server side configuration and
//! are opaque to the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entity attribute, identified by its numeric key
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: u16,
    pub value: String,
}

impl Attribute {
    pub fn new(key: u16, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// The kinds of entities an attribute definition can belong to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Part,
    Characteristic,
    Measurement,
    Value,
    Catalog,
}

impl EntityKind {
    /// Path segment used when addressing per-entity configuration
    pub fn as_path_segment(self) -> &'static str {
        match self {
            EntityKind::Part => "part",
            EntityKind::Characteristic => "characteristic",
            EntityKind::Measurement => "measurement",
            EntityKind::Value => "value",
            EntityKind::Catalog => "catalog",
        }
    }
}

/// Definition of an attribute key within the server configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub key: u16,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u16>,
    #[serde(default)]
    pub query_efficient: bool,
}

/// An inspection plan part node
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionPlanPart {
    pub uuid: Uuid,
    pub path: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub version: u32,
}

/// An inspection plan characteristic node
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionPlanCharacteristic {
    pub uuid: Uuid,
    pub path: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A catalog with its valid attribute keys and entries
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub valid_attributes: Vec<u16>,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

/// One entry of a catalog, addressed by its numeric key
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub key: i16,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A measurement without its measured values
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleMeasurement {
    pub uuid: Uuid,
    pub part_uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A measurement together with the values measured per characteristic.
///
/// This is the entity reassembled by the client when a values query is
/// split along the characteristic axis: the same measurement then shows up
/// in several responses, each carrying a disjoint slice of
/// `characteristics`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementValues {
    pub uuid: Uuid,
    pub part_uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub characteristics: Vec<CharacteristicValue>,
}

/// The measured value of one characteristic within a measurement
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicValue {
    pub uuid: Uuid,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// General information reported by the data service
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInformation {
    pub version: String,
    #[serde(default)]
    pub security_enabled: bool,
    #[serde(default)]
    pub part_count: u64,
    #[serde(default)]
    pub characteristic_count: u64,
    #[serde(default)]
    pub measurement_count: u64,
    #[serde(default)]
    pub value_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_serialization() {
        let measurement = SimpleMeasurement {
            uuid: Uuid::nil(),
            part_uuid: Uuid::nil(),
            time: None,
            attributes: vec![Attribute::new(4, "2024-01-01T00:00:00Z")],
        };

        let json = serde_json::to_string(&measurement).unwrap();
        assert!(json.contains("\"partUuid\""));
        assert!(!json.contains("\"time\""));

        let deserialized: SimpleMeasurement = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.attributes.len(), 1);
        assert_eq!(deserialized.attributes[0].key, 4);
    }

    #[test]
    fn test_measurement_values_defaults() {
        let json = r#"{"uuid":"5eec99ba-0b90-4728-9dcc-2259c9f1af6a","partUuid":"05550c4c-f0af-46b8-810e-30c0c00a379e"}"#;
        let values: MeasurementValues = serde_json::from_str(json).unwrap();
        assert!(values.characteristics.is_empty());
        assert!(values.attributes.is_empty());
    }

    #[test]
    fn test_entity_kind_path_segment() {
        assert_eq!(EntityKind::Part.as_path_segment(), "part");
        assert_eq!(EntityKind::Catalog.as_path_segment(), "catalog");
    }

    #[test]
    fn test_service_information_deserialization() {
        let json = r#"{"version":"7.8.0","securityEnabled":true,"partCount":12,"characteristicCount":480,"measurementCount":100,"valueCount":4000}"#;
        let info: ServiceInformation = serde_json::from_str(json).unwrap();
        assert_eq!(info.version, "7.8.0");
        assert!(info.security_enabled);
        assert_eq!(info.value_count, 4000);
    }
}
