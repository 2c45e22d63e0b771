//! Search filters for measurement and measurement value queries
//!
//! Filters serialize into query parameters via [`to_parameters`]. The
//! identifier list fields are public so the dispatch layer can clear one
//! axis on a working copy and re-inject it chunk by chunk.
//!
//! [`to_parameters`]: MeasurementFilter::to_parameters

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::constants::param;
use crate::request::{CollectionParameter, ParameterDefinition};

/// Whether aggregated measurements take part in a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AggregationSelection {
    /// Regular measurements only
    #[default]
    Default,
    /// Regular and aggregated measurements
    All,
    /// Aggregated measurements only
    AggregationsOnly,
}

impl AggregationSelection {
    pub(crate) fn as_query_value(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::All => "all",
            Self::AggregationsOnly => "aggregationsOnly",
        }
    }
}

/// Restrictions for fetching measurements without values
#[derive(Clone, Debug, Default)]
pub struct MeasurementFilter {
    pub part_uuids: Vec<Uuid>,
    pub measurement_uuids: Vec<Uuid>,
    /// Include measurements of sub parts below the queried path
    pub deep: bool,
    pub from_modification_date: Option<DateTime<Utc>>,
    pub to_modification_date: Option<DateTime<Utc>>,
    /// Maximum number of returned measurements, unlimited when absent
    pub limit: Option<u32>,
    pub aggregation: AggregationSelection,
    /// Attribute keys that restrict the search to merged measurements
    pub merge_attributes: Vec<u16>,
    pub merge_master_part: Option<Uuid>,
}

impl MeasurementFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes every set restriction into query parameters. Identifier
    /// lists are emitted comma-joined; callers that split an axis clear
    /// the corresponding field on a clone first.
    pub fn to_parameters(&self) -> Vec<ParameterDefinition> {
        let mut parameters = Vec::new();

        push_uuid_list(&mut parameters, param::PART_UUIDS, &self.part_uuids);
        push_uuid_list(
            &mut parameters,
            param::MEASUREMENT_UUIDS,
            &self.measurement_uuids,
        );

        if self.deep {
            parameters.push(ParameterDefinition::new("deep", "true"));
        }
        if let Some(from) = self.from_modification_date {
            parameters.push(ParameterDefinition::new(
                "fromModificationDate",
                from.to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }
        if let Some(to) = self.to_modification_date {
            parameters.push(ParameterDefinition::new(
                "toModificationDate",
                to.to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }
        if let Some(limit) = self.limit {
            parameters.push(ParameterDefinition::new("limitResult", limit.to_string()));
        }
        if self.aggregation != AggregationSelection::Default {
            parameters.push(ParameterDefinition::new(
                "aggregation",
                self.aggregation.as_query_value(),
            ));
        }
        if !self.merge_attributes.is_empty() {
            let keys = CollectionParameter::from_keys("mergeAttributes", &self.merge_attributes);
            parameters.push(ParameterDefinition::new(
                keys.name,
                CollectionParameter::join(&keys.tokens),
            ));
        }
        if let Some(master) = self.merge_master_part {
            parameters.push(ParameterDefinition::new(
                "mergeMasterPart",
                master.to_string(),
            ));
        }

        parameters
    }

    /// True when the search is narrowed by merged-measurement attributes
    pub fn restricts_by_merge_attributes(&self) -> bool {
        !self.merge_attributes.is_empty()
    }

    pub fn restricts_by_merge_master_part(&self) -> bool {
        self.merge_master_part.is_some()
    }
}

/// Restrictions for fetching measurements together with their values
#[derive(Clone, Debug, Default)]
pub struct MeasurementValueFilter {
    pub part_uuids: Vec<Uuid>,
    pub measurement_uuids: Vec<Uuid>,
    /// Restrict returned values to these characteristics
    pub characteristic_uuids: Vec<Uuid>,
    pub deep: bool,
    pub from_modification_date: Option<DateTime<Utc>>,
    pub to_modification_date: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub aggregation: AggregationSelection,
    pub merge_attributes: Vec<u16>,
    pub merge_master_part: Option<Uuid>,
}

impl MeasurementValueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_parameters(&self) -> Vec<ParameterDefinition> {
        let mut parameters = self.measurement_parameters().to_parameters();
        // the shared serialization has no characteristic axis; splice it
        // in behind the other identifier lists
        if !self.characteristic_uuids.is_empty() {
            let index = parameters
                .iter()
                .take_while(|p| p.name == param::PART_UUIDS || p.name == param::MEASUREMENT_UUIDS)
                .count();
            let value = CollectionParameter::from_uuids(
                param::CHARACTERISTIC_UUIDS,
                &self.characteristic_uuids,
            );
            parameters.insert(
                index,
                ParameterDefinition::new(value.name, CollectionParameter::join(&value.tokens)),
            );
        }
        parameters
    }

    pub fn restricts_by_merge_attributes(&self) -> bool {
        !self.merge_attributes.is_empty()
    }

    pub fn restricts_by_merge_master_part(&self) -> bool {
        self.merge_master_part.is_some()
    }

    /// The measurement-level part of this filter, characteristic axis
    /// excluded
    fn measurement_parameters(&self) -> MeasurementFilter {
        MeasurementFilter {
            part_uuids: self.part_uuids.clone(),
            measurement_uuids: self.measurement_uuids.clone(),
            deep: self.deep,
            from_modification_date: self.from_modification_date,
            to_modification_date: self.to_modification_date,
            limit: self.limit,
            aggregation: self.aggregation,
            merge_attributes: self.merge_attributes.clone(),
            merge_master_part: self.merge_master_part,
        }
    }
}

fn push_uuid_list(parameters: &mut Vec<ParameterDefinition>, name: &str, uuids: &[Uuid]) {
    if !uuids.is_empty() {
        let collection = CollectionParameter::from_uuids(name, uuids);
        parameters.push(ParameterDefinition::new(
            collection.name,
            CollectionParameter::join(&collection.tokens),
        ));
    }
}
