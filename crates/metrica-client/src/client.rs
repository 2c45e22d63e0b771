//! Typed client facade for the data service
//!
//! Every operation takes a [`CancellationToken`] and is dispatched through
//! the [`Transport`] seam. Operations carrying identifier collections are
//! split into multiple physical requests when the serialized request would
//! exceed the transport's URI length limit; split requests along one axis
//! run concurrently and fail fast as a group.

use std::sync::Arc;

use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

use metrica_api::{
    ApiVersion, Catalog, EntityKind, InspectionPlanCharacteristic, InspectionPlanPart,
    InterfaceVersionRange, MeasurementValues, ServiceInformation, SimpleMeasurement,
};

use crate::cache::{FetchBehavior, VersionCache, VersionInfo};
use crate::config::ClientConfig;
use crate::constants::{MAX_PATH_SEGMENT_LENGTH, UUID_TOKEN_LENGTH, api_path, param};
use crate::error::Result;
use crate::feature::{Feature, FeatureMatrix};
use crate::filter::{AggregationSelection, MeasurementFilter, MeasurementValueFilter};
use crate::merge::merge_fragments;
use crate::request::{CollectionParameter, ParameterDefinition, RestRequest};
use crate::split::{ParameterSplitter, split_chunks};
use crate::transport::{HttpTransport, Transport};

/// Client for the measurement data service
pub struct DataServiceClient<T: Transport> {
    transport: T,
    versions: VersionCache,
}

impl DataServiceClient<HttpTransport> {
    /// Client talking to the service described by `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> DataServiceClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            versions: VersionCache::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // --- service metadata -------------------------------------------------

    /// Fetches general information about the service and its database
    pub async fn service_information(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ServiceInformation> {
        self.transport
            .dispatch(RestRequest::get(api_path::SERVICE_INFORMATION, vec![]), cancel)
            .await
    }

    /// The interface versions the server supports. Servers predating
    /// version reporting answer the endpoint root with 404; those are
    /// treated as interface version 1.0.0.
    pub async fn interface_information(
        &self,
        cancel: &CancellationToken,
    ) -> Result<InterfaceVersionRange> {
        let request = RestRequest::get(api_path::INTERFACE_INFORMATION, vec![]);
        match self.transport.dispatch(request, cancel).await {
            Ok(range) => Ok(range),
            Err(err) if err.is_status(404) => {
                Ok(InterfaceVersionRange::single(ApiVersion::new(1, 0, 0)))
            }
            Err(err) => Err(err),
        }
    }

    /// Capability matrix for the connected server
    pub async fn feature_matrix(
        &self,
        behavior: FetchBehavior,
        cancel: &CancellationToken,
    ) -> Result<FeatureMatrix> {
        Ok(self.version_info(behavior, cancel).await?.features.clone())
    }

    // --- attribute configuration ------------------------------------------

    /// Whether any entity carries the given attribute value. Needs a
    /// server that supports usage checks; a 404 answer means unused.
    pub async fn check_attribute_usage(
        &self,
        attribute_key: u16,
        value: &str,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
        info.features.require(Feature::CheckAttributeUsage)?;

        let path = format!("{}/{attribute_key}/\"{value}\"", api_path::ATTRIBUTES);
        match self.transport.send(RestRequest::get(path, vec![]), cancel).await {
            Ok(()) => Ok(true),
            Err(err) if err.is_status(404) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Whether any entity references the given catalog entry
    pub async fn check_catalog_entry_usage(
        &self,
        attribute_key: u16,
        catalog_entry_index: u16,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        self.check_attribute_usage(attribute_key, &catalog_entry_index.to_string(), cancel)
            .await
    }

    /// Deletes attribute definitions of one entity kind. The keys travel
    /// as a path segment, so chunks are sized against the path segment
    /// limit rather than the query budget. No keys deletes them all.
    pub async fn delete_attribute_definitions(
        &self,
        entity: EntityKind,
        keys: &[u16],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let base_path = format!("{}/{}", api_path::CONFIGURATION, entity.as_path_segment());

        if keys.is_empty() {
            return self.transport.send(RestRequest::delete(base_path, vec![]), cancel).await;
        }

        self.delete_by_path_segments(&base_path, &CollectionParameter::from_keys("keys", keys), cancel)
            .await
    }

    // --- parts ------------------------------------------------------------

    /// Fetches parts below a path. With uuids given, each part is fetched
    /// individually instead.
    pub async fn get_parts(
        &self,
        part_path: Option<&str>,
        part_uuids: &[Uuid],
        depth: Option<u16>,
        cancel: &CancellationToken,
    ) -> Result<Vec<InspectionPlanPart>> {
        if !part_uuids.is_empty() {
            let requests = part_uuids
                .iter()
                .map(|uuid| self.get_part_by_uuid(*uuid, cancel));
            return try_join_all(requests).await;
        }

        let mut parameters = Vec::new();
        if let Some(path) = part_path {
            parameters.push(ParameterDefinition::new(param::PART_PATH, path));
        }
        if let Some(depth) = depth {
            parameters.push(ParameterDefinition::new("depth", depth.to_string()));
        }

        self.transport
            .dispatch(RestRequest::get(api_path::PARTS, parameters), cancel)
            .await
    }

    pub async fn get_part_by_uuid(
        &self,
        part_uuid: Uuid,
        cancel: &CancellationToken,
    ) -> Result<InspectionPlanPart> {
        let path = format!("{}/{part_uuid}", api_path::PARTS);
        self.transport.dispatch(RestRequest::get(path, vec![]), cancel).await
    }

    /// Creates parts. Version entries for the new parts require a server
    /// that supports inspection plan versioning.
    pub async fn create_parts(
        &self,
        parts: &[InspectionPlanPart],
        versioning_enabled: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let mut parameters = Vec::new();
        if versioning_enabled {
            let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
            info.features.require(Feature::CreateVersionEntries)?;
            parameters.push(ParameterDefinition::new("versioningEnabled", "true"));
        }

        let body = serde_json::to_value(parts)?;
        self.transport
            .send(RestRequest::post(api_path::PARTS, body, parameters), cancel)
            .await
    }

    /// Deletes the part at `part_path` and everything below it
    pub async fn delete_parts_by_path(
        &self,
        part_path: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let parameters = vec![ParameterDefinition::new(param::PART_PATH, part_path)];
        self.transport
            .send(RestRequest::delete(api_path::PARTS, parameters), cancel)
            .await
    }

    /// Deletes parts by uuid, split over multiple requests when the uuid
    /// list exceeds the URI budget
    pub async fn delete_parts(&self, part_uuids: &[Uuid], cancel: &CancellationToken) -> Result<()> {
        let collection = CollectionParameter::from_uuids(param::PART_UUIDS, part_uuids);
        self.delete_by_query(api_path::PARTS, &collection, cancel).await
    }

    /// Removes all entities below a part while keeping the part itself.
    /// Entity kinds in `keep` survive the clearing.
    pub async fn clear_part(
        &self,
        part_uuid: Uuid,
        keep: &[EntityKind],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
        info.features.require(Feature::ClearPart)?;

        let mut parameters = Vec::new();
        if !keep.is_empty() {
            let kinds: Vec<&str> = keep.iter().map(|k| k.as_path_segment()).collect();
            parameters.push(ParameterDefinition::new("keep", kinds.join(",")));
        }

        let request = RestRequest {
            method: crate::request::HttpMethod::Post,
            path: format!("{}/{part_uuid}/clear", api_path::PARTS),
            parameters,
            body: None,
        };
        self.transport.send(request, cancel).await
    }

    // --- characteristics --------------------------------------------------

    /// Fetches characteristics by uuid. Servers that support uuid
    /// restricted fetching answer chunked collection requests; older
    /// servers are queried one characteristic at a time.
    pub async fn get_characteristics_by_uuids(
        &self,
        characteristic_uuids: &[Uuid],
        cancel: &CancellationToken,
    ) -> Result<Vec<InspectionPlanCharacteristic>> {
        if characteristic_uuids.is_empty() {
            return Ok(Vec::new());
        }

        let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
        if !info.features.supports(Feature::CharacteristicUuidRestrictedFetch) {
            let requests = characteristic_uuids.iter().map(|uuid| {
                let path = format!("{}/{uuid}", api_path::CHARACTERISTICS);
                self.transport.dispatch(RestRequest::get(path, vec![]), cancel)
            });
            return try_join_all(requests).await;
        }

        let collection =
            CollectionParameter::from_uuids(param::CHARACTERISTIC_UUIDS, characteristic_uuids);
        let sets = ParameterSplitter::for_transport(&self.transport).split(
            api_path::CHARACTERISTICS,
            &collection,
            &[],
        )?;
        debug!(chunks = sets.len(), "fetching characteristics by uuid");

        let requests = sets.into_iter().map(|set| {
            self.transport
                .dispatch::<Vec<InspectionPlanCharacteristic>>(
                    RestRequest::get(api_path::CHARACTERISTICS, set),
                    cancel,
                )
        });
        let fragments = try_join_all(requests).await?;
        Ok(fragments.into_iter().flatten().collect())
    }

    /// Deletes characteristics by uuid, split over multiple requests when
    /// needed
    pub async fn delete_characteristics(
        &self,
        characteristic_uuids: &[Uuid],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let collection =
            CollectionParameter::from_uuids(param::CHARACTERISTIC_UUIDS, characteristic_uuids);
        self.delete_by_query(api_path::CHARACTERISTICS, &collection, cancel).await
    }

    // --- catalogs ---------------------------------------------------------

    pub async fn get_all_catalogs(&self, cancel: &CancellationToken) -> Result<Vec<Catalog>> {
        self.transport
            .dispatch(RestRequest::get(api_path::CATALOGS, vec![]), cancel)
            .await
    }

    /// Deletes catalogs by uuid. The uuids travel as a path segment; no
    /// uuids deletes every catalog.
    pub async fn delete_catalogs(
        &self,
        catalog_uuids: &[Uuid],
        cancel: &CancellationToken,
    ) -> Result<()> {
        if catalog_uuids.is_empty() {
            return self
                .transport
                .send(RestRequest::delete(api_path::CATALOGS, vec![]), cancel)
                .await;
        }

        let collection = CollectionParameter::from_uuids("catalogUuids", catalog_uuids);
        self.delete_by_path_segments(api_path::CATALOGS, &collection, cancel).await
    }

    /// Deletes entries of one catalog by key. No keys deletes all entries.
    pub async fn delete_catalog_entries(
        &self,
        catalog_uuid: Uuid,
        keys: &[i16],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let base_path = format!("{}/{catalog_uuid}", api_path::CATALOGS);

        if keys.is_empty() {
            return self.transport.send(RestRequest::delete(base_path, vec![]), cancel).await;
        }

        self.delete_by_path_segments(&base_path, &CollectionParameter::from_keys("keys", keys), cancel)
            .await
    }

    // --- measurements -----------------------------------------------------

    /// Searches measurements without their values. A large measurement or
    /// part uuid restriction is split into concurrent chunk requests;
    /// results are concatenated in chunk order.
    pub async fn get_measurements(
        &self,
        part_path: Option<&str>,
        filter: &MeasurementFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<SimpleMeasurement>> {
        self.require_merge_features(
            filter.restricts_by_merge_attributes(),
            filter.restricts_by_merge_master_part(),
            cancel,
        )
        .await?;

        if !filter.measurement_uuids.is_empty() {
            let mut remainder = filter.clone();
            remainder.measurement_uuids.clear();
            let collection =
                CollectionParameter::from_uuids(param::MEASUREMENT_UUIDS, &filter.measurement_uuids);
            return self
                .fetch_measurement_chunks(part_path, &remainder, &collection, cancel)
                .await;
        }

        if !filter.part_uuids.is_empty() {
            let mut remainder = filter.clone();
            remainder.part_uuids.clear();
            let collection =
                CollectionParameter::from_uuids(param::PART_UUIDS, &filter.part_uuids);
            return self
                .fetch_measurement_chunks(part_path, &remainder, &collection, cancel)
                .await;
        }

        let parameters = restriction_parameters(part_path, filter.to_parameters());
        self.transport
            .dispatch(RestRequest::get(api_path::MEASUREMENTS, parameters), cancel)
            .await
    }

    /// Distinct values of one measurement attribute, optionally restricted
    /// by a filter. Needs a server that supports distinct value search.
    pub async fn get_distinct_measurement_values(
        &self,
        attribute_key: u16,
        part_path: Option<&str>,
        filter: &MeasurementFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
        info.features.require(Feature::DistinctMeasurementValueSearch)?;

        let path = api_path::DISTINCT_MEASUREMENT_VALUES;

        if !filter.measurement_uuids.is_empty() {
            let mut remainder = filter.clone();
            remainder.measurement_uuids.clear();

            let mut fixed = restriction_parameters(part_path, remainder.to_parameters());
            fixed.push(ParameterDefinition::new("key", attribute_key.to_string()));

            let collection =
                CollectionParameter::from_uuids(param::MEASUREMENT_UUIDS, &filter.measurement_uuids);
            let sets =
                ParameterSplitter::for_transport(&self.transport).split(path, &collection, &fixed)?;

            let requests = sets.into_iter().map(|set| {
                self.transport
                    .dispatch::<Vec<String>>(RestRequest::get(path, set), cancel)
            });
            let fragments = try_join_all(requests).await?;
            return Ok(fragments.into_iter().flatten().collect());
        }

        let mut parameters = restriction_parameters(part_path, filter.to_parameters());
        parameters.push(ParameterDefinition::new("key", attribute_key.to_string()));
        self.transport
            .dispatch(RestRequest::get(path, parameters), cancel)
            .await
    }

    /// Deletes measurements by uuid, split over multiple requests when
    /// needed
    pub async fn delete_measurements(
        &self,
        measurement_uuids: &[Uuid],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let collection =
            CollectionParameter::from_uuids(param::MEASUREMENT_UUIDS, measurement_uuids);
        self.delete_by_query(api_path::MEASUREMENTS, &collection, cancel).await
    }

    /// Deletes the measurements of the part at `part_path`. Deleting for
    /// sub parts as well needs a server that supports deep deletion.
    pub async fn delete_measurements_by_part_path(
        &self,
        part_path: &str,
        aggregation: AggregationSelection,
        deep: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let mut parameters = vec![ParameterDefinition::new(param::PART_PATH, part_path)];

        if aggregation != AggregationSelection::Default {
            parameters.push(ParameterDefinition::new(
                "aggregation",
                aggregation.as_query_value(),
            ));
        }

        if deep {
            let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
            info.features.require(Feature::DeleteMeasurementsForSubParts)?;
            parameters.push(ParameterDefinition::new("deep", "true"));
        }

        self.transport
            .send(RestRequest::delete(api_path::MEASUREMENTS, parameters), cancel)
            .await
    }

    pub async fn create_measurements(
        &self,
        measurements: &[SimpleMeasurement],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let body = serde_json::to_value(measurements)?;
        self.transport
            .send(RestRequest::post(api_path::MEASUREMENTS, body, vec![]), cancel)
            .await
    }

    pub async fn update_measurements(
        &self,
        measurements: &[SimpleMeasurement],
        cancel: &CancellationToken,
    ) -> Result<()> {
        let body = serde_json::to_value(measurements)?;
        self.transport
            .send(RestRequest::put(api_path::MEASUREMENTS, body, vec![]), cancel)
            .await
    }

    /// Searches measurements together with their values.
    ///
    /// Both the measurement and the characteristic restriction may exceed
    /// the URI budget. The measurement axis is split first; each
    /// measurement chunk then cascades into sequential characteristic
    /// chunk requests, so the request count is the sum of both chunk
    /// counts rather than their product. Measurements partially fetched
    /// per characteristic chunk are merged back into complete entities.
    pub async fn get_measurement_values(
        &self,
        part_path: Option<&str>,
        filter: &MeasurementValueFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<MeasurementValues>> {
        self.require_merge_features(
            filter.restricts_by_merge_attributes(),
            filter.restricts_by_merge_master_part(),
            cancel,
        )
        .await?;

        if !filter.measurement_uuids.is_empty() {
            return self.fetch_values_split_by_measurements(part_path, filter, cancel).await;
        }

        if !filter.characteristic_uuids.is_empty() {
            return self
                .fetch_values_split_by_characteristics(part_path, filter, cancel)
                .await;
        }

        let parameters = restriction_parameters(part_path, filter.to_parameters());
        self.transport
            .dispatch(RestRequest::get(api_path::VALUES, parameters), cancel)
            .await
    }

    // --- internals --------------------------------------------------------

    async fn version_info(
        &self,
        behavior: FetchBehavior,
        cancel: &CancellationToken,
    ) -> Result<Arc<VersionInfo>> {
        if behavior == FetchBehavior::FetchIfNotCached {
            if let Some(info) = self.versions.get() {
                return Ok(info);
            }
        }

        let range = self.interface_information(cancel).await?;
        Ok(self.versions.store(VersionInfo::new(range)))
    }

    async fn require_merge_features(
        &self,
        merge_attributes: bool,
        merge_master_part: bool,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if merge_attributes {
            let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
            info.features
                .require(Feature::RestrictMeasurementSearchByMergeAttributes)?;
        }
        if merge_master_part {
            let info = self.version_info(FetchBehavior::FetchIfNotCached, cancel).await?;
            info.features
                .require(Feature::RestrictMeasurementSearchByMergeMasterPart)?;
        }
        Ok(())
    }

    /// Chunked GET against one collection axis, chunks dispatched
    /// concurrently and concatenated in order
    async fn fetch_measurement_chunks(
        &self,
        part_path: Option<&str>,
        remainder: &MeasurementFilter,
        collection: &CollectionParameter,
        cancel: &CancellationToken,
    ) -> Result<Vec<SimpleMeasurement>> {
        let fixed = restriction_parameters(part_path, remainder.to_parameters());
        let sets = ParameterSplitter::for_transport(&self.transport).split(
            api_path::MEASUREMENTS,
            collection,
            &fixed,
        )?;
        debug!(axis = %collection.name, chunks = sets.len(), "fetching measurements in chunks");

        let requests = sets.into_iter().map(|set| {
            self.transport
                .dispatch::<Vec<SimpleMeasurement>>(RestRequest::get(api_path::MEASUREMENTS, set), cancel)
        });
        let fragments = try_join_all(requests).await?;
        Ok(fragments.into_iter().flatten().collect())
    }

    async fn fetch_values_split_by_measurements(
        &self,
        part_path: Option<&str>,
        filter: &MeasurementValueFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<MeasurementValues>> {
        let mut remainder = filter.clone();
        remainder.measurement_uuids.clear();

        let fixed = restriction_parameters(part_path, remainder.to_parameters());
        let budget = ParameterSplitter::for_transport(&self.transport).budget_for(
            api_path::VALUES,
            param::MEASUREMENT_UUIDS,
            &fixed,
        );
        let chunks = split_chunks(&filter.measurement_uuids, budget, |_| UUID_TOKEN_LENGTH);
        debug!(chunks = chunks.len(), "fetching measurement values in measurement chunks");

        let requests = chunks.into_iter().map(|chunk| {
            let mut chunk_filter = remainder.clone();
            chunk_filter.measurement_uuids = chunk;
            async move {
                if chunk_filter.characteristic_uuids.is_empty() {
                    let parameters =
                        restriction_parameters(part_path, chunk_filter.to_parameters());
                    self.transport
                        .dispatch::<Vec<MeasurementValues>>(
                            RestRequest::get(api_path::VALUES, parameters),
                            cancel,
                        )
                        .await
                } else {
                    self.fetch_values_split_by_characteristics(part_path, &chunk_filter, cancel)
                        .await
                }
            }
        });
        let fragments = try_join_all(requests).await?;
        Ok(fragments.into_iter().flatten().collect())
    }

    /// Splits the characteristic restriction and merges the partially
    /// fetched measurements back together. Chunks run sequentially: each
    /// one returns the same measurements with a different slice of their
    /// values.
    async fn fetch_values_split_by_characteristics(
        &self,
        part_path: Option<&str>,
        filter: &MeasurementValueFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<MeasurementValues>> {
        let mut remainder = filter.clone();
        remainder.characteristic_uuids.clear();

        let fixed = restriction_parameters(part_path, remainder.to_parameters());
        let budget = ParameterSplitter::for_transport(&self.transport).budget_for(
            api_path::VALUES,
            param::CHARACTERISTIC_UUIDS,
            &fixed,
        );
        let chunks = split_chunks(&filter.characteristic_uuids, budget, |_| UUID_TOKEN_LENGTH);
        debug!(chunks = chunks.len(), "fetching measurement values in characteristic chunks");

        let mut fragments = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let mut chunk_filter = remainder.clone();
            chunk_filter.characteristic_uuids = chunk;

            let parameters = restriction_parameters(part_path, chunk_filter.to_parameters());
            let fragment: Vec<MeasurementValues> = self
                .transport
                .dispatch(RestRequest::get(api_path::VALUES, parameters), cancel)
                .await?;
            fragments.push(fragment);
        }

        Ok(merge_fragments(fragments))
    }

    /// Chunked DELETE with the collection as a query parameter, chunks
    /// dispatched concurrently
    async fn delete_by_query(
        &self,
        path: &str,
        collection: &CollectionParameter,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if collection.tokens.is_empty() {
            return Ok(());
        }

        let sets = ParameterSplitter::for_transport(&self.transport).split(path, collection, &[])?;
        debug!(path, chunks = sets.len(), "deleting in chunks");

        let requests = sets
            .into_iter()
            .map(|set| self.transport.send(RestRequest::delete(path, set), cancel));
        try_join_all(requests).await?;
        Ok(())
    }

    /// Chunked DELETE with the collection as a path segment, sized
    /// against the path segment limit
    async fn delete_by_path_segments(
        &self,
        base_path: &str,
        collection: &CollectionParameter,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let chunks = split_chunks(&collection.tokens, MAX_PATH_SEGMENT_LENGTH, String::len);
        debug!(base_path, chunks = chunks.len(), "deleting by path segment chunks");

        let requests = chunks.into_iter().map(|chunk| {
            let path = format!("{base_path}/{}", CollectionParameter::join(&chunk));
            self.transport.send(RestRequest::delete(path, vec![]), cancel)
        });
        try_join_all(requests).await?;
        Ok(())
    }
}

/// Filter parameters plus the part path restriction, in request order
fn restriction_parameters(
    part_path: Option<&str>,
    mut parameters: Vec<ParameterDefinition>,
) -> Vec<ParameterDefinition> {
    if let Some(path) = part_path {
        parameters.push(ParameterDefinition::new(param::PART_PATH, path));
    }
    parameters
}
