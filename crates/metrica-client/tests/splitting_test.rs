//! Property tests for the request splitting layer.

use proptest::prelude::*;
use uuid::Uuid;

use metrica_client::{
    CollectionParameter, ParameterDefinition, ParameterSplitter,
    split::{split_chunks, uri_target_size},
};

fn serialized_length(tokens: &[String]) -> usize {
    CollectionParameter::join(tokens).len()
}

proptest! {
    /// Concatenating all chunks, in order, reproduces the input exactly
    #[test]
    fn prop_chunks_reassemble_exactly(
        tokens in prop::collection::vec("[a-z0-9]{1,40}", 0..200),
        budget in 0usize..256,
    ) {
        let chunks = split_chunks(&tokens, budget, String::len);
        let reassembled: Vec<String> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(reassembled, tokens);
    }

    /// No chunk of two or more tokens exceeds the budget, and no chunk is
    /// empty
    #[test]
    fn prop_chunks_respect_budget(
        tokens in prop::collection::vec("[a-z0-9]{1,40}", 1..200),
        budget in 1usize..256,
    ) {
        for chunk in split_chunks(&tokens, budget, String::len) {
            prop_assert!(!chunk.is_empty());
            if chunk.len() > 1 {
                prop_assert!(serialized_length(&chunk) <= budget);
            }
        }
    }

    /// A budget that fits at least one token never produces an oversized
    /// chunk at all
    #[test]
    fn prop_sufficient_budget_never_oversizes(
        count in 1usize..300,
        budget in 36usize..2048,
    ) {
        let tokens: Vec<String> = (0..count).map(|_| Uuid::new_v4().to_string()).collect();
        for chunk in split_chunks(&tokens, budget, String::len) {
            prop_assert!(serialized_length(&chunk) <= budget);
        }
    }

    /// Greedy packing is minimal for order-preserving splits: no two
    /// adjacent chunks could have been one chunk
    #[test]
    fn prop_adjacent_chunks_cannot_merge(
        tokens in prop::collection::vec("[a-z0-9]{1,40}", 1..120),
        budget in 8usize..128,
    ) {
        let chunks = split_chunks(&tokens, budget, String::len);
        for pair in chunks.windows(2) {
            let combined = serialized_length(&pair[0]) + 1 + serialized_length(&pair[1]);
            prop_assert!(combined > budget);
        }
    }

    /// Parameter sets keep the whole request below the URI limit whenever
    /// a single identifier fits at all
    #[test]
    fn prop_parameter_sets_respect_uri_limit(
        count in 1usize..400,
        max_uri_length in 512usize..4096,
    ) {
        let base_address_length = "http://metrology.local/DataServiceRest/".len();
        let uuids: Vec<Uuid> = (0..count).map(|_| Uuid::new_v4()).collect();
        let collection = CollectionParameter::from_uuids("measurementUuids", &uuids);
        let fixed = vec![ParameterDefinition::new("deep", "true")];

        let splitter = ParameterSplitter::new(base_address_length, max_uri_length);
        let sets = splitter.split("measurements", &collection, &fixed).unwrap();

        for set in sets {
            let query: Vec<String> = set.iter().map(|p| format!("{}={}", p.name, p.value)).collect();
            let restriction = format!("measurements?{}", query.join("&"));
            prop_assert!(base_address_length + restriction.len() <= max_uri_length);
        }
    }
}

#[test]
fn test_budget_accounts_for_placeholder() {
    let base = 30;
    let parameters = vec![
        ParameterDefinition::new("deep", "true"),
        ParameterDefinition::new("partUuids", ""),
    ];
    // "measurements?deep=true&partUuids=" is 33 characters
    assert_eq!(uri_target_size(base, "measurements", &parameters, 100), 37);
}

#[test]
fn test_zero_budget_sends_one_identifier_per_request() {
    let uuids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
    let collection = CollectionParameter::from_uuids("partUuids", &uuids);

    // fixed overhead alone exceeds the limit
    let splitter = ParameterSplitter::new(64, 64);
    let sets = splitter.split("parts", &collection, &[]).unwrap();

    assert_eq!(sets.len(), 5);
    for (set, uuid) in sets.iter().zip(&uuids) {
        assert_eq!(set.len(), 1);
        assert_eq!(set[0].value, uuid.to_string());
    }
}

/// 10,000 36-character identifiers against a 2,048 character limit with
/// roughly 200 characters of fixed overhead
#[test]
fn test_bulk_identifier_scenario() {
    let uuids: Vec<Uuid> = (0..10_000).map(|_| Uuid::new_v4()).collect();
    let collection = CollectionParameter::from_uuids("measurementUuids", &uuids);
    let fixed = vec![
        ParameterDefinition::new("partPath", "/bulk/scenario/with/a/longer/restriction/path/"),
        ParameterDefinition::new("deep", "true"),
        ParameterDefinition::new("limitResult", "100000"),
    ];

    let base_address_length = 120;
    let max_uri_length = 2048;
    let splitter = ParameterSplitter::new(base_address_length, max_uri_length);

    let budget = splitter.budget_for("measurements", &collection.name, &fixed);
    let per_chunk = (budget + 1) / 37;
    let expected_chunks = uuids.len().div_ceil(per_chunk);

    let sets = splitter.split("measurements", &collection, &fixed).unwrap();
    assert_eq!(sets.len(), expected_chunks);

    // all chunks stay within the limit and reassemble to the input
    let mut reassembled = Vec::with_capacity(uuids.len());
    for set in &sets {
        let value = &set.last().unwrap().value;
        assert!(value.len() <= budget);
        reassembled.extend(value.split(',').map(|t| t.parse::<Uuid>().unwrap()));
    }
    assert_eq!(reassembled, uuids);
}

#[test]
fn test_empty_collection_keeps_fixed_parameters() {
    let splitter = ParameterSplitter::new(30, 2048);
    let collection = CollectionParameter::new("partUuids", vec![]);
    let fixed = vec![ParameterDefinition::new("deep", "true")];

    let sets = splitter.split("parts", &collection, &fixed).unwrap();
    assert_eq!(sets, vec![fixed]);
}
