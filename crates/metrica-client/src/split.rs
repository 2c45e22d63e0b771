//! Adaptive request splitting
//!
//! Requests carrying identifier collections can exceed the transport's
//! URI length limit. This module computes how much of the limit remains
//! once the fixed request skeleton is accounted for, partitions the
//! collection into budget-respecting chunks, and emits one complete
//! parameter set per chunk.
//!
//! Chunks preserve collection order; concatenating all chunks in order
//! reproduces the input exactly. A chunk never exceeds the budget unless
//! it holds a single identifier whose token alone is oversized - such an
//! identifier is still sent rather than silently dropped.

use crate::error::{DataServiceError, Result};
use crate::request::{CollectionParameter, ParameterDefinition, append_parameters};
use crate::transport::Transport;

/// Computes the characters still available for variable collection data
/// once the base address, path and fixed parameters are spent.
///
/// `parameters` must include an empty-valued placeholder for the
/// collection parameter, so its name and separator overhead is part of
/// the fixed cost. A fixed cost above the limit yields a zero budget.
pub fn uri_target_size(
    base_address_length: usize,
    path: &str,
    parameters: &[ParameterDefinition],
    max_uri_length: usize,
) -> usize {
    let restriction = append_parameters(path, parameters);
    max_uri_length.saturating_sub(base_address_length + restriction.len())
}

/// Partitions `items` into ordered chunks whose serialized length
/// (tokens plus one separator character between adjacent tokens) does
/// not exceed `budget`.
///
/// Greedy left-to-right packing keeps the chunk count minimal for
/// order-preserving splits. An item whose token alone exceeds the budget
/// forms its own one-element chunk, so a zero budget degrades to one
/// request per identifier instead of looping or emitting empty chunks.
pub fn split_chunks<T, F>(items: &[T], budget: usize, token_length: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> usize,
{
    let mut chunks = Vec::new();
    let mut current: Vec<T> = Vec::new();
    let mut used = 0usize;

    for item in items {
        let length = token_length(item);
        if !current.is_empty() && used + 1 + length > budget {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        used += if current.is_empty() { length } else { 1 + length };
        current.push(item.clone());
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Splits a collection parameter into per-request parameter sets.
///
/// Each emitted set contains the fixed parameters of the operation plus
/// the collection parameter serialized from one chunk. Cross-axis
/// splitting (two large collections in one logical operation) is done by
/// fixing one axis's chunk in the fixed parameters and splitting the
/// second axis with a fresh `ParameterSplitter` per outer chunk.
#[derive(Clone, Copy, Debug)]
pub struct ParameterSplitter {
    base_address_length: usize,
    max_uri_length: usize,
}

impl ParameterSplitter {
    pub fn new(base_address_length: usize, max_uri_length: usize) -> Self {
        Self {
            base_address_length,
            max_uri_length,
        }
    }

    /// Splitter using the length limits of the given transport
    pub fn for_transport<T: Transport + ?Sized>(transport: &T) -> Self {
        Self::new(transport.base_address_length(), transport.max_request_length())
    }

    /// Remaining budget for the collection value of a request to `path`
    /// with the given fixed parameters.
    pub fn budget_for(
        &self,
        path: &str,
        collection_name: &str,
        fixed: &[ParameterDefinition],
    ) -> usize {
        let mut skeleton = fixed.to_vec();
        skeleton.push(ParameterDefinition::new(collection_name, ""));
        uri_target_size(
            self.base_address_length,
            path,
            &skeleton,
            self.max_uri_length,
        )
    }

    /// Produces one parameter set per chunk of the collection.
    ///
    /// An empty collection yields a single set with only the fixed
    /// parameters.
    pub fn split(
        &self,
        path: &str,
        collection: &CollectionParameter,
        fixed: &[ParameterDefinition],
    ) -> Result<Vec<Vec<ParameterDefinition>>> {
        if collection.tokens.is_empty() {
            return Ok(vec![fixed.to_vec()]);
        }

        let budget = self.budget_for(path, &collection.name, fixed);
        let chunks = split_chunks(&collection.tokens, budget, String::len);

        let mut sets = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let value = CollectionParameter::join(&chunk);
            if chunk.len() > 1 && value.len() > budget {
                return Err(DataServiceError::SplitInvariant(format!(
                    "chunk of {} tokens serialized to {} characters, budget is {}",
                    chunk.len(),
                    value.len(),
                    budget
                )));
            }

            let mut set = fixed.to_vec();
            set.push(ParameterDefinition::new(&collection.name, value));
            sets.push(set);
        }

        Ok(sets)
    }
}
