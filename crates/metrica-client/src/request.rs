//! Request building blocks
//!
//! A [`RestRequest`] describes one physical request relative to the
//! service endpoint. Query parameters are kept as an ordered list of
//! name/value pairs; identifier collections travel as a single
//! comma-joined value, so the serialized length of a parameter set is
//! exactly what the splitting layer budgets for.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::Value;
use uuid::Uuid;

/// Characters escaped in query parameter values. Commas stay literal:
/// they separate identifier tokens and each one is budgeted as a single
/// character.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// One request parameter as a name/value string pair. The same name may
/// occur more than once in a parameter set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub name: String,
    pub value: String,
}

impl ParameterDefinition {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Serialized form as it appears in the query string
    pub fn encode(&self) -> String {
        format!(
            "{}={}",
            self.name,
            utf8_percent_encode(&self.value, QUERY_VALUE)
        )
    }
}

/// A named parameter whose value is an ordered list of identifier tokens,
/// not yet serialized. This is the unit of splitting: the tokens may be
/// distributed over several physical requests.
#[derive(Clone, Debug)]
pub struct CollectionParameter {
    pub name: String,
    pub tokens: Vec<String>,
}

impl CollectionParameter {
    pub fn new(name: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }

    /// Collection of uuid identifiers, serialized hyphenated
    pub fn from_uuids(name: impl Into<String>, uuids: &[Uuid]) -> Self {
        Self::new(name, uuids.iter().map(Uuid::to_string).collect())
    }

    /// Collection of short numeric keys
    pub fn from_keys<K: ToString>(name: impl Into<String>, keys: &[K]) -> Self {
        Self::new(name, keys.iter().map(K::to_string).collect())
    }

    /// Serializes a chunk of tokens into the scalar parameter value
    pub fn join(tokens: &[String]) -> String {
        tokens.join(",")
    }
}

/// HTTP method of a physical request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One physical request: method, path relative to the service endpoint,
/// query parameters and an optional JSON body.
#[derive(Clone, Debug)]
pub struct RestRequest {
    pub method: HttpMethod,
    pub path: String,
    pub parameters: Vec<ParameterDefinition>,
    pub body: Option<Value>,
}

impl RestRequest {
    pub fn get(path: impl Into<String>, parameters: Vec<ParameterDefinition>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            parameters,
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>, parameters: Vec<ParameterDefinition>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            parameters,
            body: None,
        }
    }

    pub fn post(
        path: impl Into<String>,
        body: Value,
        parameters: Vec<ParameterDefinition>,
    ) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            parameters,
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value, parameters: Vec<ParameterDefinition>) -> Self {
        Self {
            method: HttpMethod::Put,
            path: path.into(),
            parameters,
            body: Some(body),
        }
    }

    /// Query string of this request, empty when there are no parameters
    pub fn query(&self) -> String {
        encode_query(&self.parameters)
    }
}

/// Serializes parameters into a query string without the leading `?`
pub fn encode_query(parameters: &[ParameterDefinition]) -> String {
    parameters
        .iter()
        .map(ParameterDefinition::encode)
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends parameters to a relative path, producing the request
/// restriction whose length counts against the URI limit.
pub fn append_parameters(path: &str, parameters: &[ParameterDefinition]) -> String {
    if parameters.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, encode_query(parameters))
    }
}
