//! Compiled endpoint records
//!
//! One [`EndpointRecord`] is produced per routable method. The serialized
//! field names are the stable schema that routers and documentation
//! generators read:
//!
//! ```text
//! handler { class, method, arguments }
//! group   { ids, paths }
//! id, tags, methods, mask
//! parameters { <name>: { name, group, pattern, type, description } }
//! pattern
//! ```

use crate::descriptor::{DeclaredParameter, HandlerArgument, ParameterType};
use crate::placeholder::capture_fragment;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Which handler serves an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    pub class: String,
    pub method: String,
    pub arguments: Vec<HandlerArgument>,
}

/// Group ids and paths the endpoint's controller is nested in
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Group {
    pub ids: Vec<String>,
    pub paths: Vec<String>,
}

/// Metadata for one `{name}` placeholder of a mask
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMeta {
    pub name: String,

    /// Capture group holding the value in `pattern`; equal to `name` unless
    /// `name` is not a valid group name (`user-id`, `1`)
    pub group: String,

    /// Capture fragment that replaced the placeholder in the pattern
    pub pattern: String,

    #[serde(rename = "type")]
    pub ty: ParameterType,

    pub description: Option<String>,
}

impl ParameterMeta {
    /// Metadata for `name` captured as `group`, taken from its declaration
    /// when there is one
    pub fn new(
        name: &str,
        group: String,
        declared: Option<&DeclaredParameter>,
        default_type: ParameterType,
    ) -> Self {
        let (ty, description) = match declared {
            Some(parameter) => (parameter.ty, parameter.description.clone()),
            None => (default_type, None),
        };

        Self {
            name: name.to_string(),
            pattern: capture_fragment(&group),
            group,
            ty,
            description,
        }
    }
}

/// A compiled, routable endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointRecord {
    pub handler: Handler,
    pub group: Group,

    /// Dotted id; `None` when the method declares no id of its own
    pub id: Option<String>,

    pub tags: BTreeSet<String>,

    /// HTTP verbs
    #[serde(rename = "methods")]
    pub http_methods: BTreeSet<String>,

    /// Normalized path template, e.g. `/api/users/{id}`
    pub mask: String,

    pub parameters: BTreeMap<String, ParameterMeta>,

    /// Anchored matching expression derived from `mask`
    pub pattern: String,
}

impl EndpointRecord {
    pub fn parameter(&self, name: &str) -> Option<&ParameterMeta> {
        self.parameters.get(name)
    }

    pub fn handles(&self, verb: &str) -> bool {
        self.http_methods.contains(verb)
    }
}
