//! Row types for the `resources`, `resourceVerbs` and `resourceTypes` tables.

use serde::{Deserialize, Serialize};

/// A resource category, e.g. a whiteboard, with the verbs allowed on it.
///
/// Equality compares every field, including `verbs` element by element in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub guid: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "apiEndpoint")]
    pub api_endpoint: String,
    /// Filled in by [`crate::service::aggregate`]; never stored.
    #[serde(default)]
    pub verbs: Vec<ResourceVerb>,
}

impl Resource {
    pub fn new(name: impl Into<String>, description: impl Into<String>, api_endpoint: impl Into<String>) -> Self {
        Resource {
            guid: String::new(),
            name: name.into(),
            description: description.into(),
            api_endpoint: api_endpoint.into(),
            verbs: Vec::new(),
        }
    }
}

/// A named action permitted on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceVerb {
    pub guid: String,
    #[serde(rename = "resourceGUID")]
    pub resource_guid: String,
    pub verb: String,
    pub description: String,
}

/// Links a resource instance to the resource acting as its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAssociation {
    pub guid: String,
    #[serde(rename = "resourceGUID")]
    pub resource_guid: String,
    #[serde(rename = "type")]
    pub type_guid: String,
}
