//! HTTP handlers for resources, verbs and resource types.

pub mod resource;
pub mod resource_type;
pub mod verb;
