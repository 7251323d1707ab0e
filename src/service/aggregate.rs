//! Attach verbs to resources for read responses.
//!
//! Verb lookups are best-effort: if fetching the verbs of a resource fails, that resource is
//! returned with an empty `verbs` list and the failure is logged. A verb-table outage must not
//! block reads of the resources themselves.

use crate::accessors::VerbLookup;
use crate::models::Resource;

/// Fill `resource.verbs` with the verbs whose `resourceGUID` is `resource.guid`.
pub async fn with_verbs<L>(lookup: &L, mut resource: Resource) -> Resource
where
    L: VerbLookup + ?Sized,
{
    resource.verbs = match lookup.verbs_for(&resource.guid).await {
        Ok(verbs) => verbs,
        Err(e) => {
            tracing::warn!(resource_guid = %resource.guid, error = %e, "verb lookup failed, returning resource without verbs");
            Vec::new()
        }
    };
    resource
}

/// [`with_verbs`] for each resource in order; one lookup per resource.
pub async fn with_verbs_all<L>(lookup: &L, resources: Vec<Resource>) -> Vec<Resource>
where
    L: VerbLookup + ?Sized,
{
    let mut out = Vec::with_capacity(resources.len());
    for resource in resources {
        out.push(with_verbs(lookup, resource).await);
    }
    out
}
