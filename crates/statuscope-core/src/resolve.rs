//! JSON:API relationship resolution.
//!
//! Builds a `(type, id)` lookup over the document's `included` array
//! once per snapshot build, then resolves relationship refs through it.
//! Dangling refs resolve to `None` and are silently dropped by callers;
//! they are never an error.

use std::collections::HashMap;

use statuscope_api::status_page::types::{KIND_RESOURCE, RawResource, ResourceRef};

/// Name of the back-reference a service carries to its parent section.
pub const SECTION_BACKREF: &str = "status_page_section";

/// Read-only lookup pool over the `included` resources of one document.
pub struct IncludedPool<'a> {
    by_key: HashMap<(&'a str, &'a str), &'a RawResource>,
}

impl<'a> IncludedPool<'a> {
    /// Index the included array by `(type, id)`. Later duplicates win,
    /// matching a plain map insert.
    pub fn new(included: &'a [RawResource]) -> Self {
        let mut by_key = HashMap::with_capacity(included.len());
        for item in included {
            by_key.insert((item.kind.as_str(), item.id.as_str()), item);
        }
        Self { by_key }
    }

    /// Look up a pooled resource by type tag and id.
    pub fn get(&self, kind: &str, id: &str) -> Option<&'a RawResource> {
        self.by_key.get(&(kind, id)).copied()
    }

    /// Resolve a relationship ref into its pooled resource.
    pub fn resolve(&self, r: &ResourceRef) -> Option<&'a RawResource> {
        self.get(&r.kind, &r.id)
    }
}

/// Build the section-id → service-ids index.
///
/// Services bind to sections through their own back-reference, not the
/// section's relationship list, so this scans every declared service's
/// `status_page_section` pointer. Fallback: if no service declares any
/// back-reference but at least one section and one service exist, every
/// declared service is assigned to the first declared section rather
/// than being dropped.
pub fn section_service_index(
    service_refs: &[ResourceRef],
    section_refs: &[ResourceRef],
    pool: &IncludedPool<'_>,
) -> HashMap<String, Vec<String>> {
    let mut index: HashMap<String, Vec<String>> = HashMap::new();

    for sref in service_refs {
        let Some(service) = pool.get(KIND_RESOURCE, &sref.id) else {
            continue;
        };
        if let Some(section) = service.relationship_one(SECTION_BACKREF) {
            index
                .entry(section.id.clone())
                .or_default()
                .push(sref.id.clone());
        }
    }

    if index.is_empty() && !service_refs.is_empty() {
        if let Some(first_section) = section_refs.first() {
            index.insert(
                first_section.id.clone(),
                service_refs.iter().map(|r| r.id.clone()).collect(),
            );
        }
    }

    index
}
