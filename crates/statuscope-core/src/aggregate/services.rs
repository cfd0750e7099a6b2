//! Per-section service ordering and section assembly.

use std::cmp::Ordering;

use chrono::NaiveDate;

use statuscope_api::status_page::types::{KIND_RESOURCE, KIND_SECTION, StatusPageDocument};

use crate::convert::{section_name, service_from_resource};
use crate::model::{Section, Service};
use crate::resolve::{IncludedPool, section_service_index};

/// Fixed display priority. Exact-name matches come first in this order;
/// everything else follows alphabetically.
pub const SERVICE_ORDER: [&str; 6] = [
    "API",
    "Dashboard",
    "CDN",
    "Sync Worker",
    "Webhook",
    "MCP Server",
];

/// Sort services in place: priority names by list index, the rest by
/// case-insensitive name. The sort is stable, so services with equal
/// keys keep their original relative order.
pub fn sort_services(services: &mut [Service]) {
    services.sort_by(|a, b| {
        let a_idx = SERVICE_ORDER.iter().position(|n| *n == a.name);
        let b_idx = SERVICE_ORDER.iter().position(|n| *n == b.name);
        match (a_idx, b_idx) {
            (Some(ai), Some(bi)) => ai.cmp(&bi),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    });
}

/// Build all sections of a document, each with its ordered services.
///
/// Sections whose index entry is empty (or absent) still appear, with no
/// services. Service refs that resolve to nothing are dropped.
pub fn build_sections(
    doc: &StatusPageDocument,
    pool: &IncludedPool<'_>,
    today: NaiveDate,
    window: usize,
) -> Vec<Section> {
    let rels = &doc.data.relationships;
    let index = section_service_index(&rels.resources.data, &rels.sections.data, pool);

    rels.sections
        .data
        .iter()
        .map(|sref| {
            let mut services: Vec<Service> = index
                .get(&sref.id)
                .map(|ids| {
                    ids.iter()
                        .filter_map(|id| pool.get(KIND_RESOURCE, id))
                        .map(|raw| service_from_resource(raw, today, window))
                        .collect()
                })
                .unwrap_or_default();
            sort_services(&mut services);

            Section {
                id: sref.id.clone(),
                name: section_name(pool.get(KIND_SECTION, &sref.id)),
                services,
            }
        })
        .collect()
}
