//! Wire types for the JSON:API-shaped status-page document.
//!
//! The document is a root resource plus a flat `included` array of typed
//! resources. Resource attributes are polymorphic per `type`, so each
//! included item keeps its attributes as opaque JSON and exposes typed
//! decoders that fall back to defaults for missing or wrong-typed fields.
//! One malformed resource therefore degrades to defaults instead of
//! failing the whole document parse.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ── Included resource type tags ──────────────────────────────────────

pub const KIND_SECTION: &str = "status_page_section";
pub const KIND_RESOURCE: &str = "status_page_resource";
pub const KIND_REPORT: &str = "status_page_report";
pub const KIND_UPDATE: &str = "status_update";

// ── Document ─────────────────────────────────────────────────────────

/// The full status-page document — from `GET {base}/index.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPageDocument {
    pub data: RootResource,
    #[serde(default)]
    pub included: Vec<RawResource>,
}

/// The root `status_page` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RootResource {
    pub id: String,
    pub attributes: RootAttributes,
    #[serde(default)]
    pub relationships: RootRelationships,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RootAttributes {
    #[serde(default)]
    pub company_name: String,
    /// One of: `operational`, `degraded`, `downtime`, `maintenance`.
    #[serde(default)]
    pub aggregate_state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RootRelationships {
    #[serde(default)]
    pub sections: RefList,
    #[serde(default)]
    pub resources: RefList,
    #[serde(default)]
    pub status_reports: RefList,
}

// ── Relationship references ──────────────────────────────────────────

/// A `{id, type}` reference into the `included` pool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A to-many relationship: `{"data": [{id, type}, …]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefList {
    #[serde(default)]
    pub data: Vec<ResourceRef>,
}

/// A relationship whose `data` may be a single ref, a list, or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceRef),
    Many(Vec<ResourceRef>),
}

// ── Included resources ───────────────────────────────────────────────

/// One entry of the `included` array: a typed resource with opaque
/// attributes and optional relationships.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Value,
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

impl RawResource {
    /// Decode this resource's attributes into a typed struct, defaulting
    /// any field the upstream omitted or sent with the wrong shape.
    pub fn attributes_as<T>(&self) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        serde_json::from_value(self.attributes.clone()).unwrap_or_default()
    }

    /// The single ref behind a to-one relationship, if present.
    pub fn relationship_one(&self, name: &str) -> Option<&ResourceRef> {
        match self.relationships.get(name)?.data.as_ref()? {
            RelationshipData::One(r) => Some(r),
            RelationshipData::Many(_) => None,
        }
    }

    /// The refs behind a to-many relationship (empty if absent or to-one).
    pub fn relationship_many(&self, name: &str) -> &[ResourceRef] {
        match self.relationships.get(name).and_then(|r| r.data.as_ref()) {
            Some(RelationshipData::Many(refs)) => refs,
            _ => &[],
        }
    }
}

// ── Typed attribute shapes ───────────────────────────────────────────

/// Attributes of a `status_page_section`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionAttributes {
    #[serde(default)]
    pub name: Option<String>,
}

/// Attributes of a `status_page_resource` (a service).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceAttributes {
    #[serde(default)]
    pub public_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Defaults to 100 downstream when absent or non-numeric.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub availability: Option<f64>,
    #[serde(default, deserialize_with = "lenient_history")]
    pub status_history: Vec<StatusHistoryEntry>,
}

/// One `{day, status}` sample of a service's tracked history.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusHistoryEntry {
    pub day: String,
    pub status: String,
}

/// Attributes of a `status_page_report` (an incident).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ongoing: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
}

/// Attributes of a `status_update`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttributes {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ── Lenient field deserializers ──────────────────────────────────────

/// Accept a JSON number; anything else (string, null, object) becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Accept an array of history entries, dropping malformed elements.
fn lenient_history<'de, D>(deserializer: D) -> Result<Vec<StatusHistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
