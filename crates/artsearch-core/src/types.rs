//! Domain types shared by the query builder, suggestion composer, and ranker.

use serde::{Deserialize, Serialize};

/// Which marketplace entity a document, query, or suggestion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artist,
    Workshop,
}

impl EntityKind {
    /// Name of the search index holding this entity's documents.
    pub fn index_name(self) -> &'static str {
        match self {
            EntityKind::Artist => "artists",
            EntityKind::Workshop => "workshops",
        }
    }
}

/// Entity scope for suggestion queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Artist,
    Workshop,
    All,
}

/// Geo constraint: center plus radius as one composite value, so a center
/// can never arrive without a radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFilter {
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub radius_km: f64,
}

/// Structured filter selections from the client, one typed field per
/// recognized dimension. `None` means "do not filter on this dimension".
///
/// `is_available` keeps the absent/`Some(false)` distinction: an explicit
/// `false` is a real filter request, only `None` skips the clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    pub category: Option<String>,
    pub subcategories: Option<Vec<String>>,
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub is_available: Option<bool>,
    pub mode: Option<String>,
    pub geo: Option<GeoFilter>,
}

impl FilterSet {
    /// True when no dimension is requested at all.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.subcategories.is_none()
            && self.city.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.min_rating.is_none()
            && self.is_available.is_none()
            && self.mode.is_none()
            && self.geo.is_none()
    }
}

/// Ranking-relevant fields of one result record.
///
/// `id` is the only structurally required field; every optional field
/// missing on the document counts as zero (or false) when scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingInputs {
    pub id: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub popularity: Option<u64>,
    #[serde(default)]
    pub experience_years: Option<u64>,
}

/// One raw suggestion row as returned by the backend for a single index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionHit {
    pub id: String,
    pub label: String,
}

/// A suggestion after scope merging, tagged with its source entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}
