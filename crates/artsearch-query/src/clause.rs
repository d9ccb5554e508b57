//! Typed clause model for the backend's query vocabulary.
//!
//! Every variant serializes to exactly the wire shape the engine executes,
//! e.g. `{"text": {...}}` or `{"geoWithin": {...}}`; serialization is part
//! of the contract and covered by tests.

use serde::Serialize;
use serde_json::{Number, Value};

/// One operator clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Clause {
    Text(TextClause),
    Autocomplete(AutocompleteClause),
    Range(RangeClause),
    Equals(EqualsClause),
    GeoWithin(GeoWithinClause),
    Compound(Box<CompoundQuery>),
}

/// `query` and `path` accept one value or a list; a list as `query` means
/// match-any, a list as `path` searches every named field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        OneOrMany::Many(values.iter().map(|s| (*s).to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextClause {
    pub query: OneOrMany,
    pub path: OneOrMany,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<FuzzyOptions>,
}

impl TextClause {
    /// Exact-match clause on a single field, the shape every facet filter
    /// uses. Input is passed through untouched: case handling belongs to
    /// the index analyzer.
    pub fn exact(query: &str, path: &str) -> Self {
        Self {
            query: query.into(),
            path: path.into(),
            fuzzy: None,
        }
    }

    /// Match-any clause: the document matches when its facet array
    /// intersects `values`.
    pub fn any_of(values: &[String], path: &str) -> Self {
        Self {
            query: values.to_vec().into(),
            path: path.into(),
            fuzzy: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyOptions {
    pub max_edits: u32,
    /// Leading characters that must match exactly before edits are
    /// tolerated.
    pub prefix_length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteClause {
    pub query: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreBoost>,
}

/// Serializes as `{"boost": {"value": <v>}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBoost {
    pub boost: BoostValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoostValue {
    pub value: f64,
}

impl ScoreBoost {
    pub fn new(value: f64) -> Self {
        Self {
            boost: BoostValue { value },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeClause {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gte: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EqualsClause {
    pub path: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoWithinClause {
    pub circle: Circle,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub center: GeoPoint,
    /// Meters.
    pub radius: f64,
}

/// GeoJSON point, coordinates `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(coordinates: [f64; 2]) -> Self {
        Self {
            kind: "Point",
            coordinates,
        }
    }
}

/// Compound query: scored `must`, unscored boolean `filter`, optional
/// `should` boosts.
///
/// A clause list that ends up empty is omitted from the serialized JSON
/// entirely, never emitted as an empty array, so the engine does not
/// misread "no constraint" as "match nothing". An all-empty query
/// serializes to `{}` and means match-everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Clause>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Clause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<u32>,
}

impl CompoundQuery {
    /// True when the query constrains nothing; callers treat this as
    /// pass-through, not as an error.
    pub fn is_match_all(&self) -> bool {
        self.must.is_empty() && self.filter.is_empty() && self.should.is_empty()
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Convert a numeric input to a JSON number, keeping integral values as
/// integers on the wire (`500`, not `500.0`). Non-finite input degrades to
/// zero rather than panicking.
pub(crate) fn wire_number(value: f64) -> Number {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}
