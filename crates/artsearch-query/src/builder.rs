//! Translates a free-text term plus a `FilterSet` into a compound query.

use artsearch_core::types::{EntityKind, FilterSet};
use artsearch_schema::fields::{search_paths, SearchPaths};
use serde_json::Value;
use tracing::debug;

use crate::clause::{
    wire_number, AutocompleteClause, Circle, Clause, CompoundQuery, EqualsClause, FuzzyOptions,
    GeoPoint, GeoWithinClause, RangeClause, ScoreBoost, TextClause,
};

/// Boost applied to exact-prefix autocomplete matches relative to plain
/// text matches, rewarding typeahead-driven relevance.
pub const AUTOCOMPLETE_BOOST: f64 = 3.0;

/// Fuzzy tolerance for full-text matches: one edit past a two-character
/// exact prefix.
pub const FUZZY_MAX_EDITS: u32 = 1;
pub const FUZZY_PREFIX_LENGTH: u32 = 2;

/// Upper price bound when only `min_price` is given: the largest integer an
/// f64 represents exactly.
pub const PRICE_CEILING: u64 = (1 << 53) - 1;

/// Build the compound search query for one entity index.
///
/// An empty term together with an empty `FilterSet` yields a query with all
/// clause lists absent; callers treat that as match-everything.
pub fn build_search_query(
    kind: EntityKind,
    term: Option<&str>,
    filters: &FilterSet,
) -> CompoundQuery {
    let paths = search_paths(kind);
    let mut query = CompoundQuery::default();

    if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
        query.must.push(relevance_clause(term, paths));
    }

    // One clause per requested dimension; filters are independent and the
    // engine ANDs them.
    if let Some(category) = &filters.category {
        query
            .filter
            .push(Clause::Text(TextClause::exact(category, paths.category)));
    }
    if let Some(subcategories) = &filters.subcategories {
        if !subcategories.is_empty() {
            query.filter.push(Clause::Text(TextClause::any_of(
                subcategories,
                paths.subcategories,
            )));
        }
    }
    if let Some(city) = &filters.city {
        query
            .filter
            .push(Clause::Text(TextClause::exact(city, paths.city)));
    }
    if filters.min_price.is_some() || filters.max_price.is_some() {
        query.filter.push(Clause::Range(RangeClause {
            path: paths.price.to_string(),
            gte: Some(wire_number(filters.min_price.unwrap_or(0.0))),
            lte: Some(wire_number(filters.max_price.unwrap_or(PRICE_CEILING as f64))),
        }));
    }
    if let Some(min_rating) = filters.min_rating {
        query.filter.push(Clause::Range(RangeClause {
            path: paths.rating.to_string(),
            gte: Some(wire_number(min_rating)),
            lte: None,
        }));
    }
    // `Some(false)` is a real request; only an absent key skips the clause.
    if let Some(available) = filters.is_available {
        query.filter.push(Clause::Equals(EqualsClause {
            path: paths.availability.to_string(),
            value: Value::Bool(available),
        }));
    }
    if let Some(mode) = &filters.mode {
        query
            .filter
            .push(Clause::Text(TextClause::exact(mode, paths.mode)));
    }
    if let Some(geo) = &filters.geo {
        query.filter.push(Clause::GeoWithin(GeoWithinClause {
            circle: Circle {
                center: GeoPoint::new(geo.center),
                radius: geo.radius_km * 1000.0,
            },
            path: paths.geo.to_string(),
        }));
    }

    debug!(
        index = kind.index_name(),
        must = query.must.len(),
        filter = query.filter.len(),
        "built search query"
    );
    query
}

/// The scored relevance clause: a disjunction of a boosted prefix match on
/// the primary autocomplete sub-field and a typo-tolerant text match over
/// the entity's full-text paths.
fn relevance_clause(term: &str, paths: &SearchPaths) -> Clause {
    Clause::Compound(Box::new(CompoundQuery {
        should: vec![
            Clause::Autocomplete(AutocompleteClause {
                query: term.to_string(),
                path: paths.autocomplete.to_string(),
                score: Some(ScoreBoost::new(AUTOCOMPLETE_BOOST)),
            }),
            Clause::Text(TextClause {
                query: term.into(),
                path: paths.text.into(),
                fuzzy: Some(FuzzyOptions {
                    max_edits: FUZZY_MAX_EDITS,
                    prefix_length: FUZZY_PREFIX_LENGTH,
                }),
            }),
        ],
        minimum_should_match: Some(1),
        ..CompoundQuery::default()
    }))
}

/// The narrow typeahead variant: a single prefix clause, no boost, no
/// fuzziness, tuned for low-latency suggestion queries.
pub fn build_autocomplete_query(prefix: &str, kind: EntityKind) -> CompoundQuery {
    let paths = search_paths(kind);
    CompoundQuery {
        must: vec![Clause::Autocomplete(AutocompleteClause {
            query: prefix.to_string(),
            path: paths.autocomplete.to_string(),
            score: None,
        })],
        ..CompoundQuery::default()
    }
}
