//! Static field tables and the path lookups derived from them.

use artsearch_core::types::EntityKind;

/// Kind of an index field, which determines the clause types that may
/// target it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Analyzed full-text field; `autocomplete` adds the edge-n-gram
    /// sub-field prefix queries must target.
    Text { autocomplete: bool },
    /// Exact-match token, also indexed as a string facet.
    Facet,
    Number,
    Boolean,
    Date,
    /// GeoJSON point, coordinates `[longitude, latitude]`.
    Geo,
}

#[derive(Debug, Clone, Copy)]
pub struct IndexField {
    pub path: &'static str,
    pub kind: FieldKind,
}

pub const ARTIST_FIELDS: &[IndexField] = &[
    IndexField { path: "name", kind: FieldKind::Text { autocomplete: true } },
    IndexField { path: "bio", kind: FieldKind::Text { autocomplete: false } },
    IndexField { path: "categoryText", kind: FieldKind::Text { autocomplete: false } },
    IndexField { path: "searchText", kind: FieldKind::Text { autocomplete: false } },
    IndexField { path: "category", kind: FieldKind::Facet },
    IndexField { path: "subcategories", kind: FieldKind::Facet },
    IndexField { path: "city", kind: FieldKind::Facet },
    IndexField { path: "state", kind: FieldKind::Facet },
    IndexField { path: "availabilityModes", kind: FieldKind::Facet },
    IndexField { path: "pricePerHour", kind: FieldKind::Number },
    IndexField { path: "rating", kind: FieldKind::Number },
    IndexField { path: "bookingsCount", kind: FieldKind::Number },
    IndexField { path: "experienceYears", kind: FieldKind::Number },
    IndexField { path: "featured", kind: FieldKind::Boolean },
    IndexField { path: "isAvailable", kind: FieldKind::Boolean },
    IndexField { path: "location", kind: FieldKind::Geo },
    IndexField { path: "createdAt", kind: FieldKind::Date },
];

pub const WORKSHOP_FIELDS: &[IndexField] = &[
    IndexField { path: "title", kind: FieldKind::Text { autocomplete: true } },
    IndexField { path: "description", kind: FieldKind::Text { autocomplete: false } },
    IndexField { path: "categoryText", kind: FieldKind::Text { autocomplete: false } },
    IndexField { path: "searchText", kind: FieldKind::Text { autocomplete: false } },
    IndexField { path: "category", kind: FieldKind::Facet },
    IndexField { path: "tags", kind: FieldKind::Facet },
    IndexField { path: "city", kind: FieldKind::Facet },
    IndexField { path: "state", kind: FieldKind::Facet },
    IndexField { path: "mode", kind: FieldKind::Facet },
    IndexField { path: "price", kind: FieldKind::Number },
    IndexField { path: "rating", kind: FieldKind::Number },
    IndexField { path: "enrollmentsCount", kind: FieldKind::Number },
    IndexField { path: "featured", kind: FieldKind::Boolean },
    IndexField { path: "isAvailable", kind: FieldKind::Boolean },
    IndexField { path: "location", kind: FieldKind::Geo },
    IndexField { path: "nextAvailableDate", kind: FieldKind::Date },
    IndexField { path: "createdAt", kind: FieldKind::Date },
];

/// The paths the query builder targets for one entity type. Prefix queries
/// go to the `.autocomplete` sub-field; facet filters go to the bare facet
/// field.
#[derive(Debug, Clone, Copy)]
pub struct SearchPaths {
    pub autocomplete: &'static str,
    /// Ordered full-text paths for the fuzzy relevance clause.
    pub text: &'static [&'static str],
    pub category: &'static str,
    pub subcategories: &'static str,
    pub city: &'static str,
    pub price: &'static str,
    pub rating: &'static str,
    pub availability: &'static str,
    pub mode: &'static str,
    pub geo: &'static str,
}

pub const ARTIST_PATHS: SearchPaths = SearchPaths {
    autocomplete: "name.autocomplete",
    text: &["name", "bio", "categoryText", "searchText"],
    category: "category",
    subcategories: "subcategories",
    city: "city",
    price: "pricePerHour",
    rating: "rating",
    availability: "isAvailable",
    mode: "availabilityModes",
    geo: "location",
};

pub const WORKSHOP_PATHS: SearchPaths = SearchPaths {
    autocomplete: "title.autocomplete",
    text: &["title", "description", "categoryText", "searchText"],
    category: "category",
    subcategories: "tags",
    city: "city",
    price: "price",
    rating: "rating",
    availability: "isAvailable",
    mode: "mode",
    geo: "location",
};

pub fn fields(kind: EntityKind) -> &'static [IndexField] {
    match kind {
        EntityKind::Artist => ARTIST_FIELDS,
        EntityKind::Workshop => WORKSHOP_FIELDS,
    }
}

pub fn search_paths(kind: EntityKind) -> &'static SearchPaths {
    match kind {
        EntityKind::Artist => &ARTIST_PATHS,
        EntityKind::Workshop => &WORKSHOP_PATHS,
    }
}

/// Look up the declared kind of a field path, if any.
pub fn field_kind(kind: EntityKind, path: &str) -> Option<FieldKind> {
    fields(kind).iter().find(|f| f.path == path).map(|f| f.kind)
}
