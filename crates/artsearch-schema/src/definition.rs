//! JSON index definitions pushed to the search backend at deploy time.

use artsearch_core::types::EntityKind;
use serde_json::{json, Map, Value};

use crate::fields::{fields, FieldKind};

/// Edge-n-gram bounds for autocomplete sub-fields: two characters matches
/// the composer's minimum prefix length, fifteen covers realistic names.
pub const AUTOCOMPLETE_MIN_GRAMS: u32 = 2;
pub const AUTOCOMPLETE_MAX_GRAMS: u32 = 15;

/// The complete index definition for one entity type: static mappings (no
/// dynamic fields) with one entry per declared field.
pub fn index_definition(kind: EntityKind) -> Value {
    let mut mapped = Map::new();
    for field in fields(kind) {
        mapped.insert(field.path.to_string(), field_mapping(field.kind));
    }
    json!({
        "name": kind.index_name(),
        "mappings": {
            "dynamic": false,
            "fields": Value::Object(mapped),
        }
    })
}

fn field_mapping(kind: FieldKind) -> Value {
    match kind {
        FieldKind::Text { autocomplete: true } => json!([
            { "type": "string" },
            {
                "type": "autocomplete",
                "tokenization": "edgeGram",
                "minGrams": AUTOCOMPLETE_MIN_GRAMS,
                "maxGrams": AUTOCOMPLETE_MAX_GRAMS,
                "foldDiacritics": true,
            }
        ]),
        FieldKind::Text { autocomplete: false } => json!({ "type": "string" }),
        // Facets are indexed both ways: exact-match token for filter
        // clauses, stringFacet for facet counts.
        FieldKind::Facet => json!([
            { "type": "string" },
            { "type": "stringFacet" }
        ]),
        FieldKind::Number => json!({ "type": "number" }),
        FieldKind::Boolean => json!({ "type": "boolean" }),
        FieldKind::Date => json!({ "type": "date" }),
        FieldKind::Geo => json!({ "type": "geo" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_definition_structure() {
        let def = index_definition(EntityKind::Artist);
        assert_eq!(def["name"], "artists");
        assert_eq!(def["mappings"]["dynamic"], false);

        let name = &def["mappings"]["fields"]["name"];
        assert!(name.is_array(), "autocomplete text field maps to a multi");
        assert_eq!(name[1]["type"], "autocomplete");
        assert_eq!(name[1]["tokenization"], "edgeGram");
        assert_eq!(name[1]["minGrams"], 2);
        assert_eq!(name[1]["maxGrams"], 15);
        assert_eq!(name[1]["foldDiacritics"], true);

        assert_eq!(def["mappings"]["fields"]["pricePerHour"]["type"], "number");
        assert_eq!(def["mappings"]["fields"]["location"]["type"], "geo");
    }

    #[test]
    fn workshop_definition_structure() {
        let def = index_definition(EntityKind::Workshop);
        assert_eq!(def["name"], "workshops");
        assert_eq!(def["mappings"]["fields"]["title"][1]["type"], "autocomplete");
        assert_eq!(def["mappings"]["fields"]["price"]["type"], "number");
        assert_eq!(def["mappings"]["fields"]["mode"][1]["type"], "stringFacet");
        assert_eq!(
            def["mappings"]["fields"]["nextAvailableDate"]["type"],
            "date"
        );
    }

    #[test]
    fn every_declared_field_is_mapped() {
        for kind in [EntityKind::Artist, EntityKind::Workshop] {
            let def = index_definition(kind);
            let mapped = def["mappings"]["fields"]
                .as_object()
                .expect("fields object");
            assert_eq!(mapped.len(), fields(kind).len());
        }
    }
}
