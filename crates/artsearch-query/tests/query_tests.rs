use artsearch_core::types::{EntityKind, FilterSet, GeoFilter};
use artsearch_query::builder::build_search_query;
use serde_json::{json, Value};

fn to_json(kind: EntityKind, term: Option<&str>, filters: &FilterSet) -> Value {
    build_search_query(kind, term, filters)
        .to_value()
        .expect("serialize")
}

#[test]
fn repeated_calls_are_structurally_identical() {
    let filters = FilterSet {
        category: Some("Dance".to_string()),
        min_rating: Some(4.0),
        ..FilterSet::default()
    };
    let first = to_json(EntityKind::Artist, Some("prerna"), &filters);
    let second = to_json(EntityKind::Artist, Some("prerna"), &filters);
    assert_eq!(first, second);
}

#[test]
fn filters_are_independent_and_commutative() {
    let category_only = FilterSet {
        category: Some("Dance".to_string()),
        ..FilterSet::default()
    };
    let city_only = FilterSet {
        city: Some("Delhi".to_string()),
        ..FilterSet::default()
    };
    let combined = FilterSet {
        category: Some("Dance".to_string()),
        city: Some("Delhi".to_string()),
        ..FilterSet::default()
    };

    let mut merged: Vec<Value> = Vec::new();
    for filters in [&category_only, &city_only] {
        merged.extend(
            to_json(EntityKind::Artist, None, filters)["filter"]
                .as_array()
                .expect("filter list")
                .clone(),
        );
    }
    let mut direct = to_json(EntityKind::Artist, None, &combined)["filter"]
        .as_array()
        .expect("filter list")
        .clone();

    // Set equality: order between independent filter clauses is cosmetic.
    let key = |v: &Value| v.to_string();
    merged.sort_by_key(key);
    direct.sort_by_key(key);
    assert_eq!(merged, direct);
}

#[test]
fn empty_input_omits_every_clause_list() {
    let v = to_json(EntityKind::Artist, Some(""), &FilterSet::default());
    let obj = v.as_object().expect("object");
    assert!(!obj.contains_key("must"));
    assert!(!obj.contains_key("filter"));
    assert!(!obj.contains_key("should"));
}

#[test]
fn lone_min_price_gets_max_safe_upper_bound() {
    let filters = FilterSet {
        min_price: Some(500.0),
        ..FilterSet::default()
    };
    let v = to_json(EntityKind::Artist, None, &filters);
    assert_eq!(
        v["filter"][0],
        json!({
            "range": { "path": "pricePerHour", "gte": 500, "lte": 9007199254740991u64 }
        })
    );
}

#[test]
fn lone_max_price_gets_zero_lower_bound() {
    let filters = FilterSet {
        max_price: Some(2000.0),
        ..FilterSet::default()
    };
    let v = to_json(EntityKind::Workshop, None, &filters);
    assert_eq!(
        v["filter"][0],
        json!({ "range": { "path": "price", "gte": 0, "lte": 2000 } })
    );
}

#[test]
fn explicit_false_availability_is_a_real_filter() {
    let requested_false = FilterSet {
        is_available: Some(false),
        ..FilterSet::default()
    };
    let v = to_json(EntityKind::Artist, None, &requested_false);
    assert_eq!(
        v["filter"][0],
        json!({ "equals": { "path": "isAvailable", "value": false } })
    );

    let not_requested = to_json(EntityKind::Artist, None, &FilterSet::default());
    assert!(not_requested.as_object().expect("object").get("filter").is_none());
}

#[test]
fn geo_radius_is_converted_to_meters() {
    let filters = FilterSet {
        geo: Some(GeoFilter {
            center: [77.209, 28.6139],
            radius_km: 5.0,
        }),
        ..FilterSet::default()
    };
    let v = to_json(EntityKind::Artist, None, &filters);
    assert_eq!(v["filter"][0]["geoWithin"]["circle"]["radius"], json!(5000.0));
    assert_eq!(
        v["filter"][0]["geoWithin"]["circle"]["center"]["coordinates"],
        json!([77.209, 28.6139])
    );
}

#[test]
fn min_rating_range_has_no_upper_bound() {
    let filters = FilterSet {
        min_rating: Some(4.5),
        ..FilterSet::default()
    };
    let v = to_json(EntityKind::Artist, None, &filters);
    assert_eq!(
        v["filter"][0],
        json!({ "range": { "path": "rating", "gte": 4.5 } })
    );
}

#[test]
fn subcategories_emit_one_match_any_clause() {
    let filters = FilterSet {
        subcategories: Some(vec!["Kathak".to_string(), "Ballet".to_string()]),
        ..FilterSet::default()
    };
    let v = to_json(EntityKind::Artist, None, &filters);
    assert_eq!(
        v["filter"][0],
        json!({ "text": { "query": ["Kathak", "Ballet"], "path": "subcategories" } })
    );
}

#[test]
fn search_term_builds_boosted_prefix_plus_fuzzy_disjunction() {
    let v = to_json(EntityKind::Artist, Some("prerna"), &FilterSet::default());
    let must = v["must"].as_array().expect("must list");
    assert_eq!(must.len(), 1);

    let inner = &must[0]["compound"];
    assert_eq!(inner["minimumShouldMatch"], json!(1));
    let should = inner["should"].as_array().expect("should list");
    assert_eq!(should.len(), 2);
    assert_eq!(
        should[0],
        json!({
            "autocomplete": {
                "query": "prerna",
                "path": "name.autocomplete",
                "score": { "boost": { "value": 3.0 } }
            }
        })
    );
    assert_eq!(
        should[1],
        json!({
            "text": {
                "query": "prerna",
                "path": ["name", "bio", "categoryText", "searchText"],
                "fuzzy": { "maxEdits": 1, "prefixLength": 2 }
            }
        })
    );
}

#[test]
fn term_and_filters_compose() {
    let filters = FilterSet {
        category: Some("Music".to_string()),
        city: Some("Mumbai".to_string()),
        is_available: Some(true),
        ..FilterSet::default()
    };
    let v = to_json(EntityKind::Artist, Some("sitar"), &filters);
    assert_eq!(v["must"].as_array().expect("must").len(), 1);
    assert_eq!(v["filter"].as_array().expect("filter").len(), 3);
    assert!(v.as_object().expect("object").get("should").is_none());
}
