use countrymap_core::{
    normalize, normalize_with, read_collection, DefaultCountryMap, Diagnostic,
    FeatureCollectionRaw, NormalizeOptions,
};
use serde_json::{json, Value};

const SAMPLE: &str = include_str!("fixtures/sample.geo.json");

fn parse(value: Value) -> FeatureCollectionRaw {
    serde_json::from_value(value).unwrap()
}

fn run(doc: FeatureCollectionRaw) -> (DefaultCountryMap, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let map = normalize_with(doc, &NormalizeOptions::default(), &mut diagnostics).unwrap();
    (map, diagnostics)
}

#[test]
fn single_polygon_becomes_one_element_multipolygon() {
    let doc = parse(json!({"features": [{
        "properties": {"admin": "Wakanda", "iso_a2_eh": "WK"},
        "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
    }]}));
    let (map, diagnostics) = run(doc);

    assert!(diagnostics.is_empty());
    assert_eq!(
        serde_json::to_string(&map).unwrap(),
        r#"{"WK":{"country_name":"Wakanda","geometry":[[[[0,0],[1,0],[1,1],[0,0]]]]}}"#
    );
}

#[test]
fn sentinel_only_document_yields_empty_map() {
    let doc = parse(json!({"features": [{
        "properties": {"admin": "Antarctica", "iso_a2_eh": -99},
        "geometry": {"type": "Polygon", "coordinates": [[[0,0]]]}
    }]}));
    let (map, diagnostics) = run(doc);

    assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].to_string().contains("Antarctica"));
}

#[test]
fn multipolygon_coordinates_are_untouched() {
    let coords = json!([[[[0,0],[1,1],[2,2]]]]);
    let doc = parse(json!({"features": [{
        "properties": {"admin": "Multi", "iso_a2_eh": "MU"},
        "geometry": {"type": "MultiPolygon", "coordinates": coords}
    }]}));
    let (map, _) = run(doc);

    assert_eq!(serde_json::to_value(&map).unwrap()["MU"]["geometry"], coords);
}

#[test]
fn sample_dataset_keys_names_and_order() {
    let source: Value = serde_json::from_str(SAMPLE).unwrap();
    let doc = read_collection(SAMPLE.as_bytes()).unwrap();
    let (map, diagnostics) = run(doc);

    assert_eq!(map.codes().collect::<Vec<_>>(), ["WK", "AX", "CW"]);
    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::Skipped { country_name: "Antarctica".into() },
            Diagnostic::Skipped { country_name: "N. Cyprus".into() },
        ]
    );

    let out = serde_json::to_value(&map).unwrap();
    for feature in source["features"].as_array().unwrap() {
        let code = &feature["properties"]["iso_a2_eh"];
        let Some(code) = code.as_str().filter(|c| *c != "-99") else {
            continue;
        };
        let record = &out[code];
        assert_eq!(record["country_name"], feature["properties"]["admin"]);

        let coords = feature["geometry"]["coordinates"].clone();
        let expected = match feature["geometry"]["type"].as_str() {
            Some("Polygon") => json!([coords]),
            _ => coords,
        };
        assert_eq!(record["geometry"], expected);
    }
}

#[test]
fn later_duplicate_wins() {
    let doc = parse(json!({"features": [
        {"properties": {"admin": "Cyprus", "iso_a2_eh": "CY"},
         "geometry": {"type": "Polygon", "coordinates": [[[33,35]]]}},
        {"properties": {"admin": "Cyprus U.N. Buffer Zone", "iso_a2_eh": "CY"},
         "geometry": {"type": "MultiPolygon", "coordinates": [[[[33.5,35.1]]]]}}
    ]}));
    let (map, diagnostics) = run(doc);

    assert_eq!(map.len(), 1);
    let out = serde_json::to_value(&map).unwrap();
    assert_eq!(out["CY"]["country_name"], "Cyprus U.N. Buffer Zone");
    assert_eq!(out["CY"]["geometry"], json!([[[[33.5, 35.1]]]]));
    assert!(matches!(diagnostics.as_slice(), [Diagnostic::DuplicateCode { code, .. }] if code == "CY"));
}

#[test]
fn malformed_documents_fail_whole() {
    let missing_features = read_collection(r#"{"type":"FeatureCollection"}"#.as_bytes());
    assert!(missing_features.is_err());

    let missing_admin = read_collection(
        r#"{"features":[{"properties":{"iso_a2_eh":"XX"},"geometry":null}]}"#.as_bytes(),
    );
    assert!(missing_admin.is_err());

    let doc = parse(json!({"features": [
        {"properties": {"admin": "Fine", "iso_a2_eh": "FI"},
         "geometry": {"type": "Polygon", "coordinates": [[[0,0]]]}},
        {"properties": {"admin": "Line", "iso_a2_eh": "LI"},
         "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1]]}}
    ]}));
    let res: countrymap_core::Result<DefaultCountryMap> = normalize(doc);
    assert!(res.is_err());
}

#[test]
fn skipped_features_may_carry_any_geometry() {
    let wakanda = r#"{"properties":{"admin":"Wakanda","iso_a2_eh":"WK"},
        "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}"#;

    for skipped_geometry in [r#"{"coordinates":[]}"#, r#""n/a""#, "42", "[]"] {
        let text = format!(
            r#"{{"features":[{{"properties":{{"admin":"Antarctica","iso_a2_eh":-99}},"geometry":{skipped_geometry}}},{wakanda}]}}"#
        );
        let doc = read_collection(text.as_bytes()).unwrap();
        let (map, diagnostics) = run(doc);

        assert_eq!(map.codes().collect::<Vec<_>>(), ["WK"], "geometry {skipped_geometry}");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::Skipped { country_name: "Antarctica".into() }]
        );
    }
}
