// crates/countrymap-core/src/model/convert.rs
use crate::diagnostics::{Diagnostic, LogDiagnostics};
use crate::error::{GeoError, Result};
use crate::model::domain::{Country, CountryMap, MultiPolygon, Polygon};
use crate::raw::{FeatureCollectionRaw, GeometryRaw};
use crate::traits::{Diagnostics, GeoBackend};
use tracing::debug;

/// Knobs for [`normalize_with`].
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Keep only these codes (ASCII case-insensitive). `None` keeps all.
    pub filter: Option<Vec<String>>,
}

impl NormalizeOptions {
    /// Builds a filter from a comma-separated list such as `"DE, ch,AT"`.
    /// Blank items are dropped; an empty list means no filter.
    pub fn with_filter_list(list: &str) -> Self {
        let codes: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_owned)
            .collect();
        Self {
            filter: (!codes.is_empty()).then_some(codes),
        }
    }

    fn admits(&self, code: &str) -> bool {
        match &self.filter {
            Some(codes) => codes.iter().any(|c| c.eq_ignore_ascii_case(code)),
            None => true,
        }
    }
}

/// Normalizes a feature collection with default options, logging
/// diagnostics through `tracing`.
pub fn normalize<B: GeoBackend>(document: FeatureCollectionRaw) -> Result<CountryMap<B>> {
    normalize_with(document, &NormalizeOptions::default(), &mut LogDiagnostics::new())
}

/// **Feature Normalizer:** GeoJSON features -> map keyed by country code.
///
/// Features are processed in order:
/// 1. A sentinel code (`-99`) drops the feature and reports
///    [`Diagnostic::Skipped`]; its geometry is never looked at.
/// 2. Codes outside `options.filter` are dropped silently.
/// 3. `Polygon` coordinates are wrapped into a one-element `MultiPolygon`;
///    `MultiPolygon` coordinates are taken as they are.
/// 4. A code seen before replaces the earlier record and reports
///    [`Diagnostic::DuplicateCode`].
///
/// Geometry is decoded only for features that survive steps 1 and 2. Any
/// other geometry type, a missing or malformed geometry object, or
/// mis-nested coordinates fail the whole document.
pub fn normalize_with<B, D>(
    document: FeatureCollectionRaw,
    options: &NormalizeOptions,
    diagnostics: &mut D,
) -> Result<CountryMap<B>>
where
    B: GeoBackend,
    D: Diagnostics + ?Sized,
{
    let mut map = CountryMap::with_capacity(document.features.len());

    for feature in document.features {
        let country_name = feature.properties.admin;
        let country_code = feature.properties.iso_a2_eh;

        if country_code.is_sentinel() {
            diagnostics.report(Diagnostic::Skipped { country_name });
            continue;
        }

        let code = country_code.as_key();
        if !options.admits(&code) {
            debug!(code = %code, "filtered out {country_name}");
            continue;
        }

        let geometry = match feature.geometry.filter(|g| !g.is_null()) {
            Some(geometry) => {
                let geometry: GeometryRaw =
                    serde_json::from_value(geometry).map_err(|source| GeoError::Geometry {
                        country: country_name.clone(),
                        source,
                    })?;
                to_multi_polygon::<B>(geometry, &country_name)?
            }
            None => {
                return Err(GeoError::MissingGeometry {
                    country: country_name,
                })
            }
        };

        let record = Country {
            code,
            country_name: B::str_from(&country_name),
            geometry,
        };
        if let Some(replaced) = map.insert(record) {
            diagnostics.report(Diagnostic::DuplicateCode {
                code: replaced.code,
                replaced: B::str_to_string(&replaced.country_name),
                replacement: country_name,
            });
        }
    }

    Ok(map)
}

fn to_multi_polygon<B: GeoBackend>(geometry: GeometryRaw, country: &str) -> Result<MultiPolygon<B>> {
    let malformed = |source| GeoError::Coordinates {
        country: country.to_owned(),
        source,
    };

    match geometry.r#type.as_str() {
        "Polygon" => {
            let polygon: Polygon<B> =
                serde_json::from_value(geometry.coordinates).map_err(malformed)?;
            Ok(vec![polygon])
        }
        "MultiPolygon" => serde_json::from_value(geometry.coordinates).map_err(malformed),
        other => Err(GeoError::UnsupportedGeometry {
            country: country.to_owned(),
            kind: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{FloatBackend, StandardBackend};
    use serde_json::json;

    fn collection(features: serde_json::Value) -> FeatureCollectionRaw {
        serde_json::from_value(json!({ "type": "FeatureCollection", "features": features }))
            .unwrap()
    }

    fn feature(admin: &str, code: serde_json::Value, kind: &str, coords: serde_json::Value) -> serde_json::Value {
        json!({
            "type": "Feature",
            "properties": { "admin": admin, "iso_a2_eh": code },
            "geometry": { "type": kind, "coordinates": coords }
        })
    }

    fn run(doc: FeatureCollectionRaw) -> (Result<CountryMap<StandardBackend>>, Vec<Diagnostic>) {
        let mut diags = Vec::new();
        let res = normalize_with(doc, &NormalizeOptions::default(), &mut diags);
        (res, diags)
    }

    #[test]
    fn polygon_is_wrapped_once() {
        let ring = json!([[[0, 0], [1, 0], [1, 1], [0, 0]]]);
        let doc = collection(json!([feature("Wakanda", json!("WK"), "Polygon", ring.clone())]));
        let (map, diags) = run(doc);
        let map = map.unwrap();

        assert!(diags.is_empty());
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["WK"]["geometry"], json!([ring]));
        assert_eq!(json["WK"]["country_name"], "Wakanda");
    }

    #[test]
    fn multipolygon_passes_through() {
        let coords = json!([[[[0, 0], [1, 1], [2, 2]]], [[[5.5, -3.25], [6, 7]]]]);
        let doc = collection(json!([feature("Twoland", json!("TL"), "MultiPolygon", coords.clone())]));
        let map = run(doc).0.unwrap();
        assert_eq!(serde_json::to_value(&map).unwrap()["TL"]["geometry"], coords);
        assert_eq!(map.countries()[0].polygon_count(), 2);
    }

    #[test]
    fn sentinel_is_skipped_before_geometry_is_read() {
        let doc = collection(json!([
            {
                "properties": { "admin": "Antarctica", "iso_a2_eh": -99 },
                "geometry": { "type": "GeometryCollection", "geometries": [] }
            },
            { "properties": { "admin": "Nowhere", "iso_a2_eh": "-99" }, "geometry": null }
        ]));
        let (map, diags) = run(doc);

        assert!(map.unwrap().is_empty());
        assert_eq!(
            diags,
            vec![
                Diagnostic::Skipped { country_name: "Antarctica".into() },
                Diagnostic::Skipped { country_name: "Nowhere".into() },
            ]
        );
    }

    #[test]
    fn duplicate_code_overwrites_and_is_reported() {
        let doc = collection(json!([
            feature("Old Name", json!("DU"), "Polygon", json!([[[0, 0]]])),
            feature("Middle", json!("MI"), "Polygon", json!([[[1, 1]]])),
            feature("New Name", json!("DU"), "Polygon", json!([[[2, 2]]])),
        ]));
        let (map, diags) = run(doc);
        let map = map.unwrap();

        assert_eq!(map.codes().collect::<Vec<_>>(), ["DU", "MI"]);
        assert_eq!(map.get("DU").unwrap().name(), "New Name");
        assert_eq!(
            serde_json::to_value(map.get("DU").unwrap().geometry()).unwrap(),
            json!([[[[2, 2]]]])
        );
        assert_eq!(
            diags,
            vec![Diagnostic::DuplicateCode {
                code: "DU".into(),
                replaced: "Old Name".into(),
                replacement: "New Name".into(),
            }]
        );
    }

    #[test]
    fn unsupported_geometry_fails_the_document() {
        let doc = collection(json!([feature("Dot", json!("DT"), "Point", json!([1, 2]))]));
        match run(doc).0 {
            Err(GeoError::UnsupportedGeometry { country, kind }) => {
                assert_eq!(country, "Dot");
                assert_eq!(kind, "Point");
            }
            other => panic!("expected UnsupportedGeometry, got {other:?}"),
        }
    }

    #[test]
    fn missing_geometry_fails_for_kept_features() {
        let doc = collection(json!([{ "properties": { "admin": "Ghost", "iso_a2_eh": "GH" }, "geometry": null }]));
        assert!(matches!(run(doc).0, Err(GeoError::MissingGeometry { country }) if country == "Ghost"));
    }

    #[test]
    fn malformed_geometry_object_fails_for_kept_features() {
        let doc = collection(json!([{ "properties": { "admin": "Typeless", "iso_a2_eh": "TY" }, "geometry": { "coordinates": [] } }]));
        assert!(matches!(run(doc).0, Err(GeoError::Geometry { country, .. }) if country == "Typeless"));
    }

    #[test]
    fn filtered_out_features_never_decode_geometry() {
        let doc = collection(json!([
            { "properties": { "admin": "Elsewhere", "iso_a2_eh": "EL" }, "geometry": "n/a" },
            feature("Germany", json!("DE"), "Polygon", json!([[[0, 0]]])),
        ]));
        let mut diags = Vec::new();
        let map: CountryMap<StandardBackend> =
            normalize_with(doc, &NormalizeOptions::with_filter_list("DE"), &mut diags).unwrap();
        assert_eq!(map.codes().collect::<Vec<_>>(), ["DE"]);
    }

    #[test]
    fn shallow_coordinates_are_rejected() {
        // MultiPolygon declared, Polygon depth supplied.
        let doc = collection(json!([feature("Flat", json!("FL"), "MultiPolygon", json!([[[0, 0], [1, 1]]]))]));
        assert!(matches!(run(doc).0, Err(GeoError::Coordinates { .. })));
    }

    #[test]
    fn filter_keeps_requested_codes_only() {
        let doc = collection(json!([
            feature("Germany", json!("DE"), "Polygon", json!([[[0, 0]]])),
            feature("France", json!("FR"), "Polygon", json!([[[0, 0]]])),
            feature("Switzerland", json!("CH"), "Polygon", json!([[[0, 0]]])),
        ]));
        let options = NormalizeOptions::with_filter_list("de, ch,");
        let mut diags = Vec::new();
        let map: CountryMap<StandardBackend> = normalize_with(doc, &options, &mut diags).unwrap();

        assert_eq!(map.codes().collect::<Vec<_>>(), ["DE", "CH"]);
        assert!(diags.is_empty());
    }

    #[test]
    fn empty_filter_list_means_no_filter() {
        assert!(NormalizeOptions::with_filter_list(" , ").filter.is_none());
    }

    #[test]
    fn float_backend_decodes_numbers() {
        let doc = collection(json!([feature("Floaty", json!("FT"), "Polygon", json!([[[1, 2.5]]]))]));
        let map: CountryMap<FloatBackend> = normalize(doc).unwrap();
        assert_eq!(map.get("FT").unwrap().geometry, vec![vec![vec![vec![1.0, 2.5]]]]);
    }
}
