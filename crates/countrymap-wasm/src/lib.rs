//! countrymap-wasm — WebAssembly bindings for countrymap-core
//!
//! Exposes the country normalizer to JavaScript so a map front-end can turn
//! a Natural Earth GeoJSON export into a code-keyed lookup without a
//! preprocessing step.
//!
//! What it provides
//! ----------------
//! - `normalize_geojson(text, filter?)`: JSON string in, JSON string out
//! - `normalize_geojson_value(object, filter?)`: parsed object in, plain
//!   object out
//! - `country_codes(text)`: the resulting codes, in map order
//! - `map_stats(text)`: `{ countries, polygons, rings, positions }`
//!
//! Skipped features (code `-99`) and duplicate codes are reported with
//! `console.warn`. Malformed input rejects with an `Error`.
//!
//! Quick start
//! -----------
//! ```javascript
//! import init, { normalize_geojson_value } from 'countrymap-wasm';
//!
//! await init();
//! const geo = await (await fetch('/map.geo.json')).json();
//! const countries = normalize_geojson_value(geo);
//! console.log(countries.DE.country_name, countries.DE.geometry.length);
//! ```
use countrymap_core::{
    normalize_with, DefaultCountryMap, Diagnostic, Diagnostics, FeatureCollectionRaw,
    NormalizeOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Routes diagnostics to `console.warn`.
struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        web_sys::console::warn_1(&diagnostic.to_string().into());
    }
}

fn js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn normalize_document(
    doc: FeatureCollectionRaw,
    filter: Option<String>,
) -> Result<DefaultCountryMap, JsError> {
    let options = filter
        .as_deref()
        .map(NormalizeOptions::with_filter_list)
        .unwrap_or_default();
    normalize_with(doc, &options, &mut ConsoleDiagnostics).map_err(js_error)
}

fn parse(text: &str) -> Result<FeatureCollectionRaw, JsError> {
    serde_json::from_str(text).map_err(js_error)
}

/* --------------------------------------------------------------------------
   Normalization
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn normalize_geojson(text: &str, filter: Option<String>) -> Result<String, JsError> {
    let map = normalize_document(parse(text)?, filter)?;
    serde_json::to_string(&map).map_err(js_error)
}

#[wasm_bindgen]
pub fn normalize_geojson_value(value: JsValue, filter: Option<String>) -> Result<JsValue, JsError> {
    let doc: FeatureCollectionRaw = serde_wasm_bindgen::from_value(value).map_err(js_error)?;
    let map = normalize_document(doc, filter)?;
    // Plain objects rather than ES Maps
    map.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

/* --------------------------------------------------------------------------
   Inspection
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn country_codes(text: &str) -> Result<js_sys::Array, JsError> {
    let map = normalize_document(parse(text)?, None)?;
    Ok(map.codes().map(JsValue::from_str).collect())
}

#[wasm_bindgen]
pub fn map_stats(text: &str) -> Result<JsValue, JsError> {
    let map = normalize_document(parse(text)?, None)?;
    map.stats()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}
