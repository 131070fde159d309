// crates/countrymap-core/src/lib.rs

//! countrymap-core
//! ===============
//!
//! Turns a GeoJSON `FeatureCollection` of country boundaries (the Natural
//! Earth "admin 0" export) into a map keyed by country code:
//!
//! ```text
//! { "DE": { "country_name": "Germany", "geometry": [ polygon, ... ] }, ... }
//! ```
//!
//! Every geometry comes out MultiPolygon-shaped, so consumers never branch
//! on `Polygon` vs `MultiPolygon`. Features without an assigned code
//! (`iso_a2_eh == -99`) are left out and reported through [`Diagnostics`].
//!
//! ```
//! use countrymap_core::{normalize_with, Diagnostic, DefaultCountryMap, NormalizeOptions};
//!
//! let doc = serde_json::from_str(r#"{"features":[
//!   {"properties":{"admin":"Wakanda","iso_a2_eh":"WK"},
//!    "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
//!   {"properties":{"admin":"Antarctica","iso_a2_eh":-99},
//!    "geometry":{"type":"Polygon","coordinates":[]}}
//! ]}"#).unwrap();
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let map: DefaultCountryMap =
//!     normalize_with(doc, &NormalizeOptions::default(), &mut diagnostics).unwrap();
//!
//! assert_eq!(
//!     serde_json::to_string(&map).unwrap(),
//!     r#"{"WK":{"country_name":"Wakanda","geometry":[[[[0,0],[1,0],[1,1],[0,0]]]]}}"#
//! );
//! assert_eq!(diagnostics[0].to_string(), "skipping Antarctica");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod model;
pub mod raw;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DefaultBackend, FloatBackend, MapStats, StandardBackend};
pub use crate::diagnostics::{Diagnostic, LogDiagnostics};
pub use crate::error::{GeoError, Result};
pub use crate::loader::{load_collection, read_collection, JsonStyle};
pub use crate::model::{
    normalize, normalize_with, Country, CountryMap, DefaultCountryMap, MultiPolygon,
    NormalizeOptions,
};
pub use crate::raw::{CountryCodeRaw, FeatureCollectionRaw, FeatureRaw, SENTINEL_CODE};
pub use crate::traits::{Diagnostics, GeoBackend, NameMatch};
