// crates/countrymap-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod search;

pub use convert::{normalize, normalize_with, NormalizeOptions};
pub use domain::{Country, CountryMap, MultiPolygon, Polygon, Position, Ring};

/// The map with the default backend.
pub type DefaultCountryMap = CountryMap<crate::common::DefaultBackend>;
