// crates/countrymap-core/src/common.rs
use crate::traits::GeoBackend;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a normalized map.
///
/// Returned by [`CountryMap::stats`](crate::CountryMap::stats); the counts
/// reflect the map after skipping and filtering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    pub countries: usize,
    pub polygons: usize,
    pub rings: usize,
    pub positions: usize,
}

/// Standard backend: `String` names and coordinates kept as the JSON number
/// literal they were parsed from, so `0` stays `0` and `12.5` stays `12.5`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardBackend;

impl GeoBackend for StandardBackend {
    type Str = String;
    type Coord = serde_json::Number;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Float backend: coordinates decoded to `f64`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatBackend;

impl GeoBackend for FloatBackend {
    type Str = String;
    type Coord = f64;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }
}

/// Convenient alias used throughout the CLI and bindings.
pub type DefaultBackend = StandardBackend;
