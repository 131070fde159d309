// crates/countrymap-core/src/raw.rs
//! Raw GeoJSON input, deserialized as-is.
//!
//! Only the fields the normalizer reads are modelled; everything else in the
//! document (`type`, `bbox`, the many Natural Earth properties) is ignored.
//! Geometry stays an untyped JSON value here: features with the sentinel
//! code may carry anything in that slot, so it is only decoded into
//! [`GeometryRaw`] once the feature is known to be kept.

use serde::Deserialize;
use std::fmt;

/// The value Natural Earth uses for "no ISO code assigned".
pub const SENTINEL_CODE: i64 = -99;

/// Top-level `FeatureCollection`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollectionRaw {
    pub features: Vec<FeatureRaw>,
}

/// A single country feature.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureRaw {
    pub properties: PropertiesRaw,
    /// GeoJSON allows `null` here; that only matters for features we keep.
    #[serde(default)]
    pub geometry: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PropertiesRaw {
    /// Human-readable country name.
    pub admin: String,
    /// ISO 3166-1 alpha-2 code, or `-99`.
    pub iso_a2_eh: CountryCodeRaw,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryRaw {
    pub r#type: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

/// The country code as found in the dataset: usually a string, but the
/// sentinel is stored as a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CountryCodeRaw {
    Text(String),
    Number(serde_json::Number),
}

impl CountryCodeRaw {
    /// Loose numeric comparison against [`SENTINEL_CODE`]: `-99`, `-99.0`
    /// and `"-99"` all count.
    pub fn is_sentinel(&self) -> bool {
        let sentinel = SENTINEL_CODE as f64;
        match self {
            CountryCodeRaw::Number(n) => n.as_f64() == Some(sentinel),
            CountryCodeRaw::Text(s) => s.trim().parse::<f64>().ok() == Some(sentinel),
        }
    }

    /// The key used in the output map.
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CountryCodeRaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryCodeRaw::Text(s) => f.write_str(s),
            CountryCodeRaw::Number(n) => write!(f, "{n}"),
        }
    }
}
