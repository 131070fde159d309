// crates/countrymap-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading, normalizing or writing country data.
///
/// Every variant aborts the whole document: the normalizer never hands back
/// a partially built map.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A feature that was not skipped carries no geometry.
    #[error("feature '{country}' has no geometry")]
    MissingGeometry { country: String },

    /// The geometry object lacks a string `type` or is not an object.
    #[error("feature '{country}' has malformed geometry: {source}")]
    Geometry {
        country: String,
        #[source]
        source: serde_json::Error,
    },

    /// Only `Polygon` and `MultiPolygon` can be normalized.
    #[error("feature '{country}' has unsupported geometry type '{kind}'")]
    UnsupportedGeometry { country: String, kind: String },

    /// Coordinates do not have the nesting required by the declared type.
    #[error("feature '{country}' has malformed coordinates: {source}")]
    Coordinates {
        country: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GeoError>;
