// crates/countrymap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) around the normalizer:
//! reading the GeoJSON source and writing the resulting map. The normalizer
//! itself never touches files or streams.

use crate::error::{GeoError, Result};
use crate::model::{normalize_with, CountryMap, NormalizeOptions};
use crate::raw::FeatureCollectionRaw;
use crate::traits::{Diagnostics, GeoBackend};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub mod common_io;
pub mod writer;

pub use writer::{save_json, write_json, JsonStyle};

/// File name the Natural Earth export is conventionally saved under.
pub const DEFAULT_INPUT_FILENAME: &str = "map.geo.json";

/// Parses a feature collection from any reader.
pub fn read_collection<R: Read>(reader: R) -> Result<FeatureCollectionRaw> {
    serde_json::from_reader(reader).map_err(GeoError::Json)
}

/// Reads and parses a GeoJSON file (`.gz` is decompressed transparently).
pub fn load_collection(path: impl AsRef<Path>) -> Result<FeatureCollectionRaw> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let collection = read_collection(reader)?;
    debug!(
        path = %path.display(),
        features = collection.features.len(),
        "loaded feature collection"
    );
    Ok(collection)
}

impl<B: GeoBackend> CountryMap<B> {
    /// Loads `path` and normalizes it in one go.
    pub fn load_from_path<D>(
        path: impl AsRef<Path>,
        options: &NormalizeOptions,
        diagnostics: &mut D,
    ) -> Result<Self>
    where
        D: Diagnostics + ?Sized,
    {
        let collection = load_collection(path)?;
        normalize_with(collection, options, diagnostics)
    }

    /// Writes the map as JSON; `*.gz` paths are compressed.
    pub fn save_as(&self, path: impl AsRef<Path>, style: JsonStyle) -> Result<()> {
        save_json(path, self, style)
    }
}
