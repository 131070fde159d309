// crates/countrymap-core/src/model/domain.rs
use crate::common::MapStats;
use crate::traits::{GeoBackend, NameMatch};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// `[x, y]` (arity is not checked).
pub type Position<B> = Vec<<B as GeoBackend>::Coord>;
/// A closed sequence of positions.
pub type Ring<B> = Vec<Position<B>>;
/// Outer boundary plus optional holes.
pub type Polygon<B> = Vec<Ring<B>>;
/// The one geometry shape stored in the map.
pub type MultiPolygon<B> = Vec<Polygon<B>>;

/// A normalized country record.
///
/// Serializes as `{"country_name": ..., "geometry": ...}`; the code is the
/// key of the surrounding map and is not repeated.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(bound(serialize = ""))]
pub struct Country<B: GeoBackend> {
    #[serde(skip)]
    pub code: String,
    pub country_name: B::Str,
    pub geometry: MultiPolygon<B>,
}

impl<B: GeoBackend> Country<B> {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        self.country_name.as_ref()
    }

    pub fn geometry(&self) -> &MultiPolygon<B> {
        &self.geometry
    }

    pub fn polygon_count(&self) -> usize {
        self.geometry.len()
    }

    pub fn ring_count(&self) -> usize {
        self.geometry.iter().map(Vec::len).sum()
    }

    pub fn position_count(&self) -> usize {
        self.geometry
            .iter()
            .flat_map(|polygon| polygon.iter())
            .map(Vec::len)
            .sum()
    }
}

impl<B: GeoBackend> NameMatch for Country<B> {
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// Country records keyed by code, in insertion order.
///
/// Records live in one contiguous vector; a side index maps each code to its
/// slot. Re-inserting an existing code replaces the record in place, so the
/// key keeps the position of its first appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryMap<B: GeoBackend> {
    countries: Vec<Country<B>>,
    index: HashMap<String, usize>,
}

impl<B: GeoBackend> Default for CountryMap<B> {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<B: GeoBackend> CountryMap<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            countries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a record under its code, returning the record it replaced.
    pub fn insert(&mut self, country: Country<B>) -> Option<Country<B>> {
        match self.index.get(&country.code) {
            Some(&slot) => Some(std::mem::replace(&mut self.countries[slot], country)),
            None => {
                self.index.insert(country.code.clone(), self.countries.len());
                self.countries.push(country);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// All records in map order.
    pub fn countries(&self) -> &[Country<B>] {
        &self.countries
    }

    /// All codes in map order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.countries.iter().map(Country::code)
    }

    pub fn stats(&self) -> MapStats {
        MapStats {
            countries: self.countries.len(),
            polygons: self.countries.iter().map(Country::polygon_count).sum(),
            rings: self.countries.iter().map(Country::ring_count).sum(),
            positions: self.countries.iter().map(Country::position_count).sum(),
        }
    }

    pub(crate) fn slot(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }
}

impl<'a, B: GeoBackend> IntoIterator for &'a CountryMap<B> {
    type Item = &'a Country<B>;
    type IntoIter = std::slice::Iter<'a, Country<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}

/// Serializes as a JSON object, code -> record, in map order.
impl<B: GeoBackend> Serialize for CountryMap<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.countries.len()))?;
        for country in &self.countries {
            map.serialize_entry(country.code(), country)?;
        }
        map.end()
    }
}
