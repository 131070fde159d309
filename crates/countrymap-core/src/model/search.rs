// crates/countrymap-core/src/model/search.rs
use super::domain::{Country, CountryMap};
use crate::traits::{GeoBackend, NameMatch};

impl<B: GeoBackend> CountryMap<B> {
    /// Exact key lookup, as stored.
    pub fn get(&self, code: &str) -> Option<&Country<B>> {
        self.slot(code).map(|slot| &self.countries()[slot])
    }

    /// Lookup by code, ASCII case-insensitive (e.g. "DE", "de").
    ///
    /// # Example
    ///
    /// ```
    /// use countrymap_core::{normalize, DefaultCountryMap, FeatureCollectionRaw};
    ///
    /// let doc: FeatureCollectionRaw = serde_json::from_str(r#"{"features":[
    ///   {"properties":{"admin":"Germany","iso_a2_eh":"DE"},
    ///    "geometry":{"type":"Polygon","coordinates":[[[6,47],[15,47],[15,55],[6,47]]]}}
    /// ]}"#).unwrap();
    /// let map: DefaultCountryMap = normalize(doc).unwrap();
    ///
    /// assert_eq!(map.find_country_by_code("de").unwrap().name(), "Germany");
    /// ```
    pub fn find_country_by_code(&self, code: &str) -> Option<&Country<B>> {
        let code = code.trim();
        self.get(code).or_else(|| {
            self.countries()
                .iter()
                .find(|c| c.code().eq_ignore_ascii_case(code))
        })
    }

    /// Lookup by exact name, ignoring case and accents.
    pub fn find_country_by_name(&self, name: &str) -> Option<&Country<B>> {
        self.countries().iter().find(|c| c.is_named(name))
    }

    /// All records whose name contains `substr`, ignoring case and accents.
    /// An empty query matches nothing.
    pub fn find_countries_by_substring(&self, substr: &str) -> Vec<&Country<B>> {
        let q = substr.trim();
        if q.is_empty() {
            return Vec::new();
        }
        self.countries()
            .iter()
            .filter(|c| c.name_contains(q))
            .collect()
    }
}
