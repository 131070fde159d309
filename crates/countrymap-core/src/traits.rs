// crates/countrymap-core/src/traits.rs
use crate::diagnostics::Diagnostic;
use crate::text::{equals_folded, fold_key};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Storage backend for strings and coordinate numbers used by the map.
///
/// This abstraction lets the crate swap how names and coordinates are held
/// in memory without changing the accessors built on top. The standard
/// backend keeps the JSON number literal untouched so output matches input
/// exactly; a float backend is available for callers that want to do math
/// on the coordinates.
///
/// Implementors must be `Clone + Send + Sync + 'static` and the associated
/// types must round-trip through serde, since coordinates are decoded from
/// `serde_json::Value`.
pub trait GeoBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + PartialEq
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Coord: Clone + Send + Sync + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned;

    fn str_from(s: &str) -> Self::Str;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
///
/// # Examples
/// ```rust
/// use countrymap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Côte d'Ivoire").is_named("cote d'ivoire"));
/// assert!(Place("Curaçao").name_contains("CURA"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

/// Receiver for non-fatal conditions met while normalizing.
///
/// The normalizer never prints anything itself; whoever calls it decides
/// where skipped features and duplicate codes end up.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Collects every diagnostic in order.
impl Diagnostics for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic)
    }
}
