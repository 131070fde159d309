//! Basic usage example for countrymap-core
//!
//! Loads the bundled sample collection, normalizes it and prints a few
//! lookups plus the resulting JSON.
//!
//! ```text
//! cargo run -p countrymap-core --example basic_usage
//! ```

use countrymap_core::{
    CountryMap, DefaultBackend, JsonStyle, LogDiagnostics, NormalizeOptions, Result,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.geo.json");

    let mut log = LogDiagnostics::new();
    let map = CountryMap::<DefaultBackend>::load_from_path(&path, &NormalizeOptions::default(), &mut log)?;

    println!("=== countrymap basic usage ===\n");
    let stats = map.stats();
    println!("Countries: {} (skipped {})", stats.countries, log.skipped);
    println!("Polygons:  {}", stats.polygons);
    println!("Positions: {}\n", stats.positions);

    for country in &map {
        println!("{}  {}", country.code(), country.name());
    }
    println!();

    if let Some(c) = map.find_country_by_code("ax") {
        println!("ax -> {} with {} polygons", c.name(), c.polygon_count());
    }
    for c in map.find_countries_by_substring("curacao") {
        println!("search 'curacao' -> {} ({})", c.name(), c.code());
    }
    println!();

    countrymap_core::loader::write_json(&map, std::io::stdout().lock(), JsonStyle::Pretty)?;
    println!();
    Ok(())
}
