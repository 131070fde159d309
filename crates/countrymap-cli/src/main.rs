//! countrymap — Command-line interface for countrymap-core
//!
//! Reads a GeoJSON feature collection of country boundaries and turns it
//! into a JSON object keyed by country code, every geometry in
//! MultiPolygon shape. Features without an assigned code (`-99`) are
//! skipped with a warning on stderr.
//!
//! Usage examples
//! --------------
//!
//! - Normalize `map.geo.json` to stdout
//!   $ countrymap convert > countries.json
//!
//! - Read another file, write a compressed result
//!   $ countrymap -i ne_50m_admin_0.geo.json convert -o countries.json.gz
//!
//! - Only some countries, pretty-printed
//!   $ countrymap --filter=DE,CH,AT convert --pretty
//!
//! - Inspect
//!   $ countrymap stats
//!   $ countrymap country no
//!   $ countrymap search guinea
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for more detail.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use countrymap_core::{CountryMap, DefaultBackend, JsonStyle, LogDiagnostics, NormalizeOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON; everything else goes to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let options = args
        .filter
        .as_deref()
        .map(NormalizeOptions::with_filter_list)
        .unwrap_or_default();

    let mut log = LogDiagnostics::new();
    let map = CountryMap::<DefaultBackend>::load_from_path(&args.input, &options, &mut log)
        .with_context(|| format!("failed to normalize {}", args.input.display()))?;

    match args.command {
        Commands::Convert { output, pretty } => {
            let style = if pretty {
                JsonStyle::Pretty
            } else {
                JsonStyle::Compact
            };
            match output {
                Some(path) => {
                    map.save_as(&path, style)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(
                        countries = map.len(),
                        skipped = log.skipped,
                        "wrote {}",
                        path.display()
                    );
                }
                None => {
                    let stdout = std::io::stdout().lock();
                    countrymap_core::loader::write_json(&map, stdout, style)?;
                    println!();
                }
            }
        }

        Commands::Stats => {
            let stats = map.stats();
            println!("Map statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Skipped: {}", log.skipped);
            println!("  Duplicate codes: {}", log.duplicates);
            println!("  Polygons: {}", stats.polygons);
            println!("  Rings: {}", stats.rings);
            println!("  Positions: {}", stats.positions);
        }

        Commands::Countries => {
            for c in &map {
                println!("{}  {}", c.code(), c.name());
            }
        }

        Commands::Country { code } => match map.find_country_by_code(&code) {
            Some(c) => {
                println!("Country: {}", c.name());
                println!("Code: {}", c.code());
                println!("Polygons: {}", c.polygon_count());
                println!("Rings: {}", c.ring_count());
                println!("Positions: {}", c.position_count());
            }
            None => {
                eprintln!("No country found for: {code}");
            }
        },

        Commands::Search { query } => {
            let matches = map.find_countries_by_substring(&query);
            if matches.is_empty() {
                println!("No countries found matching: {query}");
            } else {
                for c in matches {
                    println!("{} ({})", c.name(), c.code());
                }
            }
        }
    }

    Ok(())
}
