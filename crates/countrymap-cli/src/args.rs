use clap::{Parser, Subcommand};
use countrymap_core::loader::DEFAULT_INPUT_FILENAME;
use std::path::PathBuf;

/// CLI arguments for countrymap
#[derive(Debug, Parser)]
#[command(
    name = "countrymap",
    version,
    about = "Normalize GeoJSON country boundaries into a map keyed by country code"
)]
pub struct CliArgs {
    /// Path to the input GeoJSON (`.gz` is decompressed)
    #[arg(
        short = 'i',
        long = "input",
        env = "COUNTRYMAP_INPUT",
        default_value = DEFAULT_INPUT_FILENAME,
        global = true
    )]
    pub input: PathBuf,

    /// Optional comma-separated list of country codes to keep (e.g. DE,CH,AT)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the normalized map as JSON
    Convert {
        /// Output file (`.gz` is compressed); stdout when omitted
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Indent the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show a summary of the normalized map
    Stats,

    /// List all countries
    Countries,

    /// Lookup a country by code
    Country {
        /// Country code, case-insensitive (e.g. DE, no)
        code: String,
    },

    /// Search countries whose name contains a substring
    Search {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },
}
