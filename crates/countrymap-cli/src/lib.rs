//! countrymap-cli
//! ==============
//!
//! Command-line interface for `countrymap-core`.
//!
//! This crate primarily provides a binary (`countrymap`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install countrymap-cli
//! countrymap --help
//! countrymap -i map.geo.json convert > countries.json
//! countrymap stats
//! countrymap country DE
//! ```
//!
//! For programmatic access, use the [`countrymap-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
