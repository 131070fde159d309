// crates/countrymap-core/src/diagnostics.rs
use crate::traits::Diagnostics;
use std::fmt;
use tracing::warn;

/// A non-fatal condition reported by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The feature carried the sentinel code and was left out.
    Skipped { country_name: String },
    /// A later feature overwrote an earlier record with the same code.
    DuplicateCode {
        code: String,
        replaced: String,
        replacement: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Skipped { country_name } => write!(f, "skipping {country_name}"),
            Diagnostic::DuplicateCode {
                code,
                replaced,
                replacement,
            } => write!(
                f,
                "duplicate country code {code}: {replacement} replaces {replaced}"
            ),
        }
    }
}

/// Sends diagnostics to `tracing` at warn level and keeps counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics {
    pub skipped: usize,
    pub duplicates: usize,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Skipped { .. } => self.skipped += 1,
            Diagnostic::DuplicateCode { .. } => self.duplicates += 1,
        }
        warn!("{diagnostic}");
    }
}
