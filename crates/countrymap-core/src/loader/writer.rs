// crates/countrymap-core/src/loader/writer.rs
use super::common_io;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// One line, no whitespace.
    #[default]
    Compact,
    Pretty,
}

/// Serializes `value` as JSON into `sink` and flushes it.
pub fn write_json<T, W>(value: &T, mut sink: W, style: JsonStyle) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match style {
        JsonStyle::Compact => serde_json::to_writer(&mut sink, value)?,
        JsonStyle::Pretty => serde_json::to_writer_pretty(&mut sink, value)?,
    }
    sink.flush()?;
    Ok(())
}

/// Writes `value` as JSON to `path`; `*.gz` paths are compressed. Returns
/// only after the file is complete on disk.
pub fn save_json<T>(path: impl AsRef<Path>, value: &T, style: JsonStyle) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    debug!(path = %path.display(), ?style, "writing JSON");
    let mut sink = common_io::create_stream(path)?;
    write_json(value, &mut sink, style)?;
    sink.finish()
}
