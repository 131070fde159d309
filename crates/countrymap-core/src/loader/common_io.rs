// crates/countrymap-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// `true` for `*.gz` paths.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`. Returns a generic Reader so the caller doesn't care about
/// the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// A file being written, plain or gzip-compressed.
///
/// Dropping the stream without [`OutputStream::finish`] can lose the gzip
/// trailer and the last buffered bytes without any error.
pub enum OutputStream {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputStream {
    /// Writes the gzip trailer, drains the buffer and syncs the file,
    /// surfacing every error on the way.
    pub fn finish(self) -> Result<()> {
        let buffered = match self {
            OutputStream::Plain(writer) => writer,
            #[cfg(feature = "compact")]
            OutputStream::Gzip(encoder) => encoder.finish()?,
        };
        let file = buffered.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutputStream::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            OutputStream::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutputStream::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            OutputStream::Gzip(w) => w.flush(),
        }
    }
}

/// Creates a file for writing, gzip-compressing it when the path ends in
/// `.gz`. Call [`OutputStream::finish`] once done.
pub fn create_stream(path: &Path) -> Result<OutputStream> {
    if is_gzip_path(path) && cfg!(not(feature = "compact")) {
        return Err(GeoError::InvalidData(
            "Gzip requested but 'compact' disabled".into(),
        ));
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    if is_gzip_path(path) {
        return Ok(OutputStream::Gzip(GzEncoder::new(
            writer,
            Compression::default(),
        )));
    }

    Ok(OutputStream::Plain(writer))
}
