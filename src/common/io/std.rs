//! Common I/O code using sync I/O.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use flate2::{bufread::MultiGzDecoder, write::GzEncoder, Compression};

/// Returns whether the path looks like a gzip or bgzip file.
pub fn is_gz<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    [Some(Some("gz")), Some(Some("bgz"))].contains(&path.as_ref().extension().map(|s| s.to_str()))
}

/// Transparently open a possibly gzip-compressed file for reading.
///
/// Multi-member gzip files are supported, as is needed for `bgzip` files.
///
/// # Arguments
///
/// * `path` - A path to the file to open.
pub fn open_read_maybe_gz<P>(path: P) -> Result<Box<dyn BufRead>, anyhow::Error>
where
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())
        .with_context(|| format!("could not open {:?} for reading", path.as_ref()))?;
    if is_gz(path.as_ref()) {
        tracing::trace!("Opening {:?} as gzip for reading", path.as_ref());
        let decoder = MultiGzDecoder::new(BufReader::new(file));
        Ok(Box::new(BufReader::new(decoder)))
    } else {
        tracing::trace!("Opening {:?} as plain text for reading", path.as_ref());
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Transparently open a file for writing, gzip-compressed if it ends in `.gz`.
///
/// # Arguments
///
/// * `path` - A path to the file to open.
pub fn open_write_maybe_gz<P>(path: P) -> Result<Box<dyn Write>, anyhow::Error>
where
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())
        .with_context(|| format!("could not open {:?} for writing", path.as_ref()))?;
    let bufwriter = BufWriter::new(file);
    if path.as_ref().extension().map(|s| s.to_str()) == Some(Some("gz")) {
        tracing::trace!("Opening {:?} as gzip for writing", path.as_ref());
        Ok(Box::new(GzEncoder::new(bufwriter, Compression::default())))
    } else {
        tracing::trace!("Opening {:?} as plain text for writing", path.as_ref());
        Ok(Box::new(bufwriter))
    }
}

/// Open the given path for writing, or stdout if there is none.
pub fn open_write_or_stdout<P>(path: Option<P>) -> Result<Box<dyn Write>, anyhow::Error>
where
    P: AsRef<Path>,
{
    match path {
        Some(path) => open_write_maybe_gz(path),
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}
