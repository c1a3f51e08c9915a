//! Content access seam for the hasher
//!
//! The hasher reads file bytes through this trait so tests can supply
//! in-memory content instead of touching disk.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Capability to open a file's content for sequential reading
pub trait ContentReader {
    /// Open the file at `path` for reading
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;
}

/// Reader backed by the host filesystem
pub struct OsReader;

impl ContentReader for OsReader {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}
