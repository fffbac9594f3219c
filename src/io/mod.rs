mod buffered;
mod unbuffered;

pub use buffered::BufferedReader;
pub use unbuffered::UnbufferedReader;

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::LazyFileError;

/// Buffer size for callers that want many physical reads per request.
pub const SMALL_BUFFER_SIZE: usize = 5;
/// Buffer size for callers that want few physical reads.
pub const LARGE_BUFFER_SIZE: usize = 50 * 1024;

/// Diagnostic counters kept by every reader.
///
/// They count attempts, not successes, and have no effect on behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Number of open/seek sessions started.
    pub seeks: u64,
    /// Number of reads issued against an open file.
    pub physical_reads: u64,
}

/// Result of one logical read call.
///
/// Unlike `io::Result`, partial progress is kept next to the error: `written`
/// bytes at the front of the caller's buffer are valid even when `error` is set.
#[derive(Debug)]
#[must_use]
pub struct ReadOutcome {
    pub written: usize,
    pub error: Option<LazyFileError>,
}

impl ReadOutcome {
    pub(crate) fn complete(written: usize) -> Self {
        Self {
            written,
            error: None,
        }
    }

    pub(crate) fn failed(written: usize, error: LazyFileError) -> Self {
        Self {
            written,
            error: Some(error),
        }
    }

    pub fn is_end_of_data(&self) -> bool {
        self.error.as_ref().is_some_and(LazyFileError::is_end_of_data)
    }

    /// Collapse into the `std::io::Read` convention.
    ///
    /// A non-zero count wins over the error: the failed physical read did not
    /// advance the resume offset, so the next call meets the same condition.
    pub fn into_io(self) -> io::Result<usize> {
        match self.error {
            None => Ok(self.written),
            Some(_) if self.written > 0 => Ok(self.written),
            Some(LazyFileError::EndOfData) => Ok(0),
            Some(err) => Err(err.into()),
        }
    }
}

/// A byte stream over a file that is only open for the duration of a call.
///
/// Readers are plain owned state mutated through `&mut self`; sharing one
/// instance between threads requires external locking.
pub trait LazyRead: Read + Send {
    /// Fill `buf` from the resume offset, reporting partial progress on error.
    fn read_lazy(&mut self, buf: &mut [u8]) -> ReadOutcome;

    fn path(&self) -> &Path;

    /// Absolute file position right after the last physical read.
    fn resume_offset(&self) -> u64;

    fn stats(&self) -> ReadStats;
}

/// Which reader [`new_reader`] should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderKind {
    Unbuffered,
    Buffered { capacity: usize },
}

/// Build a reader for `path`. The file is not touched until the first read.
///
/// # Panics
///
/// Panics if `kind` is `Buffered` with a zero capacity.
pub fn new_reader(path: impl Into<PathBuf>, kind: ReaderKind) -> Box<dyn LazyRead> {
    match kind {
        ReaderKind::Unbuffered => Box::new(UnbufferedReader::new(path)),
        ReaderKind::Buffered { capacity } => Box::new(BufferedReader::new(path, capacity)),
    }
}

fn open_file(path: &Path) -> Result<File, LazyFileError> {
    log::trace!("open {}", path.display());
    File::open(path).map_err(|source| LazyFileError::Open {
        path: path.to_path_buf(),
        source,
    })
}

fn seek_file(file: &mut File, path: &Path, offset: u64) -> Result<(), LazyFileError> {
    log::trace!("seek {} to {}", path.display(), offset);
    file.seek(SeekFrom::Start(offset))
        .map(|_| ())
        .map_err(|source| LazyFileError::Read {
            path: path.to_path_buf(),
            offset,
            source,
        })
}

/// One read against an open file. Zero bytes into a non-empty buffer is end-of-data.
fn physical_read(
    file: &mut File,
    path: &Path,
    offset: u64,
    buf: &mut [u8],
) -> Result<usize, LazyFileError> {
    match file.read(buf) {
        Ok(0) if !buf.is_empty() => {
            log::debug!("end of data in {} at offset {}", path.display(), offset);
            Err(LazyFileError::EndOfData)
        }
        Ok(n) => {
            log::trace!("read {} bytes from {} at offset {}", n, path.display(), offset);
            Ok(n)
        }
        Err(source) => Err(LazyFileError::Read {
            path: path.to_path_buf(),
            offset,
            source,
        }),
    }
}
