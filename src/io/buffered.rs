use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::{LazyRead, ReadOutcome, ReadStats, open_file, physical_read, seek_file};

/// Reader that serves requests from an owned buffer and only reopens the file
/// when the buffered bytes run out.
///
/// Bytes fetched by a physical read but not yet handed out are kept in
/// `buffer[start..end]` for the next call. `0 <= start <= end <= capacity`
/// always holds, and nothing outside `start..end` is ever copied out.
pub struct BufferedReader {
    path: PathBuf,
    offset: u64,
    stats: ReadStats,
    buffer: Vec<u8>,
    start: usize,
    end: usize,
}

impl BufferedReader {
    /// Create a reader with a buffer of `capacity` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be non-zero");
        Self {
            path: path.into(),
            offset: 0,
            stats: ReadStats::default(),
            buffer: vec![0u8; capacity],
            start: 0,
            end: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of leftover bytes that the next call can use without I/O.
    pub fn buffered_len(&self) -> usize {
        self.end - self.start
    }

    // Contents stay in place; only the window is dropped.
    fn reset_buffer(&mut self) {
        self.start = 0;
        self.end = 0;
    }
}

impl LazyRead for BufferedReader {
    fn read_lazy(&mut self, buf: &mut [u8]) -> ReadOutcome {
        let available = self.end - self.start;

        if buf.len() <= available {
            let end = self.start + buf.len();
            buf.copy_from_slice(&self.buffer[self.start..end]);
            self.start = end;
            return ReadOutcome::complete(buf.len());
        }

        buf[..available].copy_from_slice(&self.buffer[self.start..self.end]);
        let mut filled = available;
        self.reset_buffer();

        // One open/seek session per call, however many refills it takes.
        let mut file = match open_file(&self.path) {
            Ok(file) => file,
            Err(err) => return ReadOutcome::failed(filled, err),
        };
        self.stats.seeks += 1;
        if let Err(err) = seek_file(&mut file, &self.path, self.offset) {
            return ReadOutcome::failed(filled, err);
        }

        log::debug!(
            "refilling {} from offset {} ({} of {} bytes served from buffer)",
            self.path.display(),
            self.offset,
            filled,
            buf.len()
        );

        while filled < buf.len() {
            let remaining = buf.len() - filled;
            self.reset_buffer();

            self.stats.physical_reads += 1;
            let n = match physical_read(&mut file, &self.path, self.offset, &mut self.buffer) {
                Ok(n) => n,
                Err(err) => return ReadOutcome::failed(filled, err),
            };
            self.offset += n as u64;

            if n > remaining {
                buf[filled..].copy_from_slice(&self.buffer[..remaining]);
                self.start = remaining;
                self.end = n;
                return ReadOutcome::complete(filled + remaining);
            }

            buf[filled..filled + n].copy_from_slice(&self.buffer[..n]);
            filled += n;
        }

        ReadOutcome::complete(filled)
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn resume_offset(&self) -> u64 {
        self.offset
    }

    fn stats(&self) -> ReadStats {
        self.stats
    }
}

impl Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_lazy(buf).into_io()
    }
}

impl fmt::Debug for BufferedReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedReader")
            .field("path", &self.path)
            .field("offset", &self.offset)
            .field("stats", &self.stats)
            .field("capacity", &self.buffer.len())
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}
