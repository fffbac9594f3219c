use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::{LazyRead, ReadOutcome, ReadStats, open_file, physical_read, seek_file};

/// Reader that opens, seeks, reads once and closes on every call.
#[derive(Debug)]
pub struct UnbufferedReader {
    path: PathBuf,
    offset: u64,
    stats: ReadStats,
}

impl UnbufferedReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
            stats: ReadStats::default(),
        }
    }
}

impl LazyRead for UnbufferedReader {
    fn read_lazy(&mut self, buf: &mut [u8]) -> ReadOutcome {
        let mut file = match open_file(&self.path) {
            Ok(file) => file,
            Err(err) => return ReadOutcome::failed(0, err),
        };

        self.stats.seeks += 1;
        if let Err(err) = seek_file(&mut file, &self.path, self.offset) {
            return ReadOutcome::failed(0, err);
        }

        self.stats.physical_reads += 1;
        match physical_read(&mut file, &self.path, self.offset, buf) {
            Ok(n) => {
                self.offset += n as u64;
                ReadOutcome::complete(n)
            }
            Err(err) => ReadOutcome::failed(0, err),
        }
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

impl Read for UnbufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_lazy(buf).into_io()
    }
}
