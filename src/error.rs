use std::io;
use std::path::PathBuf;

/// Errors surfaced by a single logical read call.
///
/// Nothing here is retried internally. The count of bytes already copied into
/// the caller's buffer travels next to the error in [`crate::ReadOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum LazyFileError {
    /// The file could not be opened (missing path, permissions, ...).
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Positioning at the resume offset or a physical read failed.
    #[error("failed to read {} at offset {offset}: {source}", .path.display())]
    Read {
        path: PathBuf,
        offset: u64,
        source: io::Error,
    },

    /// A physical read returned no bytes for a non-empty buffer.
    #[error("end of data")]
    EndOfData,
}

impl LazyFileError {
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Self::EndOfData)
    }

    /// End-of-data is reported as a read failure at this layer.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::EndOfData)
    }
}

impl From<LazyFileError> for io::Error {
    fn from(err: LazyFileError) -> Self {
        let kind = match &err {
            LazyFileError::Open { source, .. }
            | LazyFileError::Read { source, .. } => source.kind(),
            LazyFileError::EndOfData => io::ErrorKind::UnexpectedEof,
        };
        io::Error::new(kind, err)
    }
}
