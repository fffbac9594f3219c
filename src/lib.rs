//! # lazyfd
//!
//! File readers that do not keep a descriptor open between calls.
//!
//! Every read reopens the file by path and seeks to where the previous read
//! stopped. Two readers share the same contract:
//!
//! - [`UnbufferedReader`] does one open/seek/read/close cycle per call.
//! - [`BufferedReader`] keeps an owned buffer and only reopens the file when the
//!   bytes left over from earlier reads cannot satisfy a request. A single call
//!   opens and seeks once, then issues as many physical reads as it needs.
//!
//! Both implement [`std::io::Read`], so they plug into any consumer of that
//! trait. [`LazyRead::read_lazy`] gives the richer result: the number of bytes
//! written together with the error that ended the call, if any.
//!
//! ## Example
//!
//! ```no_run
//! use lazyfd::{BufferedReader, LazyRead};
//!
//! let mut reader = BufferedReader::new("numbers.txt", 64);
//! let mut buf = [0u8; 16];
//! loop {
//!     let outcome = reader.read_lazy(&mut buf);
//!     print!("{}", String::from_utf8_lossy(&buf[..outcome.written]));
//!     if outcome.error.is_some() {
//!         break;
//!     }
//! }
//! println!("\n{:?}", reader.stats());
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod sum;

pub use cli::Cli;
pub use error::LazyFileError;
pub use io::{
    BufferedReader, LARGE_BUFFER_SIZE, LazyRead, ReadOutcome, ReadStats, ReaderKind,
    SMALL_BUFFER_SIZE, UnbufferedReader, new_reader,
};
pub use sum::{SumError, read_sum};
