use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::io::{LARGE_BUFFER_SIZE, ReaderKind};

#[derive(Parser, Debug)]
#[command(name = "lazyfd")]
#[command(version)]
#[command(about = "Read a file without holding it open between reads", long_about = None)]
#[command(after_help = "Examples:\n  \
  lazyfd numbers.txt -s            sum the integers in numbers.txt\n  \
  lazyfd -b 5 -c 4096 big.log      read in 4 KiB requests through a 5 byte buffer\n  \
  lazyfd -u -p notes.txt | more    reopen the file for every request, send bytes to more")]
pub struct Cli {
    /// File to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Internal buffer capacity in bytes
    #[arg(
        short = 'b',
        long = "buffer-size",
        value_name = "BYTES",
        default_value_t = LARGE_BUFFER_SIZE,
        value_parser = parse_non_zero
    )]
    pub buffer_size: usize,

    /// Reopen and seek on every request, without an internal buffer
    #[arg(short = 'u', long, conflicts_with = "buffer_size")]
    pub unbuffered: bool,

    /// Size of each read request in bytes
    #[arg(
        short = 'c',
        long = "chunk",
        value_name = "BYTES",
        default_value_t = 4096,
        value_parser = parse_non_zero
    )]
    pub chunk: usize,

    /// Print the sum of the integers in the file
    #[arg(short = 's', long, conflicts_with = "pipe")]
    pub sum: bool,

    /// Copy file contents to stdout, no messages
    #[arg(short = 'p')]
    pub pipe: bool,

    /// Quiet mode
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Verbose logging (-vv => trace every physical read)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn reader_kind(&self) -> ReaderKind {
        if self.unbuffered {
            ReaderKind::Unbuffered
        } else {
            ReaderKind::Buffered {
                capacity: self.buffer_size,
            }
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.pipe
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn parse_non_zero(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}
