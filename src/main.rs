//! Main entry point for the lazyfd CLI application.
//!
//! Streams a file through one of the lazy readers and reports how many
//! open/seek sessions and physical reads it took.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use lazyfd::{Cli, LazyFileError, LazyRead, new_reader, read_sum};

/// Application entry point.
fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut reader = new_reader(&cli.file, cli.reader_kind());

    if cli.sum {
        let sum = read_sum(reader.as_mut())
            .with_context(|| format!("failed to sum integers in {}", cli.file.display()))?;
        println!("{}", sum);
    } else {
        let total = stream_chunks(reader.as_mut(), cli.chunk, cli.pipe)?;
        if !cli.is_quiet() {
            println!("{} read from {}", format_size(total), cli.file.display());
        }
    }

    if !cli.is_quiet() {
        let stats = reader.stats();
        eprintln!(
            "\nSeeks: {}, physical reads: {}, resume offset: {}",
            stats.seeks,
            stats.physical_reads,
            reader.resume_offset()
        );
    }

    Ok(())
}

/// Read the whole file in `chunk`-sized requests.
///
/// Returns the number of bytes read. With `pipe` set the bytes are copied to
/// stdout as they arrive.
fn stream_chunks(reader: &mut dyn LazyRead, chunk: usize, pipe: bool) -> Result<u64> {
    let mut buf = vec![0u8; chunk];
    let mut stdout = std::io::stdout().lock();
    let mut total = 0u64;

    loop {
        let outcome = reader.read_lazy(&mut buf);
        if pipe {
            stdout.write_all(&buf[..outcome.written])?;
        }
        total += outcome.written as u64;

        match outcome.error {
            None => {}
            Some(LazyFileError::EndOfData) => break,
            Some(err) => {
                return Err(err).with_context(|| format!("stopped after {} bytes", total));
            }
        }
    }

    stdout.flush()?;
    Ok(total)
}

/// Human-readable byte total for the summary line, e.g. `1.50 KB`.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
