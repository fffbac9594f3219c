//! Checksum over a stream of whitespace-separated integers.
//!
//! Used to compare what a reader yields with a plain sequential read of the
//! same file without holding both byte streams in memory.

use std::io::Read;

use serde_json::Deserializer;

#[derive(Debug, thiserror::Error)]
pub enum SumError {
    #[error("malformed integer stream: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("sum overflowed after {count} values")]
    Overflow { count: usize },
}

/// Decode every JSON integer in `reader` and add them up.
pub fn read_sum<R: Read>(reader: R) -> Result<i64, SumError> {
    let values = Deserializer::from_reader(reader).into_iter::<i64>();

    let mut sum: i64 = 0;
    let mut count = 0usize;
    for value in values {
        sum = sum
            .checked_add(value?)
            .ok_or(SumError::Overflow { count })?;
        count += 1;
    }

    log::debug!("summed {} values: {}", count, sum);
    Ok(sum)
}
