//! Reading through a lazy reader with arbitrary request sizes must produce
//! exactly the bytes of a sequential read.

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use lazyfd::{BufferedReader, LazyRead, ReaderKind, UnbufferedReader, new_reader};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use tempfile::NamedTempFile;

    fn random_file(rng: &mut StdRng, len: usize) -> (NamedTempFile, Vec<u8>) {
        let contents: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=u8::MAX)).collect();
        let mut file = NamedTempFile::new().expect("Failed to create temporary file");
        file.write_all(&contents).expect("Failed to write temporary file");
        (file, contents)
    }

    /// Drain `reader` with random request lengths, checking the offset and
    /// the end-of-data contract along the way.
    fn drain(reader: &mut dyn LazyRead, rng: &mut StdRng, max_request: usize) -> Vec<u8> {
        let mut out = Vec::new();
        let mut last_offset = 0;
        loop {
            let mut buf = vec![0u8; rng.gen_range(1..=max_request)];
            let outcome = reader.read_lazy(&mut buf);
            out.extend_from_slice(&buf[..outcome.written]);

            assert!(reader.resume_offset() >= last_offset);
            last_offset = reader.resume_offset();

            if let Some(err) = outcome.error {
                assert!(err.is_end_of_data(), "unexpected error: {err}");
                break;
            }
        }

        let mut buf = [0u8; 8];
        let outcome = reader.read_lazy(&mut buf);
        assert_eq!(outcome.written, 0);
        assert!(outcome.is_end_of_data());
        out
    }

    #[test]
    fn buffered_matches_sequential_read() {
        let mut rng = StdRng::seed_from_u64(0x1a2f);
        for len in [0, 1, 23, 511, 4096, 10_007] {
            let (file, contents) = random_file(&mut rng, len);
            for capacity in [1, 2, 5, 64, 4096, 65_536] {
                for max_request in [1, 7, 100, 9_000] {
                    let mut reader = BufferedReader::new(file.path(), capacity);
                    let out = drain(&mut reader, &mut rng, max_request);
                    assert_eq!(
                        out, contents,
                        "len {len}, capacity {capacity}, max request {max_request}"
                    );
                    assert_eq!(reader.resume_offset(), len as u64);
                }
            }
        }
    }

    #[test]
    fn unbuffered_matches_sequential_read() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [0, 1, 23, 3_001] {
            let (file, contents) = random_file(&mut rng, len);
            let mut reader = UnbufferedReader::new(file.path());
            let out = drain(&mut reader, &mut rng, 50);
            assert_eq!(out, contents, "len {len}");
            assert_eq!(reader.resume_offset(), len as u64);
        }
    }

    #[test]
    fn io_read_adapters_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let (file, contents) = random_file(&mut rng, 20_000);

        for kind in [
            ReaderKind::Unbuffered,
            ReaderKind::Buffered { capacity: 5 },
            ReaderKind::Buffered { capacity: 3_000 },
        ] {
            let mut reader = new_reader(file.path(), kind);
            let mut out = Vec::new();
            reader
                .read_to_end(&mut out)
                .expect("Failed to read to end");
            assert_eq!(out, contents, "{kind:?}");
        }
    }

    #[test]
    fn seeks_count_logical_calls_not_physical_reads() {
        let mut rng = StdRng::seed_from_u64(99);
        let (file, _) = random_file(&mut rng, 1_000);
        let mut reader = BufferedReader::new(file.path(), 10);

        let mut buf = [0u8; 95];
        let _ = reader.read_lazy(&mut buf);
        // 9 full refills plus one read whose surplus stays buffered.
        assert_eq!(reader.stats().seeks, 1);
        assert_eq!(reader.stats().physical_reads, 10);
        assert_eq!(reader.buffered_len(), 5);
        assert_eq!(reader.resume_offset(), 100);
    }
}
