use crate::models::Algorithm;
use sha2::{Digest, Sha256, Sha512};
use std::io::{self, Read};

const CHUNK_SIZE: usize = 64 * 1024;

/// Running hash state, one variant per supported algorithm.
pub enum RunningDigest {
    Md5(md5::Context),
    Sha256(Sha256),
    Sha512(Sha512),
}

impl RunningDigest {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => RunningDigest::Md5(md5::Context::new()),
            Algorithm::Sha256 => RunningDigest::Sha256(Sha256::new()),
            Algorithm::Sha512 => RunningDigest::Sha512(Sha512::new()),
        }
    }

    pub fn update(&mut self, chunk: &[u8]) {
        match self {
            RunningDigest::Md5(ctx) => ctx.consume(chunk),
            RunningDigest::Sha256(h) => h.update(chunk),
            RunningDigest::Sha512(h) => h.update(chunk),
        }
    }

    /// Lowercase hex of the final digest.
    pub fn finalize_hex(self) -> String {
        match self {
            RunningDigest::Md5(ctx) => format!("{:x}", ctx.finalize()),
            RunningDigest::Sha256(h) => hex::encode(h.finalize()),
            RunningDigest::Sha512(h) => hex::encode(h.finalize()),
        }
    }
}

pub fn compute_hash_for_reader<R: Read>(mut reader: R, algorithm: Algorithm) -> io::Result<String> {
    let mut state = algorithm.start();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        state.update(&buf[..n]);
    }
    Ok(state.finalize_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn hash(data: &[u8], algorithm: Algorithm) -> String {
        compute_hash_for_reader(Cursor::new(data), algorithm).unwrap()
    }

    #[test]
    fn known_vectors() {
        assert_eq!(hash(b"", Algorithm::Md5), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hash(b"abc", Algorithm::Md5), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            hash(b"abc", Algorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            hash(b"abc", Algorithm::Sha512),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn digest_is_lowercase_with_expected_length() {
        for algorithm in Algorithm::ALL {
            let hex = hash(b"Hello, World!", algorithm);
            assert_eq!(hex.len(), algorithm.hex_len());
            assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn input_spanning_several_chunks_matches_one_shot() {
        let data: Vec<u8> = (0..(CHUNK_SIZE * 3 + 17)).map(|i| (i % 251) as u8).collect();
        assert_eq!(
            hash(&data, Algorithm::Sha256),
            hex::encode(Sha256::digest(&data))
        );
        assert_eq!(hash(&data, Algorithm::Md5), format!("{:x}", md5::compute(&data)));
    }

    /// Hands out `data` in small pieces, with one scripted error along the way.
    struct FlakyReader {
        data: Vec<u8>,
        pos: usize,
        fail_at: usize,
        kind: io::ErrorKind,
        failed: bool,
    }

    impl FlakyReader {
        fn new(data: &[u8], fail_at: usize, kind: io::ErrorKind) -> Self {
            FlakyReader {
                data: data.to_vec(),
                pos: 0,
                fail_at,
                kind,
                failed: false,
            }
        }
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.fail_at && !self.failed {
                self.failed = true;
                return Err(io::Error::new(self.kind, "scripted failure"));
            }
            let end = (self.pos + 4).min(self.data.len()).min(self.pos + buf.len());
            let n = end - self.pos;
            buf[..n].copy_from_slice(&self.data[self.pos..end]);
            self.pos = end;
            Ok(n)
        }
    }

    #[test]
    fn error_partway_through_is_returned() {
        let reader = FlakyReader::new(b"0123456789abcdef", 8, io::ErrorKind::Other);
        let err = compute_hash_for_reader(reader, Algorithm::Sha256).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn interrupted_read_is_retried() {
        let data = b"0123456789abcdef";
        for algorithm in Algorithm::ALL {
            let reader = FlakyReader::new(data, 8, io::ErrorKind::Interrupted);
            assert_eq!(
                compute_hash_for_reader(reader, algorithm).unwrap(),
                hash(data, algorithm)
            );
        }
    }

    #[test]
    fn single_byte_change_alters_every_digest() {
        let original = vec![7u8; 4096];
        let mut changed = original.clone();
        changed[2048] ^= 0x01;
        for algorithm in Algorithm::ALL {
            assert_ne!(hash(&original, algorithm), hash(&changed, algorithm));
        }
    }
}
