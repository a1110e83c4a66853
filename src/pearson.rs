use std::hash::{BuildHasher, Hasher};
use std::io;

use tracing::trace;

use crate::consts::{MAX_DIGEST_LEN, PEARSON_TABLE};
use crate::helper::{DigestWidth, BLOCK_SIZE};

/// Whether the hasher has seen a byte since construction or the last reset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// The next byte seeds every lane.
    AwaitingFirstByte,
    /// Every further byte is folded into the lanes.
    Streaming,
}

/// A streaming Pearson hasher producing 1, 2 or 3 digest bytes.
///
/// Lane `i` is seeded with `T[(first + i) mod 256]`, where `first` is the first
/// byte written since the last reset, and every following byte `b` is mixed in as
/// `lane ^= T[b]`. Chunk boundaries do not affect the digest.
///
/// A hasher that has not consumed any byte yields the all-zero digest.
///
/// ```
/// let mut hasher = pearson::new24();
/// hasher.write(b"fo");
/// hasher.write(b"o");
/// assert_eq!(hasher.digest(), &[0xf8, 0xca, 0x33]);
/// assert_eq!(hasher.sum(vec![0xaa]), vec![0xaa, 0xf8, 0xca, 0x33]);
/// ```
#[derive(Clone, Debug)]
pub struct PearsonHasher {
    width: DigestWidth,
    lanes: [u8; MAX_DIGEST_LEN],
    state: State,
}

impl PearsonHasher {
    pub fn new(width: DigestWidth) -> Self {
        Self {
            width,
            lanes: [0; MAX_DIGEST_LEN],
            state: State::AwaitingFirstByte,
        }
    }

    /// Feeds `data` into the hasher and returns the number of bytes consumed.
    ///
    /// An empty slice written before the first byte leaves the hasher untouched.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let len = self.width.byte_len();

        let rest = match self.state {
            State::AwaitingFirstByte => {
                let Some((&first, rest)) = data.split_first() else {
                    return 0;
                };

                for (ii, lane) in self.lanes[..len].iter_mut().enumerate() {
                    *lane = PEARSON_TABLE[first.wrapping_add(ii as u8) as usize];
                }

                self.state = State::Streaming;
                trace!(width = len, first, "pearson hasher seeded");
                rest
            }
            State::Streaming => data,
        };

        // Every lane absorbs the same table entries.
        let mix = rest
            .iter()
            .fold(0u8, |acc, &b| acc ^ PEARSON_TABLE[b as usize]);
        for lane in self.lanes[..len].iter_mut() {
            *lane ^= mix;
        }

        data.len()
    }

    /// Appends the current digest to `prefix` and returns it.
    pub fn sum(&self, mut prefix: Vec<u8>) -> Vec<u8> {
        self.sum_into(&mut prefix);
        prefix
    }

    pub fn sum_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.digest());
    }

    /// Returns the current digest, one byte per lane in lane order.
    pub fn digest(&self) -> &[u8] {
        &self.lanes[..self.width.byte_len()]
    }

    pub fn hex_digest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Zeroes every lane and waits for a new first byte.
    pub fn reset(&mut self) {
        self.lanes = [0; MAX_DIGEST_LEN];
        self.state = State::AwaitingFirstByte;
        trace!(width = self.width.byte_len(), "pearson hasher reset");
    }

    /// Digest length in bytes.
    pub fn size(&self) -> usize {
        self.width.byte_len()
    }

    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    pub fn width(&self) -> DigestWidth {
        self.width
    }

    /// Returns `true` if no byte was consumed since construction or the last reset.
    pub fn is_empty(&self) -> bool {
        self.state == State::AwaitingFirstByte
    }
}

impl Default for PearsonHasher {
    fn default() -> Self {
        Self::new(DigestWidth::Bits8)
    }
}

impl io::Write for PearsonHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(PearsonHasher::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads the digest as a big-endian integer, so an 8-bit hasher finishes in `0..=0xff`.
impl Hasher for PearsonHasher {
    fn finish(&self) -> u64 {
        self.digest()
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
    }

    fn write(&mut self, bytes: &[u8]) {
        PearsonHasher::write(self, bytes);
    }
}

/// Builds [`PearsonHasher`]s of a fixed width, e.g. for `HashMap` bucketing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BuildPearsonHasher {
    width: DigestWidth,
}

impl BuildPearsonHasher {
    pub fn new(width: DigestWidth) -> Self {
        Self { width }
    }
}

impl BuildHasher for BuildPearsonHasher {
    type Hasher = PearsonHasher;

    fn build_hasher(&self) -> PearsonHasher {
        PearsonHasher::new(self.width)
    }
}
