use crate::{DigestWidth, PearsonHasher};

/// Returns a new 8-bit Pearson hasher.
pub fn new8() -> PearsonHasher {
    PearsonHasher::new(DigestWidth::Bits8)
}

/// Returns a new 16-bit Pearson hasher.
pub fn new16() -> PearsonHasher {
    PearsonHasher::new(DigestWidth::Bits16)
}

/// Returns a new 24-bit Pearson hasher.
pub fn new24() -> PearsonHasher {
    PearsonHasher::new(DigestWidth::Bits24)
}
