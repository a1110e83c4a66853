use crate::helper::DigestWidth;
use crate::pearson::PearsonHasher;
use crate::pearson_builders::{new16, new24, new8};

/// One-shot 8-bit Pearson hash of `data`.
pub fn pearson8(data: &[u8]) -> u8 {
    let mut h = new8();
    h.write(data);
    h.digest()[0]
}

pub fn pearson16(data: &[u8]) -> [u8; 2] {
    let mut h = new16();
    h.write(data);
    let d = h.digest();
    [d[0], d[1]]
}

pub fn pearson24(data: &[u8]) -> [u8; 3] {
    let mut h = new24();
    h.write(data);
    let d = h.digest();
    [d[0], d[1], d[2]]
}

/// same interface as the fixed-width helpers, width picked at runtime
pub fn pearson_hash(width: DigestWidth, data: &[u8]) -> Vec<u8> {
    let mut h = PearsonHasher::new(width);
    h.write(data);
    h.sum(Vec::with_capacity(width.byte_len()))
}
