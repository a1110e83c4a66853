use thiserror::Error;

/// An enum for errors that might occur while configuring a Pearson hasher.
///
/// Hashing itself never fails; only selecting a digest width from an
/// untyped value can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PearsonError {
    /// The digest width in bytes is not one of 1, 2 or 3.
    #[error("Invalid digest width of {0} bytes. Pearson digests are 1, 2 or 3 bytes long.")]
    InvalidDigestWidth(usize),
    /// The digest width in bits is not one of 8, 16 or 24.
    #[error("Invalid digest size of {0} bits. Pearson digests are 8, 16 or 24 bits long.")]
    InvalidDigestBits(u32),
}
