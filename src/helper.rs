use crate::error::PearsonError;

/// Number of input bytes consumed per step. Pearson hashing has no alignment requirement.
pub const BLOCK_SIZE: usize = 1;

/// An enum determining the length of a Pearson digest.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum DigestWidth {
    /// One output byte. The classic Pearson hash.
    #[default]
    Bits8,
    /// Two output bytes.
    Bits16,
    /// Three output bytes.
    Bits24,
}

impl DigestWidth {
    /// Returns the number of digest bytes, i.e. the number of lanes.
    pub fn byte_len(&self) -> usize {
        match self {
            DigestWidth::Bits8 => 1,
            DigestWidth::Bits16 => 2,
            DigestWidth::Bits24 => 3,
        }
    }

    pub fn bit_len(&self) -> u32 {
        match self {
            DigestWidth::Bits8 => 8,
            DigestWidth::Bits16 => 16,
            DigestWidth::Bits24 => 24,
        }
    }

    /// Picks a width from its size in bits (8, 16 or 24).
    pub fn from_bits(bits: u32) -> Result<Self, PearsonError> {
        match bits {
            8 => Ok(DigestWidth::Bits8),
            16 => Ok(DigestWidth::Bits16),
            24 => Ok(DigestWidth::Bits24),
            _ => Err(PearsonError::InvalidDigestBits(bits)),
        }
    }
}

impl TryFrom<usize> for DigestWidth {
    type Error = PearsonError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        match len {
            1 => Ok(DigestWidth::Bits8),
            2 => Ok(DigestWidth::Bits16),
            3 => Ok(DigestWidth::Bits24),
            _ => Err(PearsonError::InvalidDigestWidth(len)),
        }
    }
}
