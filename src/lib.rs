//! Pearson hashing with 8, 16 and 24-bit digests.
//!
//! A single 256-entry permutation table drives every lane. Wider digests run one
//! lane per output byte, each seeded at a different offset into the table.
//!
//! Not a cryptographic hash.

mod consts;
mod helper;
pub use crate::helper::{DigestWidth, BLOCK_SIZE};

mod error;
pub use error::PearsonError;

mod pearson;
pub use crate::pearson::{BuildPearsonHasher, PearsonHasher};

mod pearson_builders;
pub use crate::pearson_builders::{new16, new24, new8};

mod hash_funcs;
pub use crate::hash_funcs::{pearson16, pearson24, pearson8, pearson_hash};

#[cfg(feature = "python")]
mod python;
