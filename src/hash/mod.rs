//! The sponge and the primitive it is built on.
//!
//! Kerl does not implement a permutation of its own: it drives an incremental
//! 384-bit hash context, by default [`sha3::Keccak384`] (original Keccak padding, *not* SHA3-384).
//! Any [`digest::Digest`] implementation with a 48-byte output that can be cloned and reset can be plugged in
//! through the [`HashContext`] trait.

/// The Kerl sponge.
pub mod kerl;

use digest::{typenum::U48, Digest, OutputSizeUser, Reset};

pub use kerl::Kerl;
pub use sha3::Keccak384;

/// An incremental hash context with a 48-byte digest.
///
/// **HAZARD**: Kerl is only defined over [`Keccak384`].
/// Other contexts produce a different, incompatible hash function.
pub trait HashContext: Digest + OutputSizeUser<OutputSize = U48> + Reset + Clone {}

impl<D> HashContext for D where D: Digest + OutputSizeUser<OutputSize = U48> + Reset + Clone {}
