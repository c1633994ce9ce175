//!
//! Kerl is a hash function over balanced-ternary data.
//! It adapts the Keccak-384 hash, working on bytes, into a sponge that absorbs and squeezes
//! trits in chunks of 243, with arbitrary input and output length.
//!
//! # Overview
//!
//! The library does two things:
//!
//! - Convert ternary data between its representations ([`codec`]): tryte strings, trit sequences,
//!   and 48-byte buffers holding a signed 384-bit integer;
//! - Hash trit sequences with the [`Kerl`] sponge.
//!
//! Trytes are written with the 27 symbols `9ABCDEFGHIJKLMNOPQRSTUVWXYZ`, each standing for three trits.
//! A hash is 243 trits, or 81 trytes:
//!
//! ```
//! let hash = kerl::digest_trytes(
//!     "EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH"
//! ).unwrap();
//! assert_eq!(hash, "EJEAOOZYSAWFPZQESYDHZCGYNSTWXUMVJOVDWUNZJXDGWCLUFGIMZRMGCAZGKNPLBRLGUNYWKLJTYEAQX");
//! ```
//!
//! # Sponge
//!
//! A [`Kerl`] instance absorbs one or more times and is then squeezed one or more times.
//! Each squeezed chunk reseeds the sponge, so that successive chunks are unrelated:
//!
//! ```
//! use kerl::{Kerl, HASH_LENGTH};
//!
//! let input = kerl::trytes_to_trits(&"A".repeat(162)).unwrap();
//! let mut kerl = Kerl::new();
//! kerl.absorb(&input[..HASH_LENGTH]).unwrap();
//! kerl.absorb(&input[HASH_LENGTH..]).unwrap();
//!
//! let first = kerl.squeeze_trits(HASH_LENGTH).unwrap();
//! let second = kerl.squeeze_trits(HASH_LENGTH).unwrap();
//! assert_ne!(first, second);
//! ```
//!
//! Lengths passed to absorb and squeeze must be positive multiples of [`HASH_LENGTH`],
//! otherwise [`KerlError::InvalidInput`] is returned and the sponge is left untouched.
//!
//! # Features
//!
//! - `parallel` (default): [`par_digest_trytes`], hashing independent inputs in parallel with [`rayon`].
//! - `asm`: use the assembly implementation of Keccak.

/// Tryte, trit and byte conversions.
pub mod codec;
/// Error type.
mod errors;
/// The sponge and its hash context.
pub mod hash;

pub use codec::{
    bytes_to_trits, trits_to_bytes, trits_to_trytes, trytes_to_trits, Trit, BYTE_HASH_LENGTH,
    HASH_LENGTH, TRYTE_HASH_LENGTH,
};
pub use errors::{KerlError, KerlResult};
pub use hash::{HashContext, Keccak384, Kerl};

/// Hashes a tryte string whose length is a multiple of [`TRYTE_HASH_LENGTH`]
/// into a single 81-tryte hash.
pub fn digest_trytes(trytes: &str) -> KerlResult<String> {
    let trits = trytes_to_trits(trytes)?;
    let mut kerl = Kerl::new();
    kerl.absorb(&trits)?;
    let mut output = Vec::with_capacity(HASH_LENGTH);
    kerl.squeeze(&mut output)?;
    trits_to_trytes(&output)
}

/// Hashes every input with [`digest_trytes`], each on its own sponge, in parallel.
///
/// Results are in the same order as `inputs`.
#[cfg(feature = "parallel")]
pub fn par_digest_trytes<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<KerlResult<String>> {
    use rayon::prelude::*;

    log::debug!("Hashing {} inputs in parallel", inputs.len());
    inputs
        .par_iter()
        .map(|trytes| digest_trytes(trytes.as_ref()))
        .collect()
}
