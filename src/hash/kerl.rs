//! Kerl: a sponge over balanced-ternary data built on [`Keccak384`].
//!
//! Input trits are absorbed in chunks of [`HASH_LENGTH`], each converted to a 48-byte
//! two's-complement buffer and fed to the hash context.
//! Output is squeezed in chunks of [`HASH_LENGTH`] trits, each one the ternary expansion of the current digest.
//! Between two chunks the sponge reseeds itself: the digest is inverted bit by bit
//! and absorbed into a fresh context.
//!
//! ```text
//! absorb(a); absorb(b) = absorb(a || b)
//! squeeze(243); squeeze(243) = squeeze(486)
//! ```
//!
//! The most significant trit of every chunk is ignored on absorption and zero on output,
//! so that chunks always fit a signed 384-bit integer.
//!
//! ```
//! use kerl::{Kerl, trytes_to_trits, trits_to_trytes};
//!
//! let input = trytes_to_trits("EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH").unwrap();
//! let mut kerl = Kerl::new();
//! kerl.absorb(&input).unwrap();
//! let mut output = Vec::new();
//! kerl.squeeze(&mut output).unwrap();
//! assert_eq!(
//!     trits_to_trytes(&output).unwrap(),
//!     "EJEAOOZYSAWFPZQESYDHZCGYNSTWXUMVJOVDWUNZJXDGWCLUFGIMZRMGCAZGKNPLBRLGUNYWKLJTYEAQX"
//! );
//! ```
use digest::Digest;
use zeroize::Zeroize;

use super::{HashContext, Keccak384};
use crate::codec::{bytes_to_trits, trits_to_bytes, Trit, BYTE_HASH_LENGTH, HASH_LENGTH};
use crate::{KerlError, KerlResult};

/// The Kerl sponge, owning one hash context.
///
/// Absorb and squeeze both mutate the context in place:
/// share an instance across threads only behind a lock.
/// Distinct instances are independent.
#[derive(Clone)]
pub struct Kerl<D: HashContext = Keccak384> {
    /// The underlying hash context.
    hasher: D,
    /// Chunks absorbed so far.
    absorbed: usize,
    /// Chunks squeezed so far.
    squeezed: usize,
}

/// Checks that `length` trits starting at `offset` are a non-empty, whole number of chunks
/// inside a buffer of `len` trits. Returns the end of the range.
fn check_range(len: usize, offset: usize, length: usize) -> KerlResult<usize> {
    if length == 0 || length % HASH_LENGTH != 0 {
        return Err(KerlError::InvalidInput(format!(
            "trits length of {} must be a positive multiple of {}",
            length, HASH_LENGTH
        )));
    }
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(end),
        _ => Err(KerlError::InvalidInput(format!(
            "range {}..{}+{} out of bounds for {} trits",
            offset, offset, length, len
        ))),
    }
}

impl Kerl<Keccak384> {
    /// Creates a new sponge over [`Keccak384`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: HashContext> Default for Kerl<D> {
    fn default() -> Self {
        Self::with_context(<D as Digest>::new())
    }
}

impl<D: HashContext> Kerl<D> {
    /// Creates a new sponge from an existing hash context.
    pub fn with_context(hasher: D) -> Self {
        Self {
            hasher,
            absorbed: 0,
            squeezed: 0,
        }
    }

    /// Absorbs all of `trits`.
    ///
    /// The length must be a positive multiple of [`HASH_LENGTH`].
    pub fn absorb(&mut self, trits: &[Trit]) -> KerlResult<()> {
        self.absorb_range(trits, 0, trits.len())
    }

    /// Absorbs `trits[offset..offset + length]`.
    ///
    /// `length` must be a positive multiple of [`HASH_LENGTH`].
    /// On error nothing is absorbed.
    pub fn absorb_range(&mut self, trits: &[Trit], offset: usize, length: usize) -> KerlResult<()> {
        let end = check_range(trits.len(), offset, length)?;

        // convert everything first, so that a bad trit leaves the context untouched
        let blocks = trits[offset..end]
            .chunks_exact(HASH_LENGTH)
            .map(|chunk| {
                let mut block = [0 as Trit; HASH_LENGTH];
                block[..HASH_LENGTH - 1].copy_from_slice(&chunk[..HASH_LENGTH - 1]);
                trits_to_bytes(&block)
            })
            .collect::<KerlResult<Vec<_>>>()?;

        if self.squeezed > 0 {
            log::debug!("Absorbing {} trits after {} squeezed chunks", length, self.squeezed);
        }
        for block in &blocks {
            Digest::update(&mut self.hasher, block);
            self.absorbed += 1;
            log::trace!("Absorbed chunk {}", self.absorbed);
        }
        Ok(())
    }

    /// Squeezes one chunk of [`HASH_LENGTH`] trits into the beginning of `output`,
    /// growing it if needed.
    pub fn squeeze(&mut self, output: &mut Vec<Trit>) -> KerlResult<()> {
        self.squeeze_into(output, 0, HASH_LENGTH)
    }

    /// Squeezes `length` trits and returns them.
    pub fn squeeze_trits(&mut self, length: usize) -> KerlResult<Vec<Trit>> {
        let mut output = Vec::with_capacity(length);
        self.squeeze_into(&mut output, 0, length)?;
        Ok(output)
    }

    /// Squeezes `length` trits into `output[offset..offset + length]`.
    ///
    /// `output` is padded with zero trits up to `offset + length` if shorter.
    /// `length` must be a positive multiple of [`HASH_LENGTH`].
    pub fn squeeze_into(&mut self, output: &mut Vec<Trit>, offset: usize, length: usize) -> KerlResult<()> {
        // a Vec never holds more than isize::MAX bytes
        let end = check_range(isize::MAX as usize, offset, length)?;
        if output.len() < end {
            output.try_reserve(end - output.len()).map_err(|e| {
                KerlError::InvalidInput(format!("cannot grow output to {} trits: {}", end, e))
            })?;
        }

        if self.absorbed == 0 && self.squeezed == 0 {
            log::debug!("Squeezing from a sponge that absorbed nothing");
        }
        if output.len() < end {
            output.resize(end, 0);
        }
        output[offset..end]
            .chunks_exact_mut(HASH_LENGTH)
            .try_for_each(|chunk| self.squeeze_chunk(chunk))
    }

    fn squeeze_chunk(&mut self, output: &mut [Trit]) -> KerlResult<()> {
        debug_assert_eq!(output.len(), HASH_LENGTH);

        // keep the context intact until the digest has been converted
        let mut digest = [0u8; BYTE_HASH_LENGTH];
        digest.copy_from_slice(&self.hasher.clone().finalize());
        let mut trits = bytes_to_trits(&digest)?;
        trits[HASH_LENGTH - 1] = 0;
        output.copy_from_slice(&trits);

        // reseed with the inverted digest
        digest.iter_mut().for_each(|byte| *byte = !*byte);
        Digest::reset(&mut self.hasher);
        Digest::update(&mut self.hasher, &digest);

        digest.zeroize();
        trits.zeroize();
        self.squeezed += 1;
        log::trace!("Squeezed chunk {}", self.squeezed);
        Ok(())
    }
}

impl<D: HashContext> Zeroize for Kerl<D> {
    fn zeroize(&mut self) {
        Digest::reset(&mut self.hasher);
    }
}

impl<D: HashContext> Drop for Kerl<D> {
    fn drop(&mut self) {
        if self.absorbed > 0 && self.squeezed == 0 {
            log::debug!("Kerl dropped with {} absorbed chunks never squeezed", self.absorbed);
        }
        self.zeroize();
    }
}

