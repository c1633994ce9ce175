//! Conversions between the three representations of ternary data used by Kerl:
//! tryte strings, trit sequences and 48-byte buffers.
//!
//! A tryte string is human-readable, and every tryte expands to exactly three trits.
//! Groups of [`HASH_LENGTH`] trits are read as a balanced-ternary integer, least significant trit first,
//! which is in turn stored as a signed 384-bit big-endian two's-complement integer:
//!
//! ```
//! use kerl::codec::{bytes_to_trits, trits_to_bytes, trytes_to_trits, trits_to_trytes};
//!
//! let trits = trytes_to_trits("A9Z").unwrap();
//! assert_eq!(trits, [1, 0, 0, 0, 0, 0, -1, 0, 0]);
//! assert_eq!(trits_to_trytes(&trits).unwrap(), "A9Z");
//!
//! let mut chunk = [0i8; 243];
//! chunk[0] = -1;
//! let bytes = trits_to_bytes(&chunk).unwrap();
//! assert_eq!(bytes, [0xff; 48]);
//! assert_eq!(bytes_to_trits(&bytes).unwrap(), chunk);
//! ```

/// Trit sequences and 384-bit two's-complement buffers.
mod bytes;
/// Tryte strings and trit sequences.
mod trytes;

pub use bytes::{bytes_to_trits, trits_to_bytes};
pub use trytes::{trits_to_trytes, trytes_to_trits, TRYTE_ALPHABET};

/// A balanced ternary digit, in {-1, 0, 1}.
pub type Trit = i8;

/// Number of trits in a hash chunk.
pub const HASH_LENGTH: usize = 243;

/// Number of trytes in a hash chunk.
pub const TRYTE_HASH_LENGTH: usize = HASH_LENGTH / 3;

/// Number of bytes in a hash chunk: 384 bits.
pub const BYTE_HASH_LENGTH: usize = 48;

/// Returns an error if `trit` is not a balanced ternary digit.
#[inline]
pub(crate) fn check_trit(trit: Trit) -> Result<Trit, crate::KerlError> {
    match trit {
        -1..=1 => Ok(trit),
        _ => Err(crate::KerlError::InvalidTrit(trit)),
    }
}
