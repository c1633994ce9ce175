//! The [`kerl`](crate) package has a single error type, [`KerlError`],
//! returned both by the ternary codec and by the sponge.
//!
//! - Codec errors ([`KerlError::InvalidSymbol`], [`KerlError::InvalidTrit`], [`KerlError::InvalidLength`]):
//!   the input is not a well-formed tryte string or trit sequence.
//!
//! - Range errors ([`KerlError::Overflow`]):
//!   an integer does not fit the 243-trit or 384-bit representation it is converted to.
//!   Unreachable from the sponge itself, only from malformed direct input to the codec.
//!
//! - Sponge errors ([`KerlError::InvalidInput`]):
//!   an absorb or squeeze was asked for a length that is zero, not a multiple of
//!   [`HASH_LENGTH`](crate::HASH_LENGTH), or past the end of the buffer.
//!
//! A [`core::result::Result`] wrapper called [`KerlResult`] (having error fixed to [`KerlError`]) is also provided.
use std::{error::Error, fmt::Display};

/// An error happened while converting or hashing ternary data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KerlError {
    /// Absorb or squeeze length is zero, not a multiple of 243, or out of bounds.
    InvalidInput(String),
    /// A character outside the 27-symbol tryte alphabet.
    InvalidSymbol(char),
    /// A trit value outside {-1, 0, 1}.
    InvalidTrit(i8),
    /// A trit sequence of the wrong length for the requested conversion.
    InvalidLength(usize),
    /// An integer magnitude outside the representable trit or byte range.
    Overflow,
}

/// The result type of every fallible operation in this crate.
pub type KerlResult<T> = Result<T, KerlError>;

impl Display for KerlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
            Self::InvalidSymbol(c) => write!(f, "Invalid tryte symbol {:?}", c),
            Self::InvalidTrit(t) => write!(f, "Invalid trit value {}", t),
            Self::InvalidLength(len) => write!(f, "Invalid trit sequence length {}", len),
            Self::Overflow => write!(f, "Integer overflow"),
        }
    }
}

impl Error for KerlError {}
