use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::{check_trit, Trit, BYTE_HASH_LENGTH, HASH_LENGTH};
use crate::{KerlError, KerlResult};

/// Reads `bytes` as a signed 384-bit big-endian integer and writes it in balanced ternary,
/// least significant trit first.
///
/// Digits are extracted from the magnitude and negated afterwards for negative values.
/// A remainder of 2 is written as -1, lending one to the next place.
/// Every 384-bit value fits in [`HASH_LENGTH`] trits, hence [`KerlError::Overflow`]
/// is reported only as a guard on the arithmetic.
pub fn bytes_to_trits(bytes: &[u8; BYTE_HASH_LENGTH]) -> KerlResult<[Trit; HASH_LENGTH]> {
    let value = BigInt::from_signed_bytes_be(bytes);
    let negate = value.sign() == Sign::Minus;
    let three = BigUint::from(3u8);

    let mut quotient = value.magnitude().clone();
    let mut trits = [0 as Trit; HASH_LENGTH];
    for trit in trits.iter_mut() {
        if quotient.is_zero() {
            break;
        }
        let (q, r) = quotient.div_rem(&three);
        let digit = match r.to_u8() {
            Some(0) => {
                quotient = q;
                0
            }
            Some(1) => {
                quotient = q;
                1
            }
            _ => {
                quotient = q + 1u8;
                -1
            }
        };
        *trit = if negate { -digit } else { digit };
    }

    if quotient.is_zero() {
        Ok(trits)
    } else {
        Err(KerlError::Overflow)
    }
}

/// Evaluates `trits` as a balanced-ternary integer (`Σ trits[i]·3^i`) and writes it
/// as a signed 384-bit big-endian two's-complement buffer.
///
/// Requires exactly [`HASH_LENGTH`] trits.
/// Fails with [`KerlError::Overflow`] if the value falls outside `[-2^383, 2^383)`,
/// which can only happen when the most significant trit is set.
pub fn trits_to_bytes(trits: &[Trit]) -> KerlResult<[u8; BYTE_HASH_LENGTH]> {
    if trits.len() != HASH_LENGTH {
        return Err(KerlError::InvalidLength(trits.len()));
    }

    let mut value = BigInt::zero();
    for &trit in trits.iter().rev() {
        value = value * 3 + check_trit(trit)?;
    }

    let minimal = value.to_signed_bytes_be();
    if minimal.len() > BYTE_HASH_LENGTH {
        return Err(KerlError::Overflow);
    }
    let fill = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
    let mut bytes = [fill; BYTE_HASH_LENGTH];
    bytes[BYTE_HASH_LENGTH - minimal.len()..].copy_from_slice(&minimal);
    Ok(bytes)
}
