use super::{check_trit, Trit};
use crate::{KerlError, KerlResult};

/// The 27 tryte symbols, ordered by value: `9` is 0, `A..M` are 1..13, `N..Z` are -13..-1.
pub const TRYTE_ALPHABET: &[u8; 27] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Trit triples, least significant first, in the same order as [`TRYTE_ALPHABET`].
const TRYTE_TRITS: [[Trit; 3]; 27] = [
    [0, 0, 0],
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
    [-1, -1, -1],
    [0, -1, -1],
    [1, -1, -1],
    [-1, 0, -1],
    [0, 0, -1],
    [1, 0, -1],
    [-1, 1, -1],
    [0, 1, -1],
    [1, 1, -1],
    [-1, -1, 0],
    [0, -1, 0],
    [1, -1, 0],
    [-1, 0, 0],
];

fn symbol_index(symbol: char) -> Option<usize> {
    match symbol {
        '9' => Some(0),
        'A'..='Z' => Some(symbol as usize - 'A' as usize + 1),
        _ => None,
    }
}

/// Expands every tryte of `trytes` into its three trits.
///
/// The result is exactly three times as long as the input.
pub fn trytes_to_trits(trytes: &str) -> KerlResult<Vec<Trit>> {
    let mut trits = Vec::with_capacity(trytes.len() * 3);
    for symbol in trytes.chars() {
        let index = symbol_index(symbol).ok_or(KerlError::InvalidSymbol(symbol))?;
        trits.extend_from_slice(&TRYTE_TRITS[index]);
    }
    Ok(trits)
}

/// Packs each group of three trits back into its tryte symbol.
///
/// Fails with [`KerlError::InvalidLength`] unless the length is a multiple of 3.
pub fn trits_to_trytes(trits: &[Trit]) -> KerlResult<String> {
    if trits.len() % 3 != 0 {
        return Err(KerlError::InvalidLength(trits.len()));
    }
    trits
        .chunks_exact(3)
        .map(|triple| {
            let value = check_trit(triple[0])? + 3 * check_trit(triple[1])? + 9 * check_trit(triple[2])?;
            let index = value.rem_euclid(27) as usize;
            Ok(TRYTE_ALPHABET[index] as char)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_matches_table() {
        for (index, triple) in TRYTE_TRITS.iter().enumerate() {
            let value = triple[0] + 3 * triple[1] + 9 * triple[2];
            let expected = if index <= 13 { index as i8 } else { index as i8 - 27 };
            assert_eq!(value, expected, "symbol {}", TRYTE_ALPHABET[index] as char);
        }
    }

    #[test]
    fn test_tryte_roundtrip() {
        let alphabet = std::str::from_utf8(TRYTE_ALPHABET).unwrap();
        let trits = trytes_to_trits(alphabet).unwrap();
        assert_eq!(trits.len(), 81);
        assert_eq!(trits_to_trytes(&trits).unwrap(), alphabet);

        let hash = "EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH";
        assert_eq!(trits_to_trytes(&trytes_to_trits(hash).unwrap()).unwrap(), hash);
    }

    #[test]
    fn test_empty() {
        assert_eq!(trytes_to_trits("").unwrap(), Vec::<Trit>::new());
        assert_eq!(trits_to_trytes(&[]).unwrap(), "");
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(trytes_to_trits("AB9c"), Err(KerlError::InvalidSymbol('c')));
        assert_eq!(trytes_to_trits("0"), Err(KerlError::InvalidSymbol('0')));
        assert_eq!(trytes_to_trits("Ä"), Err(KerlError::InvalidSymbol('Ä')));
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(trits_to_trytes(&[1, 0]), Err(KerlError::InvalidLength(2)));
        assert_eq!(trits_to_trytes(&[0; 244]), Err(KerlError::InvalidLength(244)));
    }

    #[test]
    fn test_invalid_trit() {
        assert_eq!(trits_to_trytes(&[0, 2, 0]), Err(KerlError::InvalidTrit(2)));
    }
}
