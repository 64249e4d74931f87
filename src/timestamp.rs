use std::{error, fmt};

use fstr::FStr;

use crate::encoding::Alphabet;
use crate::{Encoding, MAX_TIMESTAMP, TIMESTAMP_LEN};

/// Encodes a millisecond timestamp into the fixed-width prefix notation of an encoding.
///
/// The result is always exactly eight digits; small values come out padded with the first
/// alphabet character. Values needing more than eight digits are reduced to their low
/// eight digits, so the exact round trip through [`decode_timestamp`] is bounded to
/// `[0, R^8 - 1]`, where `R` is the radix of the encoding.
///
/// # Errors
///
/// Returns `Err` if `timestamp` exceeds [`MAX_TIMESTAMP`] (`2^53 - 1`).
///
/// # Examples
///
/// ```rust
/// use pushid::{encode_timestamp, Encoding};
///
/// assert_eq!(encode_timestamp(0, Encoding::Base64Url)?, "--------");
/// assert_eq!(encode_timestamp(1_700_000_000_000, Encoding::Base64Url)?, "-NjEtLV-");
/// assert_eq!(encode_timestamp(1_700_000_000_000, Encoding::Base36)?, "LOYW3V28");
/// # Ok::<(), pushid::RangeError>(())
/// ```
pub fn encode_timestamp(
    timestamp: u64,
    encoding: Encoding,
) -> Result<FStr<TIMESTAMP_LEN>, RangeError> {
    if timestamp > MAX_TIMESTAMP {
        return Err(RangeError { _private: () });
    }
    let dst = encode_fixed(timestamp, encoding.alphabet());
    // SAFETY: all bytes are alphabet characters, which are ASCII.
    Ok(unsafe { FStr::from_inner_unchecked(dst) })
}

/// Fills the eight-digit prefix without the range check; values past eight digits wrap.
pub(crate) fn encode_fixed(mut timestamp: u64, alphabet: &Alphabet) -> [u8; TIMESTAMP_LEN] {
    let radix = alphabet.radix() as u64;
    let mut dst = [0u8; TIMESTAMP_LEN];
    for b in dst.iter_mut().rev() {
        *b = alphabet.char_at((timestamp % radix) as u8);
        timestamp /= radix;
    }
    dst
}

/// Decodes the eight-digit timestamp prefix of a string.
///
/// Only the first eight characters are read; anything after them (such as the suffix of a
/// full PushID) is ignored.
///
/// # Errors
///
/// Returns `Err` when `value` holds fewer than eight characters or when one of the first
/// eight characters is not part of the encoding's alphabet; the error reports the
/// offending character and its position.
///
/// # Examples
///
/// ```rust
/// use pushid::{decode_timestamp, Encoding};
///
/// assert_eq!(decode_timestamp("--------", Encoding::Base64Url)?, 0);
/// assert_eq!(decode_timestamp("-NjEtLV-Hk3NwpTzcvqm", Encoding::Base64Url)?, 1_700_000_000_000);
/// assert!(decode_timestamp("-NjEtLV", Encoding::Base64Url).is_err());
/// # Ok::<(), pushid::DecodeError>(())
/// ```
pub fn decode_timestamp(value: &str, encoding: Encoding) -> Result<u64, DecodeError> {
    let n_chars = value.chars().take(TIMESTAMP_LEN).count();
    if n_chars < TIMESTAMP_LEN {
        return Err(DecodeError::too_short(n_chars));
    }

    let alphabet = encoding.alphabet();
    let radix = alphabet.radix() as u64;
    let mut result = 0u64;
    for (position, chr) in value.chars().take(TIMESTAMP_LEN).enumerate() {
        let digit = if chr.is_ascii() {
            alphabet.digit_of(chr as u8)
        } else {
            0xff
        };
        if digit == 0xff {
            return Err(DecodeError::invalid_digit(chr, position));
        }
        result = result * radix + digit as u64;
    }
    Ok(result)
}

/// An error from a timestamp beyond the greatest exactly representable value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RangeError {
    _private: (),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timestamp out of range (expected at most 2^53 - 1)")
    }
}

impl error::Error for RangeError {}

/// An error decoding a timestamp prefix from a string.
#[derive(Clone, Debug)]
pub struct DecodeError {
    kind: DecodeErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
enum DecodeErrorKind {
    TooShort { n_chars: usize },
    InvalidDigit { digit: char, position: usize },
}

impl DecodeError {
    const fn too_short(n_chars: usize) -> Self {
        Self {
            kind: DecodeErrorKind::TooShort { n_chars },
        }
    }

    const fn invalid_digit(digit: char, position: usize) -> Self {
        Self {
            kind: DecodeErrorKind::InvalidDigit { digit, position },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not decode timestamp: ")?;
        match self.kind {
            DecodeErrorKind::TooShort { n_chars } => {
                write!(f, "{} characters (expected at least 8)", n_chars)
            }
            DecodeErrorKind::InvalidDigit { digit, position } => {
                write!(f, "invalid digit '{}' at {}", digit.escape_debug(), position)
            }
        }
    }
}

impl error::Error for DecodeError {}
