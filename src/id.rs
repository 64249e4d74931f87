use std::{error, fmt, str};

use fstr::FStr;

use crate::{Encoding, PUSH_ID_LEN, TIMESTAMP_LEN};

/// Represents a PushID: eight timestamp characters followed by twelve suffix characters.
///
/// The value is stored as its 20-character text, so comparison operators order identifiers
/// the same way their string representations sort. Parsing accepts identifiers of every
/// supported encoding because the other alphabets are subsets of the base64url one; use
/// [`Encoding::is_push_id`] to check a string against one specific encoding.
///
/// # Examples
///
/// ```rust
/// use pushid::PushId;
///
/// let x = "-OX2K4a-Hk3NwpTzcvqm".parse::<PushId>()?;
/// assert_eq!(x.to_string(), "-OX2K4a-Hk3NwpTzcvqm");
/// assert_eq!(x.timestamp_part(), "-OX2K4a-");
/// assert_eq!(x.suffix_part(), "Hk3NwpTzcvqm");
/// # Ok::<(), pushid::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct PushId(FStr<PUSH_ID_LEN>);

impl PushId {
    pub(crate) const fn from_inner(inner: FStr<PUSH_ID_LEN>) -> Self {
        Self(inner)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the eight leading characters that encode the creation timestamp.
    pub fn timestamp_part(&self) -> &str {
        &self.as_str()[..TIMESTAMP_LEN]
    }

    /// Returns the twelve trailing characters that hold the monotonic random suffix.
    pub fn suffix_part(&self) -> &str {
        &self.as_str()[TIMESTAMP_LEN..]
    }

    /// Creates an object from a 20-character string representation.
    pub fn try_from_str(value: &str) -> Result<Self, ParseError> {
        if value.len() != PUSH_ID_LEN {
            return Err(ParseError::invalid_length(value.len()));
        }

        let alphabet = Encoding::Base64Url.alphabet();
        let mut dst = [0u8; PUSH_ID_LEN];
        for (i, b) in value.bytes().enumerate() {
            if alphabet.digit_of(b) == 0xff {
                // every byte before `i` was ASCII, so `i` is both a char boundary and the
                // character position
                return Err(ParseError::invalid_digit(value, i));
            }
            dst[i] = b;
        }

        // SAFETY: every byte was found in the alphabet, which is all ASCII.
        Ok(Self(unsafe { FStr::from_inner_unchecked(dst) }))
    }
}

impl str::FromStr for PushId {
    type Err = ParseError;

    /// Creates an object from a 20-character string representation.
    fn from_str(str_value: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(str_value)
    }
}

impl fmt::Display for PushId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for PushId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for PushId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_str(&value)
    }
}

impl From<PushId> for String {
    fn from(object: PushId) -> Self {
        object.0.into()
    }
}

/// An error parsing an invalid string representation of PushID.
#[derive(Clone, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
enum ParseErrorKind {
    InvalidLength { n_bytes: usize },
    InvalidDigit { digit: char, position: usize },
}

impl ParseError {
    const fn invalid_length(n_bytes: usize) -> Self {
        Self {
            kind: ParseErrorKind::InvalidLength { n_bytes },
        }
    }

    /// Creates an `InvalidDigit` variant from the entire string and the position of the
    /// first invalid byte, which is always a character boundary.
    fn invalid_digit(src: &str, position: usize) -> Self {
        let digit = src[position..].chars().next().unwrap();
        Self {
            kind: ParseErrorKind::InvalidDigit { digit, position },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse string as PushID: ")?;
        match self.kind {
            ParseErrorKind::InvalidLength { n_bytes } => {
                write!(f, "invalid length: {} bytes (expected 20)", n_bytes)
            }
            ParseErrorKind::InvalidDigit { digit, position } => {
                write!(f, "invalid digit '{}' at {}", digit.escape_debug(), position)
            }
        }
    }
}

impl error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::PushId;

    /// Parses and renders prepared cases symmetrically
    #[test]
    fn parses_and_renders_prepared_cases_symmetrically() {
        let cases = [
            "--------------------",
            "-OX2K4a-Hk3NwpTzcvqm",
            "0UtAWzcOqT3rNh29MwfP",
            "1o6AaNPyqT3rNh29MwfP",
            "ME11ROG0ABCDEF012345",
            "zzzzzzzzzzzzzzzzzzzz",
            "_____________-------",
        ];

        for e in cases {
            let parsed = e.parse::<PushId>().unwrap();
            assert_eq!(parsed.as_str(), e);
            assert_eq!(parsed.to_string(), e);
            assert_eq!(PushId::try_from(String::from(e)).unwrap(), parsed);
            assert_eq!(String::from(parsed), e);
            assert_eq!(
                format!("{}{}", parsed.timestamp_part(), parsed.suffix_part()),
                e
            );
            assert_eq!(parsed.timestamp_part().len(), 8);
            assert_eq!(parsed.suffix_part().len(), 12);
        }
    }

    /// Returns error if an invalid string representation is supplied
    #[test]
    fn returns_error_if_an_invalid_string_representation_is_supplied() {
        use super::ParseErrorKind::*;

        let cases = [
            ("", InvalidLength { n_bytes: 0 }),
            ("-OX2K4a-Hk3NwpTzcvq", InvalidLength { n_bytes: 19 }),
            ("-OX2K4a-Hk3NwpTzcvqmm", InvalidLength { n_bytes: 21 }),
            (" -OX2K4a-Hk3NwpTzcvqm", InvalidLength { n_bytes: 21 }),
            (
                "+OX2K4a-Hk3NwpTzcvqm",
                InvalidDigit { digit: '+', position: 0 },
            ),
            (
                "-OX2K4a-Hk3Nwp!zcvqm",
                InvalidDigit { digit: '!', position: 14 },
            ),
            (
                "-OX2K4a-Hk3NwpTzcvq ",
                InvalidDigit { digit: ' ', position: 19 },
            ),
            (
                // 20 bytes in total, with the three-byte character starting at 11
                "-OX2K4a-Hk3漢NwpTzc",
                InvalidDigit { digit: '漢', position: 11 },
            ),
        ];

        for (value, kind) in cases {
            let result = value.parse::<PushId>();
            assert_eq!(result.unwrap_err().kind, kind);
        }
    }

    /// Supports comparison operators in string order
    #[test]
    fn supports_comparison_operators_in_string_order() {
        fn hash(v: impl std::hash::Hash) -> u64 {
            use std::{collections::hash_map::DefaultHasher, hash::Hasher};
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }

        let ordered = [
            "--------------------",
            "-------0------------",
            "-------z------------",
            "------0-------------",
            "0-------------------",
            "0UtAWzcOqT3rNh29MwfP",
            "ME11ROG0ABCDEF012345",
            "_____________-------",
            "zzzzzzzzzzzzzzzzzzzz",
        ]
        .map(|e| e.parse::<PushId>().unwrap());

        let mut prev = ordered[0];
        for curr in &ordered[1..] {
            assert_ne!(*curr, prev);
            assert_ne!(hash(*curr), hash(prev));
            assert!(*curr > prev);
            assert!(prev < *curr);
            assert!(curr.as_str() > prev.as_str());

            let clone = *curr;
            assert_eq!(*curr, clone);
            assert_eq!(hash(*curr), hash(clone));
            assert!(*curr >= clone);
            assert!(*curr <= clone);

            prev = *curr;
        }
    }

    /// Parses every identifier the generator produces, in any encoding
    #[cfg(feature = "default_rng")]
    #[test]
    fn parses_every_identifier_the_generator_produces_in_any_encoding() {
        use crate::{Encoding, PushIdGenerator};

        for e in Encoding::ALL {
            let mut g = PushIdGenerator::with_encoding(e);
            for _ in 0..1000 {
                let id = g.generate();
                assert_eq!(id.as_str().parse::<PushId>().unwrap(), id);
            }
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod with_serde {
    use super::{fmt, str, PushId};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for PushId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> serde::Deserialize<'de> for PushId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(VisitorImpl)
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = PushId;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a PushID string representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::try_from_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            match str::from_utf8(value) {
                Ok(str_value) => self.visit_str(str_value),
                Err(err) => Err(de::Error::custom(err)),
            }
        }
    }

}
