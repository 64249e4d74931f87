use std::{error, fmt, str};

use crate::PUSH_ID_LEN;

/// An ordered digit alphabet paired with the O(1) inverse map from ASCII code points to
/// digit values (`0xff` marking bytes outside the alphabet).
pub(crate) struct Alphabet {
    chars: &'static [u8],
    decode_map: [u8; 256],
}

impl Alphabet {
    const fn new(chars: &'static [u8]) -> Self {
        let mut decode_map = [0xffu8; 256];
        let mut i = 0;
        while i < chars.len() {
            decode_map[chars[i] as usize] = i as u8;
            i += 1;
        }
        Self { chars, decode_map }
    }

    /// Returns the number of digit characters in the alphabet.
    pub(crate) const fn radix(&self) -> u32 {
        self.chars.len() as u32
    }

    /// Returns the character holding positional value `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not less than the radix.
    pub(crate) const fn char_at(&self, digit: u8) -> u8 {
        self.chars[digit as usize]
    }

    /// Returns the digit value of an ASCII code point, or `0xff` if the byte is not part
    /// of the alphabet.
    pub(crate) const fn digit_of(&self, byte: u8) -> u8 {
        self.decode_map[byte as usize]
    }
}

const BASE64URL: Alphabet =
    Alphabet::new(b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz");
const BASE62: Alphabet =
    Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");
const BASE58: Alphabet =
    Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
const BASE36: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

/// The character set used to render identifiers and timestamps.
///
/// Each encoding orders its characters by ascending ASCII value, so the lexicographic
/// order of rendered strings matches the numeric order of the values they encode.
///
/// # Examples
///
/// ```rust
/// use pushid::Encoding;
///
/// assert_eq!("base58".parse(), Ok(Encoding::Base58));
/// assert_eq!(Encoding::default(), Encoding::Base64Url);
/// assert_eq!(Encoding::Base62.radix(), 62);
/// assert!("base91".parse::<Encoding>().is_err());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Encoding {
    /// 64 characters: `-`, `0`-`9`, `A`-`Z`, `_`, `a`-`z`. The default.
    #[default]
    Base64Url,
    /// 62 characters: `0`-`9`, `A`-`Z`, `a`-`z`.
    Base62,
    /// 58 characters: `1`-`9` and the letters without `I`, `O`, and `l`.
    Base58,
    /// 36 characters: `0`-`9`, `A`-`Z`.
    Base36,
}

impl Encoding {
    /// The supported encodings, widest alphabet first.
    pub const ALL: [Encoding; 4] = [
        Self::Base64Url,
        Self::Base62,
        Self::Base58,
        Self::Base36,
    ];

    /// Returns the canonical name of the encoding.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base64Url => "base64url",
            Self::Base62 => "base62",
            Self::Base58 => "base58",
            Self::Base36 => "base36",
        }
    }

    /// Returns the number of distinct digit characters in the alphabet.
    pub const fn radix(self) -> u32 {
        self.alphabet().radix()
    }

    pub(crate) const fn alphabet(self) -> &'static Alphabet {
        match self {
            Self::Base64Url => &BASE64URL,
            Self::Base62 => &BASE62,
            Self::Base58 => &BASE58,
            Self::Base36 => &BASE36,
        }
    }

    /// Tests whether `value` is a well-formed PushID under this encoding: exactly 20
    /// characters, every one a member of the alphabet.
    ///
    /// This never fails on malformed input; any string may be passed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pushid::Encoding;
    ///
    /// assert!(Encoding::Base64Url.is_push_id("-OX2K4a-Hk3NwpTzcvqm"));
    /// assert!(!Encoding::Base62.is_push_id("-OX2K4a-Hk3NwpTzcvqm")); // `-` is not base62
    /// assert!(!Encoding::Base64Url.is_push_id("too short"));
    /// ```
    pub fn is_push_id(self, value: &str) -> bool {
        let alphabet = self.alphabet();
        value.len() == PUSH_ID_LEN && value.bytes().all(|b| alphabet.digit_of(b) != 0xff)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl str::FromStr for Encoding {
    type Err = ParseEncodingError;

    /// Resolves a canonical encoding name: `"base64url"`, `"base62"`, `"base58"`, or
    /// `"base36"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64url" => Ok(Self::Base64Url),
            "base62" => Ok(Self::Base62),
            "base58" => Ok(Self::Base58),
            "base36" => Ok(Self::Base36),
            _ => Err(ParseEncodingError { _private: () }),
        }
    }
}

/// An error resolving a name that is not among the supported encodings.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseEncodingError {
    _private: (),
}

impl fmt::Display for ParseEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"unsupported encoding (expected "base64url", "base62", "base58", or "base36")"#
        )
    }
}

impl error::Error for ParseEncodingError {}
