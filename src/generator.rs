//! Types to customize the random number and wall clock sources behind the generator.

use fstr::FStr;

use crate::encoding::Alphabet;
use crate::timestamp::encode_fixed;
use crate::{Encoding, PushId, PUSH_ID_LEN, SUFFIX_LEN, TIMESTAMP_LEN};

#[cfg(feature = "default_rng")]
mod default_rng;

pub mod with_rand08;
pub mod with_rand09;

#[cfg(test)]
mod tests;

/// Represents a PushID generator that encapsulates the cached timestamp prefix and the
/// monotonic suffix state.
///
/// Every call to [`generate`](PushIdGenerator::generate) reads the wall clock once. Within
/// one millisecond the twelve-digit suffix is incremented by one as a big-endian base-R
/// integer, so consecutive identifiers sort strictly after one another; whenever the clock
/// reading changes (in either direction), the prefix is re-encoded and the suffix is
/// redrawn from the random number source.
///
/// An instance must be confined to one logical thread of control, or calls must be guarded
/// by a mutex; the generator itself takes no lock.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "default_rng")]
/// # {
/// use pushid::PushIdGenerator;
///
/// let mut g = PushIdGenerator::new();
/// println!("{}", g.generate());
/// # }
/// ```
///
/// The generator is also an infinite iterator that yields a new identifier per step:
///
/// ```rust
/// # #[cfg(feature = "default_rng")]
/// # {
/// use pushid::PushIdGenerator;
///
/// for id in PushIdGenerator::new().take(4) {
///     println!("{}", id);
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct PushIdGenerator<R = DefaultRng, T = StdSystemTime> {
    encoding: Encoding,
    ts_last: Option<u64>,
    prefix: [u8; TIMESTAMP_LEN],
    suffix: [u8; SUFFIX_LEN],
    rand_source: R,
    time_source: T,
}

#[cfg(feature = "default_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_rng")))]
impl PushIdGenerator {
    /// Creates a generator using the default `base64url` encoding and the default random
    /// number generator.
    pub fn new() -> Self {
        Self::with_encoding(Encoding::default())
    }

    /// Creates a generator that renders identifiers with the specified encoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pushid::{Encoding, PushIdGenerator};
    ///
    /// let mut g = PushIdGenerator::with_encoding(Encoding::Base36);
    /// assert!(Encoding::Base36.is_push_id(g.generate().as_str()));
    /// ```
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self::with_rand_and_time_sources(encoding, DefaultRng::default(), StdSystemTime)
    }
}

#[cfg(feature = "default_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_rng")))]
impl Default for PushIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PushIdGenerator<R> {
    /// Creates a generator with a specified random number source reading the system clock.
    ///
    /// The specified source should be cryptographically strong and securely seeded because
    /// the suffix is the only protection against collisions between generators.
    pub const fn with_rng(encoding: Encoding, rand_source: R) -> Self {
        Self::with_rand_and_time_sources(encoding, rand_source, StdSystemTime)
    }
}

impl<R, T> PushIdGenerator<R, T> {
    /// Creates a generator with specified random number and wall clock sources.
    pub const fn with_rand_and_time_sources(
        encoding: Encoding,
        rand_source: R,
        time_source: T,
    ) -> Self {
        Self {
            encoding,
            ts_last: None,
            prefix: [0; TIMESTAMP_LEN],
            suffix: [0; SUFFIX_LEN],
            rand_source,
            time_source,
        }
    }

    /// Returns the encoding the generator renders identifiers with.
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns the timestamp embedded in the last generated identifier, or `None` if the
    /// generator has not produced one yet.
    pub const fn last_timestamp(&self) -> Option<u64> {
        self.ts_last
    }
}

impl<R: RandSource, T: TimeSource> PushIdGenerator<R, T> {
    /// Generates a new PushID.
    pub fn generate(&mut self) -> PushId {
        let ts = self.time_source.unix_ts_ms();
        self.generate_at(ts)
    }

    /// Runs one step of the generation algorithm against the supplied clock reading.
    fn generate_at(&mut self, ts: u64) -> PushId {
        let alphabet = self.encoding.alphabet();
        if self.ts_last != Some(ts) {
            self.ts_last = Some(ts);
            self.prefix = encode_fixed(ts, alphabet);
            self.reseed(alphabet.radix());
        } else {
            self.roll_suffix(alphabet.radix());
        }
        self.render(alphabet)
    }

    /// Redraws all twelve suffix digits from the random number source.
    fn reseed(&mut self, radix: u32) {
        for digit in self.suffix.iter_mut() {
            *digit = next_digit(&mut self.rand_source, radix);
        }
    }

    /// Adds one to the suffix, carrying from the least significant digit upward.
    ///
    /// When every digit already holds the greatest value, the carry has nowhere to go: the
    /// walk clears all twelve digits and the last one is bumped instead, so the suffix
    /// restarts near zero without signaling an error. Strict in-millisecond ordering holds
    /// only up to that point.
    fn roll_suffix(&mut self, radix: u32) {
        let last_digit = (radix - 1) as u8;
        let mut i = SUFFIX_LEN;
        while i > 0 && self.suffix[i - 1] == last_digit {
            self.suffix[i - 1] = 0;
            i -= 1;
        }
        if i > 0 {
            self.suffix[i - 1] += 1;
        } else {
            self.suffix[SUFFIX_LEN - 1] += 1;
        }
    }

    /// Renders the cached prefix and the current suffix digits into an identifier.
    fn render(&self, alphabet: &Alphabet) -> PushId {
        let mut dst = [0u8; PUSH_ID_LEN];
        dst[..TIMESTAMP_LEN].copy_from_slice(&self.prefix);
        for (b, digit) in dst[TIMESTAMP_LEN..].iter_mut().zip(&self.suffix) {
            *b = alphabet.char_at(*digit);
        }
        // SAFETY: all bytes are alphabet characters, which are ASCII.
        PushId::from_inner(unsafe { FStr::from_inner_unchecked(dst) })
    }
}

impl<R: RandSource, T: TimeSource> Iterator for PushIdGenerator<R, T> {
    type Item = PushId;

    /// Returns a new PushID; the sequence is unbounded and never signals completion.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

/// Draws a uniformly distributed digit value in `[0, radix)`.
fn next_digit(rand_source: &mut impl RandSource, radix: u32) -> u8 {
    // takes only draws below the largest multiple of `radix`, so no digit value is
    // over-represented when the radix is not a power of two
    let bound = (1u64 << 32) - ((1u64 << 32) % radix as u64);
    loop {
        let draw = rand_source.next_u32() as u64;
        if draw < bound {
            return (draw % radix as u64) as u8;
        }
    }
}

/// A source of the random bits that seed the suffix.
pub trait RandSource {
    /// Returns the next random 32-bit unsigned integer.
    fn next_u32(&mut self) -> u32;
}

/// A source of the wall clock readings that order identifiers.
pub trait TimeSource {
    /// Returns the current Unix time in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default wall clock source reading [`std::time::SystemTime`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

/// The default random number generator: a ChaCha12 core reseeded frequently from the
/// operating system's entropy source.
///
/// Constructors are available only when the `default_rng` feature is enabled.
pub struct DefaultRng {
    _private: (),
    #[cfg(feature = "default_rng")]
    inner: rand09::rngs::ReseedingRng<rand_chacha::ChaCha12Core, rand09::rngs::OsRng>,
}

impl std::fmt::Debug for DefaultRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultRng").finish_non_exhaustive()
    }
}
