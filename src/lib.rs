//! # PushID: time-ordered, URL-safe unique identifier strings
//!
//! A PushID is a 20-character string over one of four positional alphabets: the first
//! eight characters encode the generation time in milliseconds, and the remaining twelve
//! hold a randomized suffix that grows monotonically for IDs created within the same
//! millisecond. Because every alphabet orders its characters by ascending ASCII value,
//! sorting PushIDs lexicographically sorts them by generation order.
//!
//! ```rust
//! // generate a new identifier through the process-wide generator
//! let x = pushid::new(); // e.g., "-OX2K4a-Hk3NwpTzcvqm"
//! assert_eq!(x.as_str().len(), 20);
//!
//! // or get it directly as a String
//! let y = pushid::new_string();
//! assert_ne!(x.as_str(), y);
//! ```
//!
//! Owning a generator gives control over the encoding:
//!
//! ```rust
//! use pushid::{Encoding, PushIdGenerator};
//!
//! let mut g = PushIdGenerator::with_encoding(Encoding::Base62);
//! println!("{}", g.generate()); // e.g., "0UtAWzcOqT3rNh29MwfP"
//! println!("{}", g.generate());
//! ```
//!
//! The supported encodings are `base64url` (the default), `base62`, `base58`, and
//! `base36`. See [`Encoding`] for the exact alphabets.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen` enables the process-wide generator behind [`new`] and [`new_string`];
//!   implies `default_rng`.
//! - `default_rng` enables the cryptographically secure default random number generator
//!   used by [`PushIdGenerator::new`].
//!
//! Optional features:
//!
//! - `serde` enables serialization and deserialization of [`PushId`].
//! - `rand08` and `rand09` enable generator constructors taking random number generators
//!   from `rand` v0.8 and v0.9, respectively.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod encoding;
mod global_gen;
mod id;
mod timestamp;

pub mod generator;

pub use encoding::{Encoding, ParseEncodingError};
pub use generator::PushIdGenerator;
#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub use global_gen::{new, new_string};
pub use id::{ParseError, PushId};
pub use timestamp::{decode_timestamp, encode_timestamp, DecodeError, RangeError};

/// The total number of characters in a PushID.
pub const PUSH_ID_LEN: usize = 20;

/// The number of leading characters that encode the timestamp.
pub const TIMESTAMP_LEN: usize = 8;

/// The number of trailing characters that hold the monotonic random suffix.
pub const SUFFIX_LEN: usize = 12;

/// The maximum timestamp value accepted by [`encode_timestamp`]: `2^53 - 1` milliseconds.
pub const MAX_TIMESTAMP: u64 = (1 << 53) - 1;
