//! Integration with `rand` (v0.9) crate.

#![cfg(feature = "rand09")]
#![cfg_attr(docsrs, doc(cfg(feature = "rand09")))]

use super::{PushIdGenerator, RandSource, StdSystemTime};
use crate::Encoding;
use rand_core09::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

impl<T: RngCore> PushIdGenerator<Adapter<T>> {
    /// Creates a generator with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.9) crate. The specified random number generator should
    /// be cryptographically strong and securely seeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "default_rng")]
    /// # {
    /// # use rand09 as rand;
    /// use pushid::{Encoding, PushIdGenerator};
    ///
    /// let mut g = PushIdGenerator::with_rand09(Encoding::Base62, rand::rng());
    /// println!("{}", g.generate());
    /// # }
    /// ```
    pub const fn with_rand09(encoding: Encoding, rng: T) -> Self {
        Self::with_rand_and_time_sources(encoding, Adapter(rng), StdSystemTime)
    }
}
