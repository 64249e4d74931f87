use super::*;

use rand09::{rngs::StdRng, RngCore as _, SeedableRng as _};


#[cfg(not(feature = "default_rng"))]
impl PushIdGenerator {
    pub(crate) fn new() -> PushIdGenerator<impl RandSource, impl TimeSource> {
        let local_var = 0u32;
        let addr_as_seed = (&local_var as *const u32) as u64;
        let addr_as_seed = addr_as_seed ^ StdSystemTime.unix_ts_ms();
        PushIdGenerator::with_rand_and_time_sources(
            Encoding::default(),
            seeded(addr_as_seed),
            StdSystemTime,
        )
    }
}

/// A random source backed by a seeded non-secure RNG.
pub(crate) struct SeededRand(StdRng);

impl RandSource for SeededRand {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
}

pub(crate) fn seeded(seed: u64) -> SeededRand {
    SeededRand(StdRng::seed_from_u64(seed))
}

/// A random source that replays a scripted sequence and then repeats its final value.
pub(crate) struct ScriptedRand {
    draws: Vec<u32>,
    i: usize,
}

impl ScriptedRand {
    pub(crate) fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.to_vec(),
            i: 0,
        }
    }
}

impl RandSource for ScriptedRand {
    fn next_u32(&mut self) -> u32 {
        let v = self.draws[self.i.min(self.draws.len() - 1)];
        self.i += 1;
        v
    }
}

/// A wall clock that replays scripted readings and then repeats the final one.
pub(crate) struct StepClock {
    readings: Vec<u64>,
    i: usize,
}

impl StepClock {
    pub(crate) fn new(readings: &[u64]) -> Self {
        Self {
            readings: readings.to_vec(),
            i: 0,
        }
    }
}

impl TimeSource for StepClock {
    fn unix_ts_ms(&mut self) -> u64 {
        let v = self.readings[self.i.min(self.readings.len() - 1)];
        self.i += 1;
        v
    }
}

/// Reads the suffix of an identifier back as a big-endian base-R integer.
pub(crate) fn suffix_value(id: &PushId, encoding: Encoding) -> u128 {
    let alphabet = encoding.alphabet();
    id.suffix_part().bytes().fold(0u128, |acc, b| {
        acc * alphabet.radix() as u128 + alphabet.digit_of(b) as u128
    })
}

/// Is iterable with for-in loop
#[test]
fn is_iterable_with_for_in_loop() {
    let mut i = 0;
    for e in PushIdGenerator::new() {
        assert!(Encoding::Base64Url.is_push_id(e.as_str()));
        i += 1;
        if i > 100 {
            break;
        }
    }
    assert_eq!(i, 101);
}

/// Shares one step function between generate and the iterator
#[test]
fn shares_one_step_function_between_generate_and_the_iterator() {
    let ts = 0x0123_4567_89abu64;
    let mut g =
        PushIdGenerator::with_rand_and_time_sources(Encoding::default(), seeded(1), StepClock::new(&[ts]));

    let mut prev = g.generate();
    for (i, curr) in g.by_ref().take(500).enumerate() {
        assert!(prev < curr, "at step {}", i);
        assert_eq!(curr.timestamp_part(), prev.timestamp_part());
        prev = curr;
    }
}

/// Exposes the encoding and the last used timestamp
#[test]
fn exposes_the_encoding_and_the_last_used_timestamp() {
    let ts = 1_700_000_000_123u64;
    let mut g = PushIdGenerator::with_rand_and_time_sources(
        Encoding::Base62,
        seeded(42),
        StepClock::new(&[ts]),
    );
    assert_eq!(g.encoding(), Encoding::Base62);
    assert_eq!(g.last_timestamp(), None);

    let id = g.generate();
    assert_eq!(g.last_timestamp(), Some(ts));
    assert_eq!(
        crate::decode_timestamp(id.as_str(), Encoding::Base62).unwrap(),
        ts
    );
}

/// Draws suffix digit values below the radix for every encoding
#[test]
fn draws_suffix_digit_values_below_the_radix_for_every_encoding() {
    for e in Encoding::ALL {
        let mut g = PushIdGenerator::with_rand_and_time_sources(
            e,
            seeded(0xfeed),
            StepClock::new(&[1_754_550_000_000]),
        );
        for _ in 0..1000 {
            let id = g.generate();
            assert!(e.is_push_id(id.as_str()));
            assert!(suffix_value(&id, e) < (e.radix() as u128).pow(12));
        }
    }
}
