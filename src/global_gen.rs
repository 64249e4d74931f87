#![cfg(feature = "global_gen")]

use crate::{PushId, PushIdGenerator};
use std::sync::{Mutex, OnceLock};

#[cfg(unix)]
type GlobalGenInner = fork_safety::ForkAwareGenerator;

#[cfg(not(unix))]
type GlobalGenInner = PushIdGenerator;

fn global() -> &'static Mutex<GlobalGenInner> {
    static G: OnceLock<Mutex<GlobalGenInner>> = OnceLock::new();
    G.get_or_init(Default::default)
}

/// Generates a new PushID object using the global generator.
///
/// The global generator renders identifiers with the default `base64url` encoding; own a
/// [`PushIdGenerator`] to choose another one. This function is thread-safe; multiple
/// threads in a process can call it concurrently without breaking the monotonic order of
/// generated IDs. On Unix, this function resets the generator state when the process ID
/// changes (i.e., upon forks) to avoid collisions across processes.
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn new() -> PushId {
    global()
        .lock()
        .expect("pushid: could not lock global generator")
        .generate()
}

/// Generates a new PushID encoded in the 20-digit `base64url` representation using the
/// global generator.
///
/// Use this to quickly get a new PushID as a string. The concurrency and fork-safety
/// notes on [`new`] apply here as well.
///
/// # Examples
///
/// ```rust
/// let x = pushid::new_string(); // e.g., "-OX2K4a-Hk3NwpTzcvqm"
///
/// assert!(regex::Regex::new(r"^[-0-9A-Z_a-z]{20}$").unwrap().is_match(&x));
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn new_string() -> String {
    new().into()
}

#[cfg(unix)]
mod fork_safety {
    use super::{PushId, PushIdGenerator};
    use std::process;

    /// Discards the inherited generator state on the first call after a process fork.
    #[derive(Debug)]
    pub struct ForkAwareGenerator {
        inner: PushIdGenerator,
        pid: u32,
    }

    impl Default for ForkAwareGenerator {
        fn default() -> Self {
            Self {
                inner: PushIdGenerator::new(),
                pid: process::id(),
            }
        }
    }

    impl ForkAwareGenerator {
        pub fn generate(&mut self) -> PushId {
            let pid = process::id();
            if pid != self.pid {
                self.inner = PushIdGenerator::new();
                self.pid = pid;
            }
            self.inner.generate()
        }
    }
}
