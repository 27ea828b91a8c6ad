//! API key generation.
//!
//! Keys are 32-character opaque tokens drawn from a 62-symbol alphabet
//! (a-z, A-Z, 0-9), giving a 62^32 key space. The generator makes no
//! uniqueness guarantee of its own; the UNIQUE constraint on the apikey
//! table enforces it at insertion time, and a collision surfaces to the
//! caller as a store error.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of every generated API key, in characters.
pub const KEY_LENGTH: usize = 32;

/// The 62 symbols an API key is drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Process-owned source of API keys.
///
/// Wraps a single `StdRng` behind a mutex so one instance can be shared
/// across request tasks via the application state. Constructed once at
/// startup; there is no global RNG anywhere in the crate.
pub struct KeyGenerator {
    rng: Mutex<StdRng>,
}

impl KeyGenerator {
    /// Create a generator seeded from the current system time.
    ///
    /// This is the production constructor, called once at process start.
    pub fn from_time_seed() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    /// Create a generator with an explicit seed.
    ///
    /// Deterministic; used by tests that need reproducible key sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Produce a new 32-character key, each symbol drawn uniformly with
    /// replacement from the alphabet.
    pub fn generate_key(&self) -> String {
        // A poisoned mutex only means another task panicked mid-draw;
        // the RNG state is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..KEY_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_32_chars_from_the_alphabet() {
        let generator = KeyGenerator::from_time_seed();
        for _ in 0..100 {
            let key = generator.generate_key();
            assert_eq!(key.len(), KEY_LENGTH);
            assert!(key.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn same_seed_produces_same_sequence() {
        let a = KeyGenerator::from_seed(42);
        let b = KeyGenerator::from_seed(42);
        for _ in 0..10 {
            assert_eq!(a.generate_key(), b.generate_key());
        }
    }

    #[test]
    fn successive_keys_differ() {
        let generator = KeyGenerator::from_time_seed();
        assert_ne!(generator.generate_key(), generator.generate_key());
    }
}
