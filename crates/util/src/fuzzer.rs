use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex, MutexGuard};

/// One step of a generated operation trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOp {
    Insert(i64),
    Delete(i64),
    Search(i64),
}

/// A fuzzer for generating random tree workloads.
///
/// Uses the xoshiro256** PRNG for reproducible sequences when seeded.
///
/// # Examples
///
/// ```
/// use ordered_forest_util::{Fuzzer, TraceOp};
///
/// let fuzzer = Fuzzer::from_u64(7);
///
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// let trace = fuzzer.trace(50, -20, 20);
/// assert_eq!(trace.len(), 50);
/// assert!(trace.iter().all(|op| match op {
///     TraceOp::Insert(k) | TraceOp::Delete(k) | TraceOp::Search(k) => (-20..=20).contains(k),
/// }));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Create a fuzzer whose 32-byte seed is derived from `seed`.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    fn rng(&self) -> MutexGuard<'_, Xoshiro256StarStar> {
        // A panic while holding the lock leaves the generator usable.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng().gen_range(min..=max)
    }

    /// Pick a random element from a slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng().gen_range(0..elements.len());
        &elements[idx]
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng().gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.rng());
    }

    /// `count` keys drawn from [min, max], repeats allowed.
    pub fn keys(&self, count: usize, min: i64, max: i64) -> Vec<i64> {
        (0..count).map(|_| self.random_int(min, max)).collect()
    }

    /// The keys `0..count` in random order.
    pub fn permutation(&self, count: usize) -> Vec<i64> {
        let mut keys: Vec<i64> = (0..count as i64).collect();
        self.shuffle(&mut keys);
        keys
    }

    /// A mixed operation trace over keys in [min, max]: roughly half
    /// inserts, a third deletes, the rest searches.
    pub fn trace(&self, len: usize, min: i64, max: i64) -> Vec<TraceOp> {
        (0..len)
            .map(|_| {
                let key = self.random_int(min, max);
                match self.random_int(0, 5) {
                    0..=2 => TraceOp::Insert(key),
                    3 | 4 => TraceOp::Delete(key),
                    _ => TraceOp::Search(key),
                }
            })
            .collect()
    }
}
