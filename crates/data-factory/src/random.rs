//! Seedable random source behind every generator.
//!
//! A [`Generator`](crate::Generator) owns its random source by default. The
//! legacy process-wide source is opt-in: generators bound to it share one
//! stream, so their combined output depends on call interleaving.

use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Seed of the process-wide legacy random source.
pub const LEGACY_SEED: u64 = 93_285;

/// A reseedable pseudo-random stream that remembers its seed.
///
/// # Example
///
/// ```
/// use data_factory::RandomSource;
///
/// let source = RandomSource::from_seed(42);
/// assert_eq!(source.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source whose stream is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source from a freshly drawn, non-deterministic seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Returns the seed this source was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// A random source shared between generators.
pub type SharedRandomSource = Arc<Mutex<RandomSource>>;

static LEGACY_SOURCE: LazyLock<SharedRandomSource> =
    LazyLock::new(|| Arc::new(Mutex::new(RandomSource::from_seed(LEGACY_SEED))));

/// Returns a handle to the process-wide legacy random source.
///
/// Every call returns the same underlying source, seeded with
/// [`LEGACY_SEED`] when first touched.
#[must_use]
pub fn legacy_random_source() -> SharedRandomSource {
    Arc::clone(&LEGACY_SOURCE)
}

/// Owned or shared access to a [`RandomSource`].
#[derive(Debug, Clone)]
pub(crate) enum RandomHandle {
    Owned(RandomSource),
    Shared(SharedRandomSource),
}

impl RandomHandle {
    /// Runs `f` against the underlying RNG.
    pub(crate) fn draw<T>(&mut self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        match self {
            Self::Owned(source) => f(&mut source.rng),
            Self::Shared(shared) => {
                let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut guard.rng)
            }
        }
    }

    /// Replaces the underlying source wholesale.
    pub(crate) fn reseed(&mut self, seed: u64) {
        let fresh = RandomSource::from_seed(seed);
        match self {
            Self::Owned(source) => *source = fresh,
            Self::Shared(shared) => {
                *shared.lock().unwrap_or_else(PoisonError::into_inner) = fresh;
            }
        }
        debug!(seed, shared = self.is_shared(), "random source reseeded");
    }

    pub(crate) fn seed(&self) -> u64 {
        match self {
            Self::Owned(source) => source.seed(),
            Self::Shared(shared) => shared.lock().unwrap_or_else(PoisonError::into_inner).seed(),
        }
    }

    pub(crate) const fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }

    /// Uniform index in `[0, bound)`; `bound` must be non-zero.
    pub(crate) fn below(&mut self, bound: usize) -> usize {
        self.draw(|rng| rng.random_range(0..bound))
    }

    /// Uniform integer in `[min, max)`, or `min` without a draw when equal.
    ///
    /// Callers guarantee `min <= max`.
    pub(crate) fn between(&mut self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }
        self.draw(|rng| rng.random_range(min..max))
    }

    /// Lowercase ASCII letter drawn uniformly from the 26 available.
    pub(crate) fn letter(&mut self) -> char {
        let offset: u8 = self.draw(|rng| rng.random_range(0..26));
        char::from(b'a' + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(handle: &mut RandomHandle, len: usize) -> Vec<u64> {
        (0..len).map(|_| handle.draw(|rng| rng.random())).collect()
    }

    #[test]
    fn same_seed_produces_same_stream() {
        let mut first = RandomHandle::Owned(RandomSource::from_seed(7));
        let mut second = RandomHandle::Owned(RandomSource::from_seed(7));

        assert_eq!(stream(&mut first, 16), stream(&mut second, 16));
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let mut handle = RandomHandle::Owned(RandomSource::from_seed(11));
        let before = stream(&mut handle, 8);

        handle.reseed(11);

        assert_eq!(stream(&mut handle, 8), before);
        assert_eq!(handle.seed(), 11);
    }

    #[test]
    fn reseeding_a_shared_source_affects_every_holder() {
        let shared = Arc::new(Mutex::new(RandomSource::from_seed(1)));
        let mut first = RandomHandle::Shared(Arc::clone(&shared));
        let mut second = RandomHandle::Shared(Arc::clone(&shared));

        first.reseed(99);
        let expected = stream(&mut RandomHandle::Owned(RandomSource::from_seed(99)), 1);

        assert_eq!(second.seed(), 99);
        assert_eq!(stream(&mut second, 1), expected);
    }

    #[test]
    fn shared_holders_interleave_one_stream() {
        let shared = Arc::new(Mutex::new(RandomSource::from_seed(5)));
        let mut first = RandomHandle::Shared(Arc::clone(&shared));
        let mut second = RandomHandle::Shared(shared);
        let expected = stream(&mut RandomHandle::Owned(RandomSource::from_seed(5)), 2);

        let drawn = vec![
            first.draw(|rng| rng.random::<u64>()),
            second.draw(|rng| rng.random::<u64>()),
        ];

        assert_eq!(drawn, expected);
    }

    #[test]
    fn legacy_source_is_a_single_instance() {
        assert!(Arc::ptr_eq(&legacy_random_source(), &legacy_random_source()));
    }

    #[test]
    fn between_equal_bounds_consumes_nothing() {
        let mut handle = RandomHandle::Owned(RandomSource::from_seed(3));
        let mut untouched = RandomHandle::Owned(RandomSource::from_seed(3));

        assert_eq!(handle.between(i32::MIN, i32::MIN), i32::MIN);
        assert_eq!(stream(&mut handle, 4), stream(&mut untouched, 4));
    }

    #[test]
    fn letters_are_lowercase_ascii() {
        let mut handle = RandomHandle::Owned(RandomSource::from_seed(21));
        for _ in 0..1_000 {
            assert!(handle.letter().is_ascii_lowercase());
        }
    }
}
