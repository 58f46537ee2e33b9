//! Selection primitives: probability gates and slice picks.

use rand::Rng;

use crate::error::InvalidArgument;
use crate::generator::Generator;
use crate::random::RandomHandle;

/// Probability, in percent, at which a gate always passes.
pub const ALWAYS: i32 = 100;

/// Options for [`Generator::pick_with`].
///
/// `probability` is the percentage chance of selecting from the pool; when
/// the gate fails the pick yields `default`.
///
/// # Example
///
/// ```
/// use data_factory::{Generator, Pick};
///
/// let mut generator = Generator::from_seed(1);
/// let fallback = "none";
/// let picked = generator
///     .pick_with(&["x", "y"], Pick::with_probability(0).or(&fallback))
///     .expect("non-empty pool");
///
/// assert_eq!(picked, Some(&"none"));
/// ```
#[derive(Debug)]
pub struct Pick<'a, T> {
    probability: i32,
    default: Option<&'a T>,
}

impl<'a, T> Pick<'a, T> {
    /// Always selects from the pool.
    #[must_use]
    pub const fn always() -> Self {
        Self::with_probability(ALWAYS)
    }

    /// Selects with `probability` percent chance, yielding nothing otherwise.
    #[must_use]
    pub const fn with_probability(probability: i32) -> Self {
        Self {
            probability,
            default: None,
        }
    }

    /// Yields `default` instead of nothing when the gate fails.
    #[must_use]
    pub const fn or(self, default: &'a T) -> Self {
        Self {
            probability: self.probability,
            default: Some(default),
        }
    }

    /// Returns the selection probability in percent.
    #[must_use]
    pub const fn probability(&self) -> i32 {
        self.probability
    }
}

impl<T> Clone for Pick<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pick<'_, T> {}

impl<T> Default for Pick<'_, T> {
    fn default() -> Self {
        Self::always()
    }
}

impl RandomHandle {
    /// Draws one integer in `[0, 100)` and passes iff it is below
    /// `probability`.
    pub(crate) fn chance(&mut self, probability: i32) -> bool {
        let roll: i32 = self.draw(|rng| rng.random_range(0..100));
        roll < probability
    }

    pub(crate) fn pick_with<'a, T>(
        &mut self,
        items: &'a [T],
        options: Pick<'a, T>,
    ) -> Result<Option<&'a T>, InvalidArgument> {
        if items.is_empty() {
            return Err(InvalidArgument::EmptyItems);
        }
        if !self.chance(options.probability) {
            return Ok(options.default);
        }
        Ok(items.get(self.below(items.len())))
    }

    pub(crate) fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, InvalidArgument> {
        self.pick_with(items, Pick::always())?
            .ok_or(InvalidArgument::EmptyItems)
    }

    /// Picks a vocabulary entry; categories are non-empty by construction.
    pub(crate) fn pick_entry(&mut self, entries: &[String]) -> String {
        self.pick(entries).cloned().unwrap_or_default()
    }

    /// Gated vocabulary pick.
    pub(crate) fn pick_entry_gated(&mut self, entries: &[String], probability: i32) -> Option<String> {
        self.pick_with(entries, Pick::with_probability(probability))
            .ok()
            .flatten()
            .cloned()
    }
}

impl Generator {
    /// Returns `true` with `probability` percent chance.
    ///
    /// Values of 100 or more always pass; values of 0 or less never do. One
    /// draw is consumed either way.
    pub fn chance(&mut self, probability: i32) -> bool {
        self.random.chance(probability)
    }

    /// Picks a uniformly random element of `items`.
    ///
    /// Works for vectors, arrays and slices alike.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyItems`] when `items` is empty; no
    /// randomness is consumed.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, InvalidArgument> {
        self.random.pick(items)
    }

    /// Picks from `items` behind a probability gate.
    ///
    /// Returns the option's default (or `None`) when the gate fails.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyItems`] when `items` is empty; no
    /// randomness is consumed.
    pub fn pick_with<'a, T>(
        &mut self,
        items: &'a [T],
        options: Pick<'a, T>,
    ) -> Result<Option<&'a T>, InvalidArgument> {
        self.random.pick_with(items, options)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn generator() -> Generator {
        Generator::from_seed(93_285)
    }

    #[rstest]
    fn pick_rejects_empty_pool(mut generator: Generator) {
        let items: Vec<u8> = Vec::new();
        assert_eq!(generator.pick(&items), Err(InvalidArgument::EmptyItems));
    }

    #[rstest]
    fn rejected_pick_consumes_no_randomness(mut generator: Generator) {
        let mut untouched = generator.clone();
        let empty: [u8; 0] = [];

        assert!(generator.pick_with(&empty, Pick::always()).is_err());

        assert_eq!(generator.number_up_to(1_000), untouched.number_up_to(1_000));
    }

    #[rstest]
    fn pick_returns_members(mut generator: Generator) {
        let items = ["red", "green", "blue"];
        for _ in 0..200 {
            let picked = generator.pick(&items).expect("non-empty pool");
            assert!(items.contains(picked));
        }
    }

    #[rstest]
    fn vectors_and_arrays_pick_identically(generator: Generator) {
        let array = [1, 2, 3, 4, 5];
        let vector = array.to_vec();
        let mut from_array = generator.clone();
        let mut from_vector = generator;

        for _ in 0..50 {
            assert_eq!(
                from_array.pick(&array).expect("non-empty"),
                from_vector.pick(&vector).expect("non-empty")
            );
        }
    }

    #[rstest]
    #[case(100)]
    #[case(250)]
    fn certain_probability_always_selects(mut generator: Generator, #[case] probability: i32) {
        for _ in 0..200 {
            let picked = generator
                .pick_with(&["only"], Pick::with_probability(probability))
                .expect("non-empty pool");
            assert_eq!(picked, Some(&"only"));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(-20)]
    fn impossible_probability_yields_default(mut generator: Generator, #[case] probability: i32) {
        let fallback = "fallback";
        for _ in 0..200 {
            let picked = generator
                .pick_with(&["only"], Pick::with_probability(probability).or(&fallback))
                .expect("non-empty pool");
            assert_eq!(picked, Some(&"fallback"));
        }
    }

    #[rstest]
    fn failed_gate_without_default_yields_none(mut generator: Generator) {
        let picked = generator
            .pick_with(&[1, 2, 3], Pick::with_probability(0))
            .expect("non-empty pool");
        assert_eq!(picked, None);
    }

    #[rstest]
    fn chance_is_roughly_proportional(mut generator: Generator) {
        let hits = (0..10_000).filter(|_| generator.chance(30)).count();
        assert!((2_500..3_500).contains(&hits), "unexpected hit count {hits}");
    }

    #[test]
    fn default_options_always_select() {
        let options: Pick<'_, u8> = Pick::default();
        assert_eq!(options.probability(), ALWAYS);
    }
}
