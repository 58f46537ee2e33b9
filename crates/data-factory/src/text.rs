//! Character, word and text generators with length contracts.
//!
//! Every length range is inclusive and validated before any draw:
//!
//! - `random_chars` returns exactly the drawn number of letters;
//! - `random_word*` returns a dictionary word within the range, or a
//!   synthesised run of letters when the dictionary has none;
//! - `random_text*` returns single-space separated words whose total length
//!   equals the drawn target, with no leading or trailing space.

use rand::Rng;
use rand_distr::StandardNormal;
use tracing::trace;

use crate::error::InvalidArgument;
use crate::generator::Generator;
use crate::length::LengthRange;
use crate::random::RandomHandle;

/// Scale applied to the half-normal draw for desired word lengths.
const WORD_LENGTH_SPREAD: f64 = 6.0;

impl RandomHandle {
    /// Draws a length in the inclusive range; exact ranges skip the draw.
    fn length_within(&mut self, range: LengthRange) -> usize {
        if range.is_exact() {
            return range.min();
        }
        self.draw(|rng| rng.random_range(range.min()..=range.max()))
    }

    fn letters_within(&mut self, range: LengthRange) -> String {
        let length = self.length_within(range);
        (0..length).map(|_| self.letter()).collect()
    }

    /// Desired word length: `1 + |N(0, 1)| * 6`, floored and at least one.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "half-normal sample is non-negative and saturates on conversion"
    )]
    fn desired_word_length(&mut self) -> usize {
        let sample: f64 = self.draw(|rng| rng.sample(StandardNormal));
        let length = (1.0 + sample.abs() * WORD_LENGTH_SPREAD).floor();
        (length as usize).max(1)
    }
}

/// Chooses the length constraint for the next word of a text.
///
/// A word either finishes the text exactly or leaves at least two units,
/// enough for a separator plus another word. Leaving exactly one unit would
/// force a trailing space.
fn next_word_range(desired: usize, remaining: usize) -> LengthRange {
    if desired >= remaining || remaining <= 2 {
        return LengthRange::from_ordered(remaining, remaining);
    }
    LengthRange::from_ordered(1, desired.min(remaining - 2))
}

impl Generator {
    /// Returns one lowercase ASCII letter.
    pub fn random_char(&mut self) -> char {
        self.random.letter()
    }

    /// Returns between `min_len` and `max_len` random letters, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] for negative or inverted bounds; no
    /// randomness is consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::Generator;
    ///
    /// let mut generator = Generator::from_seed(8);
    /// let chars = generator.random_chars(3, 6).expect("valid range");
    /// assert!((3..=6).contains(&chars.len()));
    /// assert!(chars.chars().all(|c| c.is_ascii_lowercase()));
    /// ```
    pub fn random_chars(&mut self, min_len: i32, max_len: i32) -> Result<String, InvalidArgument> {
        let range = LengthRange::new(min_len, max_len)?;
        Ok(self.random.letters_within(range))
    }

    /// Returns exactly `length` random letters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeLength`] when `length` is negative.
    pub fn random_chars_exact(&mut self, length: i32) -> Result<String, InvalidArgument> {
        let range = LengthRange::exact(length)?;
        Ok(self.random.letters_within(range))
    }

    /// Returns any word from the content dictionary.
    pub fn dictionary_word(&mut self) -> String {
        self.random.pick_entry(self.content.words())
    }

    /// Returns a word of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeLength`] when `length` is negative.
    pub fn random_word(&mut self, length: i32) -> Result<String, InvalidArgument> {
        let range = LengthRange::exact(length)?;
        Ok(self.word_within(range))
    }

    /// Returns a word of exactly `length` characters when `exact`, otherwise
    /// of at most `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeLength`] when `length` is negative.
    pub fn random_word_up_to(&mut self, length: i32, exact: bool) -> Result<String, InvalidArgument> {
        let range = if exact {
            LengthRange::exact(length)?
        } else {
            LengthRange::new(0, length)?
        };
        Ok(self.word_within(range))
    }

    /// Returns a word whose length lies in `[min_len, max_len]`.
    ///
    /// The dictionary is scanned from a random offset, wrapping around, and
    /// the first fitting word wins. Without a fitting word the result is a
    /// synthesised run of letters. A maximum of one always yields `"a"` or
    /// `"I"`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] for negative or inverted bounds; no
    /// randomness is consumed.
    pub fn random_word_between(
        &mut self,
        min_len: i32,
        max_len: i32,
    ) -> Result<String, InvalidArgument> {
        let range = LengthRange::new(min_len, max_len)?;
        Ok(self.word_within(range))
    }

    fn word_within(&mut self, range: LengthRange) -> String {
        if range.max() == 1 {
            let capital: bool = self.random.draw(|rng| rng.random_bool(0.5));
            return if capital { "I" } else { "a" }.to_owned();
        }
        let words = self.content.words();
        if words.is_empty() {
            return self.random.letters_within(range);
        }
        let start = self.random.below(words.len());
        let found = words
            .iter()
            .cycle()
            .skip(start)
            .take(words.len())
            .find(|word| range.contains(word.chars().count()));
        if let Some(word) = found {
            return word.clone();
        }
        trace!(
            min = range.min(),
            max = range.max(),
            "no dictionary word fits; synthesising one"
        );
        self.random.letters_within(range)
    }

    /// Returns text whose length is drawn from `[min_len, max_len]`.
    ///
    /// The text is made of words separated by single spaces, with no
    /// leading or trailing space, and its length matches the draw exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] for negative or inverted bounds; no
    /// randomness is consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::Generator;
    ///
    /// let mut generator = Generator::from_seed(73_438);
    /// let text = generator.random_text(20, 30).expect("valid range");
    ///
    /// assert!((20..=30).contains(&text.len()));
    /// assert!(!text.starts_with(' ') && !text.ends_with(' '));
    /// assert!(!text.contains("  "));
    /// ```
    pub fn random_text(&mut self, min_len: i32, max_len: i32) -> Result<String, InvalidArgument> {
        let range = LengthRange::new(min_len, max_len)?;
        let target = self.random.length_within(range);
        Ok(self.text_of_length(target))
    }

    /// Returns text of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeLength`] when `length` is negative.
    pub fn random_text_exact(&mut self, length: i32) -> Result<String, InvalidArgument> {
        let range = LengthRange::exact(length)?;
        Ok(self.text_of_length(range.min()))
    }

    fn text_of_length(&mut self, target: usize) -> String {
        let mut text = String::with_capacity(target);
        let mut remaining = target;
        while remaining > 0 {
            if !text.is_empty() {
                text.push(' ');
                remaining -= 1;
            }
            let desired = self.random.desired_word_length();
            let word = self.word_within(next_word_range(desired, remaining));
            remaining = remaining.saturating_sub(word.chars().count());
            text.push_str(&word);
        }
        text
    }
}
