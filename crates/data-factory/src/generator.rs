//! The generator: one random source plus three vocabulary tables.
//!
//! Generation methods live next to the concerns they implement
//! (`selection`, `numeric`, `dates`, `text`, `composite`); this module owns
//! construction, reseeding and vocabulary swaps.

use tracing::debug;

use crate::random::{RandomHandle, RandomSource, SharedRandomSource, legacy_random_source};
use crate::vocabulary::{AddressData, ContentData, NameData, VocabularySet};

/// Deterministic synthetic-data generator.
///
/// All randomness flows through a single random source, so two generators
/// built from the same seed and driven through the same calls produce the
/// same output.
///
/// # Example
///
/// ```
/// use data_factory::Generator;
///
/// let mut first = Generator::from_seed(73_438);
/// let mut second = Generator::from_seed(73_438);
///
/// assert_eq!(first.name(), second.name());
/// assert_eq!(
///     first.random_text(10, 40).expect("valid range"),
///     second.random_text(10, 40).expect("valid range"),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    pub(crate) random: RandomHandle,
    pub(crate) names: NameData,
    pub(crate) addresses: AddressData,
    pub(crate) content: ContentData,
}

impl Generator {
    /// Creates a generator with a fresh, non-deterministic seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_source(RandomHandle::Owned(RandomSource::from_entropy()))
    }

    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_source(RandomHandle::Owned(RandomSource::from_seed(seed)))
    }

    /// Creates a generator bound to the process-wide legacy random source.
    ///
    /// Every legacy generator draws from the same stream, seeded with
    /// [`LEGACY_SEED`](crate::LEGACY_SEED), so output depends on the order
    /// in which all of them are called. Prefer [`Generator::from_seed`].
    #[must_use]
    pub fn legacy() -> Self {
        Self::with_shared_source(legacy_random_source())
    }

    /// Creates a generator drawing from a caller-supplied shared source.
    #[must_use]
    pub fn with_shared_source(source: SharedRandomSource) -> Self {
        Self::from_source(RandomHandle::Shared(source))
    }

    fn from_source(random: RandomHandle) -> Self {
        Self {
            random,
            names: NameData::default(),
            addresses: AddressData::default(),
            content: ContentData::default(),
        }
    }

    /// Replaces the random source with one seeded by `seed`.
    ///
    /// When the generator uses a shared source, the shared source itself is
    /// replaced and every generator bound to it sees the new stream.
    pub fn randomize(&mut self, seed: u64) {
        self.random.reseed(seed);
    }

    /// Returns the seed of the current random source.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.random.seed()
    }

    /// Returns `true` when the generator draws from a shared source.
    #[must_use]
    pub const fn uses_shared_source(&self) -> bool {
        self.random.is_shared()
    }

    /// Returns the name table.
    #[must_use]
    pub const fn name_data(&self) -> &NameData {
        &self.names
    }

    /// Replaces the name table for subsequent calls.
    pub fn set_name_data(&mut self, names: NameData) {
        debug!(first_names = names.first_names().len(), "name vocabulary replaced");
        self.names = names;
    }

    /// Returns the address table.
    #[must_use]
    pub const fn address_data(&self) -> &AddressData {
        &self.addresses
    }

    /// Replaces the address table for subsequent calls.
    pub fn set_address_data(&mut self, addresses: AddressData) {
        debug!(cities = addresses.cities().len(), "address vocabulary replaced");
        self.addresses = addresses;
    }

    /// Returns the content table.
    #[must_use]
    pub const fn content_data(&self) -> &ContentData {
        &self.content
    }

    /// Replaces the content table for subsequent calls.
    pub fn set_content_data(&mut self, content: ContentData) {
        debug!(words = content.words().len(), "content vocabulary replaced");
        self.content = content;
    }

    /// Installs all three tables from `vocabulary`.
    pub fn set_vocabulary(&mut self, vocabulary: VocabularySet) {
        let VocabularySet {
            names,
            addresses,
            content,
        } = vocabulary;
        self.set_name_data(names);
        self.set_address_data(addresses);
        self.set_content_data(content);
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::vocabulary::VocabularyTable;

    #[test]
    fn from_seed_records_the_seed() {
        let generator = Generator::from_seed(42);
        assert_eq!(generator.seed(), 42);
        assert!(!generator.uses_shared_source());
    }

    #[test]
    fn legacy_generators_share_a_source() {
        assert!(Generator::legacy().uses_shared_source());
    }

    #[test]
    fn randomize_restarts_output() {
        let mut generator = Generator::from_seed(1);
        let first = generator.name();

        generator.randomize(1);

        assert_eq!(generator.name(), first);
    }

    #[test]
    fn shared_generators_see_each_others_reseed() {
        let shared = Arc::new(Mutex::new(RandomSource::from_seed(3)));
        let mut first = Generator::with_shared_source(Arc::clone(&shared));
        let mut second = Generator::with_shared_source(shared);
        let mut reference = Generator::from_seed(500);

        first.randomize(500);

        assert_eq!(second.seed(), 500);
        assert_eq!(second.name(), reference.name());
    }

    #[test]
    fn vocabulary_swaps_affect_later_calls() {
        let mut generator = Generator::from_seed(9);
        let names = NameData::from_json(
            r#"{"firstNames": ["Ada"], "lastNames": ["Lovelace"], "suffixes": ["PhD"], "prefixes": ["Dr"]}"#,
        )
        .expect("valid names");

        generator.set_name_data(names);

        assert_eq!(generator.name(), "Ada Lovelace");
        assert_eq!(generator.name_data().last_names(), ["Lovelace"]);
    }

    #[test]
    fn set_vocabulary_installs_every_table() {
        let mut generator = Generator::from_seed(9);
        let vocabulary = VocabularySet {
            names: NameData::from_fake_locale(1, 5),
            addresses: AddressData::from_fake_locale(1, 5),
            content: ContentData::default(),
        };

        generator.set_vocabulary(vocabulary.clone());

        assert_eq!(generator.name_data(), &vocabulary.names);
        assert_eq!(generator.address_data(), &vocabulary.addresses);
        assert_eq!(generator.content_data(), &vocabulary.content);
    }
}
