//! Vocabulary pools sampled from the `fake` crate's English locale.
//!
//! Sampling is seeded, so the same seed and pool size always yield the same
//! tables.

use fake::Fake;
use fake::faker::address::raw::{CityName, CountryCode, CountryName, StreetName, StreetSuffix};
use fake::faker::name::raw::{FirstName, LastName, Suffix, Title};
use fake::locales::EN;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{AddressData, NameData, defaults, owned};

/// Draw budget per requested pool entry before sampling gives up on
/// finding more distinct values.
const ATTEMPTS_PER_ENTRY: usize = 8;

/// Collects up to `pool_size` distinct, clean values from `draw`.
///
/// Always returns at least one value when `pool_size` is zero so the pool
/// stays usable by the generator.
fn sample_pool(pool_size: usize, mut draw: impl FnMut() -> String) -> Vec<String> {
    let target = pool_size.max(1);
    let mut pool = Vec::with_capacity(target);
    for _ in 0..target.saturating_mul(ATTEMPTS_PER_ENTRY) {
        if pool.len() == target {
            break;
        }
        let candidate = draw();
        if super::is_clean_entry(&candidate) && !pool.contains(&candidate) {
            pool.push(candidate);
        }
    }
    pool
}

/// Keeps `sampled` unless sampling produced nothing usable.
fn or_defaults(sampled: Vec<String>, fallback: &[&str]) -> Vec<String> {
    if sampled.is_empty() {
        owned(fallback)
    } else {
        sampled
    }
}

impl NameData {
    /// Samples a name table of up to `pool_size` entries per category from
    /// the `fake` English locale.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::NameData;
    ///
    /// let names = NameData::from_fake_locale(42, 20);
    /// assert_eq!(names, NameData::from_fake_locale(42, 20));
    /// assert!(!names.first_names().is_empty());
    /// ```
    #[must_use]
    pub fn from_fake_locale(seed: u64, pool_size: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let first_names = sample_pool(pool_size, || FirstName(EN).fake_with_rng(&mut rng));
        let last_names = sample_pool(pool_size, || LastName(EN).fake_with_rng(&mut rng));
        let suffixes = sample_pool(pool_size, || Suffix(EN).fake_with_rng(&mut rng));
        let prefixes = sample_pool(pool_size, || Title(EN).fake_with_rng(&mut rng));
        debug!(
            seed,
            first_names = first_names.len(),
            last_names = last_names.len(),
            "sampled name vocabulary from fake locale"
        );

        Self {
            first_names: or_defaults(first_names, defaults::FIRST_NAMES),
            last_names: or_defaults(last_names, defaults::LAST_NAMES),
            suffixes: or_defaults(suffixes, defaults::SUFFIXES),
            prefixes: or_defaults(prefixes, defaults::PREFIXES),
        }
    }
}

impl AddressData {
    /// Samples an address table of up to `pool_size` entries per category
    /// from the `fake` English locale.
    ///
    /// Nationalities have no locale counterpart and keep the built-in list.
    #[must_use]
    pub fn from_fake_locale(seed: u64, pool_size: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let street_names = sample_pool(pool_size, || StreetName(EN).fake_with_rng(&mut rng));
        let cities = sample_pool(pool_size, || CityName(EN).fake_with_rng(&mut rng));
        let address_suffixes = sample_pool(pool_size, || StreetSuffix(EN).fake_with_rng(&mut rng));
        let countries = sample_pool(pool_size, || CountryName(EN).fake_with_rng(&mut rng));
        let country_codes = sample_pool(pool_size, || CountryCode(EN).fake_with_rng(&mut rng));
        debug!(
            seed,
            cities = cities.len(),
            "sampled address vocabulary from fake locale"
        );

        Self {
            street_names: or_defaults(street_names, defaults::STREET_NAMES),
            cities: or_defaults(cities, defaults::CITIES),
            address_suffixes: or_defaults(address_suffixes, defaults::ADDRESS_SUFFIXES),
            countries: or_defaults(countries, defaults::COUNTRIES),
            country_codes: or_defaults(country_codes, defaults::COUNTRY_CODES),
            nationalities: owned(defaults::NATIONALITIES),
        }
    }
}
