//! Pluggable vocabulary tables.
//!
//! The generator draws raw material from three immutable bundles:
//! [`NameData`], [`AddressData`] and [`ContentData`]. Each ships with
//! built-in defaults, can be parsed from JSON with camelCase keys, and can be
//! swapped on a [`Generator`](crate::Generator) at any time.
//!
//! Every constructor validates the bundle: categories must be non-empty and
//! entries must be non-blank with no surrounding or doubled whitespace. The
//! generator relies on this when it picks from a category.

mod defaults;
mod locale;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VocabularyError;

/// File name of the name table inside a vocabulary directory.
pub const NAMES_FILE: &str = "names.json";

/// File name of the address table inside a vocabulary directory.
pub const ADDRESSES_FILE: &str = "addresses.json";

/// File name of the content table inside a vocabulary directory.
pub const CONTENT_FILE: &str = "content.json";

/// Behaviour shared by the vocabulary bundles.
pub trait VocabularyTable: Sized {
    /// Returns each category's JSON key alongside its entries.
    fn categories(&self) -> Vec<(&'static str, &[String])>;

    /// Parses and validates a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::ParseError`] for malformed JSON or unknown
    /// keys, and the errors of [`VocabularyTable::validate`].
    fn from_json(json: &str) -> Result<Self, VocabularyError>;

    /// Checks that every category is usable by the generator.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::EmptyCategory`] or
    /// [`VocabularyError::InvalidEntry`] for the first offending category.
    fn validate(&self) -> Result<(), VocabularyError> {
        self.categories()
            .into_iter()
            .try_for_each(|(category, entries)| validate_category(category, entries))
    }

    /// Loads and validates a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::IoError`] if the file cannot be read, and
    /// the errors of [`VocabularyTable::from_json`].
    fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let contents = fs::read_to_string(path).map_err(|e| VocabularyError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents)
    }
}

/// Decodes the raw JSON shape, then validates it into the public table.
fn parse_table<R, T>(json: &str) -> Result<T, VocabularyError>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = VocabularyError>,
{
    let raw: R = serde_json::from_str(json).map_err(|e| VocabularyError::ParseError {
        message: e.to_string(),
    })?;
    T::try_from(raw)
}

fn validate_category(category: &'static str, entries: &[String]) -> Result<(), VocabularyError> {
    if entries.is_empty() {
        return Err(VocabularyError::EmptyCategory { category });
    }
    match entries.iter().enumerate().find(|(_, entry)| !is_clean_entry(entry)) {
        Some((index, entry)) => Err(VocabularyError::InvalidEntry {
            category,
            index,
            value: entry.clone(),
        }),
        None => Ok(()),
    }
}

fn is_clean_entry(entry: &str) -> bool {
    !entry.is_empty() && entry.trim() == entry && !entry.contains("  ")
}

fn owned(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| (*entry).to_owned()).collect()
}

/// Person-name vocabulary: first and last names, suffixes and prefixes.
///
/// # Example
///
/// ```
/// use data_factory::{NameData, VocabularyTable};
///
/// let json = r#"{
///     "firstNames": ["Ada"],
///     "lastNames": ["Lovelace"],
///     "suffixes": ["PhD"],
///     "prefixes": ["Dr"]
/// }"#;
///
/// let names = NameData::from_json(json).expect("valid names");
/// assert_eq!(names.first_names(), ["Ada"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawNameData")]
pub struct NameData {
    first_names: Vec<String>,
    last_names: Vec<String>,
    suffixes: Vec<String>,
    prefixes: Vec<String>,
}

impl NameData {
    /// Builds a validated name table.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] if any category is empty or holds an
    /// invalid entry.
    pub fn new(
        first_names: Vec<String>,
        last_names: Vec<String>,
        suffixes: Vec<String>,
        prefixes: Vec<String>,
    ) -> Result<Self, VocabularyError> {
        let names = Self {
            first_names,
            last_names,
            suffixes,
            prefixes,
        };
        names.validate()?;
        Ok(names)
    }

    /// Returns the first names.
    #[must_use]
    pub fn first_names(&self) -> &[String] {
        &self.first_names
    }

    /// Returns the last names.
    #[must_use]
    pub fn last_names(&self) -> &[String] {
        &self.last_names
    }

    /// Returns the name suffixes, such as `Jr`.
    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Returns the name prefixes, such as `Dr`.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for NameData {
    fn default() -> Self {
        Self {
            first_names: owned(defaults::FIRST_NAMES),
            last_names: owned(defaults::LAST_NAMES),
            suffixes: owned(defaults::SUFFIXES),
            prefixes: owned(defaults::PREFIXES),
        }
    }
}

/// Raw JSON shape of [`NameData`] before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawNameData {
    first_names: Vec<String>,
    last_names: Vec<String>,
    suffixes: Vec<String>,
    prefixes: Vec<String>,
}

impl TryFrom<RawNameData> for NameData {
    type Error = VocabularyError;

    fn try_from(raw: RawNameData) -> Result<Self, Self::Error> {
        Self::new(raw.first_names, raw.last_names, raw.suffixes, raw.prefixes)
    }
}

impl VocabularyTable for NameData {
    fn from_json(json: &str) -> Result<Self, VocabularyError> {
        parse_table::<RawNameData, _>(json)
    }

    fn categories(&self) -> Vec<(&'static str, &[String])> {
        vec![
            ("firstNames", self.first_names.as_slice()),
            ("lastNames", self.last_names.as_slice()),
            ("suffixes", self.suffixes.as_slice()),
            ("prefixes", self.prefixes.as_slice()),
        ]
    }
}

/// Address vocabulary: streets, cities, suffixes and country data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAddressData")]
pub struct AddressData {
    street_names: Vec<String>,
    cities: Vec<String>,
    address_suffixes: Vec<String>,
    countries: Vec<String>,
    country_codes: Vec<String>,
    nationalities: Vec<String>,
}

impl AddressData {
    /// Builds a validated address table.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] if any category is empty or holds an
    /// invalid entry.
    pub fn new(
        street_names: Vec<String>,
        cities: Vec<String>,
        address_suffixes: Vec<String>,
        countries: Vec<String>,
        country_codes: Vec<String>,
        nationalities: Vec<String>,
    ) -> Result<Self, VocabularyError> {
        let addresses = Self {
            street_names,
            cities,
            address_suffixes,
            countries,
            country_codes,
            nationalities,
        };
        addresses.validate()?;
        Ok(addresses)
    }

    /// Returns the street names.
    #[must_use]
    pub fn street_names(&self) -> &[String] {
        &self.street_names
    }

    /// Returns the city names.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Returns street suffixes such as `Lane` or `Parkway`.
    #[must_use]
    pub fn address_suffixes(&self) -> &[String] {
        &self.address_suffixes
    }

    /// Returns the country names.
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Returns the country codes.
    #[must_use]
    pub fn country_codes(&self) -> &[String] {
        &self.country_codes
    }

    /// Returns the nationalities.
    #[must_use]
    pub fn nationalities(&self) -> &[String] {
        &self.nationalities
    }
}

impl Default for AddressData {
    fn default() -> Self {
        Self {
            street_names: owned(defaults::STREET_NAMES),
            cities: owned(defaults::CITIES),
            address_suffixes: owned(defaults::ADDRESS_SUFFIXES),
            countries: owned(defaults::COUNTRIES),
            country_codes: owned(defaults::COUNTRY_CODES),
            nationalities: owned(defaults::NATIONALITIES),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawAddressData {
    street_names: Vec<String>,
    cities: Vec<String>,
    address_suffixes: Vec<String>,
    countries: Vec<String>,
    country_codes: Vec<String>,
    nationalities: Vec<String>,
}

impl TryFrom<RawAddressData> for AddressData {
    type Error = VocabularyError;

    fn try_from(raw: RawAddressData) -> Result<Self, Self::Error> {
        Self::new(
            raw.street_names,
            raw.cities,
            raw.address_suffixes,
            raw.countries,
            raw.country_codes,
            raw.nationalities,
        )
    }
}

impl VocabularyTable for AddressData {
    fn from_json(json: &str) -> Result<Self, VocabularyError> {
        parse_table::<RawAddressData, _>(json)
    }

    fn categories(&self) -> Vec<(&'static str, &[String])> {
        vec![
            ("streetNames", self.street_names.as_slice()),
            ("cities", self.cities.as_slice()),
            ("addressSuffixes", self.address_suffixes.as_slice()),
            ("countries", self.countries.as_slice()),
            ("countryCodes", self.country_codes.as_slice()),
            ("nationalities", self.nationalities.as_slice()),
        ]
    }
}

/// Content vocabulary: dictionary words, business types and email parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawContentData")]
pub struct ContentData {
    words: Vec<String>,
    business_types: Vec<String>,
    email_hosts: Vec<String>,
    tlds: Vec<String>,
}

impl ContentData {
    /// Builds a validated content table.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] if any category is empty or holds an
    /// invalid entry.
    pub fn new(
        words: Vec<String>,
        business_types: Vec<String>,
        email_hosts: Vec<String>,
        tlds: Vec<String>,
    ) -> Result<Self, VocabularyError> {
        let content = Self {
            words,
            business_types,
            email_hosts,
            tlds,
        };
        content.validate()?;
        Ok(content)
    }

    /// Returns the dictionary words used for text generation.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the business types appended to business names.
    #[must_use]
    pub fn business_types(&self) -> &[String] {
        &self.business_types
    }

    /// Returns the email host names.
    #[must_use]
    pub fn email_hosts(&self) -> &[String] {
        &self.email_hosts
    }

    /// Returns the top-level domains.
    #[must_use]
    pub fn tlds(&self) -> &[String] {
        &self.tlds
    }
}

impl Default for ContentData {
    fn default() -> Self {
        Self {
            words: owned(defaults::WORDS),
            business_types: owned(defaults::BUSINESS_TYPES),
            email_hosts: owned(defaults::EMAIL_HOSTS),
            tlds: owned(defaults::TLDS),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawContentData {
    words: Vec<String>,
    business_types: Vec<String>,
    email_hosts: Vec<String>,
    tlds: Vec<String>,
}

impl TryFrom<RawContentData> for ContentData {
    type Error = VocabularyError;

    fn try_from(raw: RawContentData) -> Result<Self, Self::Error> {
        Self::new(raw.words, raw.business_types, raw.email_hosts, raw.tlds)
    }
}

impl VocabularyTable for ContentData {
    fn from_json(json: &str) -> Result<Self, VocabularyError> {
        parse_table::<RawContentData, _>(json)
    }

    fn categories(&self) -> Vec<(&'static str, &[String])> {
        vec![
            ("words", self.words.as_slice()),
            ("businessTypes", self.business_types.as_slice()),
            ("emailHosts", self.email_hosts.as_slice()),
            ("tlds", self.tlds.as_slice()),
        ]
    }
}

/// All three vocabulary tables, as installed on a generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularySet {
    /// Person-name table.
    pub names: NameData,
    /// Address table.
    pub addresses: AddressData,
    /// Content table.
    pub content: ContentData,
}

impl VocabularySet {
    /// Loads the tables found in `dir`, keeping defaults for missing files.
    ///
    /// The directory may hold [`NAMES_FILE`], [`ADDRESSES_FILE`] and
    /// [`CONTENT_FILE`].
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] if a present file cannot be read, parsed
    /// or validated.
    pub fn load_dir(dir: &Path) -> Result<Self, VocabularyError> {
        Ok(Self {
            names: load_or_default(&dir.join(NAMES_FILE))?,
            addresses: load_or_default(&dir.join(ADDRESSES_FILE))?,
            content: load_or_default(&dir.join(CONTENT_FILE))?,
        })
    }
}

fn load_or_default<T>(path: &Path) -> Result<T, VocabularyError>
where
    T: VocabularyTable + Default,
{
    if path.is_file() {
        debug!(path = %path.display(), "loading vocabulary table");
        T::from_file(path)
    } else {
        debug!(path = %path.display(), "vocabulary table absent; using defaults");
        Ok(T::default())
    }
}
