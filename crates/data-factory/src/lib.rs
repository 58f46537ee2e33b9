//! Deterministic synthetic test data.
//!
//! A [`Generator`] combines one seedable random source with three swappable
//! vocabulary tables and produces names, addresses, email addresses,
//! dates, numbers and length-constrained text. The same seed driven through
//! the same calls always yields the same values.
//!
//! # Overview
//!
//! - Selection primitives: probability gates and slice picks
//! - Half-open numeric ranges and inclusive length ranges
//! - Calendar dates, day offsets and instants within a range
//! - Characters, words and space-separated text of exact length
//! - Composite values built from the vocabulary tables
//! - Seeded batches of serialisable person fixtures
//!
//! # Example
//!
//! ```
//! use data_factory::Generator;
//!
//! let mut generator = Generator::from_seed(73_438);
//!
//! let name = generator.name();
//! let email = generator.email_address();
//! let text = generator.random_text_exact(64).expect("non-negative length");
//!
//! assert!(name.contains(' '));
//! assert!(email.contains('@'));
//! assert_eq!(text.len(), 64);
//! ```

mod composite;
mod config;
mod dates;
mod error;
pub mod fixture_cli;
mod fixtures;
mod generator;
mod length;
mod numeric;
mod random;
mod selection;
mod text;
mod vocabulary;

pub use config::FixtureSettings;
pub use dates::BIRTH_DATE_SPAN_DAYS;
pub use error::{InvalidArgument, LengthBound, VocabularyError};
pub use fixtures::{PersonFixture, generate_people, generate_people_with};
pub use generator::Generator;
pub use length::LengthRange;
pub use random::{LEGACY_SEED, RandomSource, SharedRandomSource, legacy_random_source};
pub use selection::{ALWAYS, Pick};
pub use vocabulary::{
    ADDRESSES_FILE, AddressData, CONTENT_FILE, ContentData, NAMES_FILE, NameData, VocabularySet,
    VocabularyTable,
};
