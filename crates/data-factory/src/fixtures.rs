//! Seeded batches of person fixtures.
//!
//! A fixture record bundles the composite generators into one serialisable
//! value. The same seed always produces identical records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generator::Generator;

/// Chance, in percent, that a fixture carries a second address line.
const ADDRESS_LINE2_PROBABILITY: i32 = 30;

/// A generated person record.
///
/// # Example
///
/// ```
/// use data_factory::generate_people;
///
/// let people = generate_people(42, 3);
/// let json = serde_json::to_string(&people[0]).expect("serialise");
///
/// assert_eq!(people.len(), 3);
/// assert!(json.contains("\"businessName\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFixture {
    /// Full name, first then last.
    pub name: String,
    /// Street address with house number.
    pub address: String,
    /// Apartment or suite line, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City of residence.
    pub city: String,
    /// Lowercase email address.
    pub email: String,
    /// Employer name.
    pub business_name: String,
    /// Calendar date of birth.
    pub birth_date: NaiveDate,
}

/// Generates `count` people from a fresh generator seeded with `seed`.
#[must_use]
pub fn generate_people(seed: u64, count: usize) -> Vec<PersonFixture> {
    let mut generator = Generator::from_seed(seed);
    generate_people_with(&mut generator, count)
}

/// Generates `count` people using an existing generator and its vocabulary.
pub fn generate_people_with(generator: &mut Generator, count: usize) -> Vec<PersonFixture> {
    debug!(seed = generator.seed(), count, "generating person fixtures");
    (0..count).map(|_| person(generator)).collect()
}

fn person(generator: &mut Generator) -> PersonFixture {
    PersonFixture {
        name: generator.name(),
        address: generator.address(),
        address_line2: generator.address_line2_with(ADDRESS_LINE2_PROBABILITY, None),
        city: generator.city(),
        email: generator.email_address(),
        business_name: generator.business_name(),
        birth_date: generator.birth_date().date(),
    }
}
