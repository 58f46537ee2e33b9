//! Composite generators built from vocabulary picks.
//!
//! Vocabulary categories are non-empty by construction, so these generators
//! are infallible apart from [`Generator::number_text`].

use crate::error::InvalidArgument;
use crate::generator::Generator;

/// First house number produced by [`Generator::address`].
const HOUSE_NUMBER_MIN: i32 = 404;
/// Upper bound (exclusive) of house numbers.
const HOUSE_NUMBER_MAX: i32 = 1_804;

impl Generator {
    /// Returns a random first name.
    pub fn first_name(&mut self) -> String {
        self.random.pick_entry(self.names.first_names())
    }

    /// Returns a random last name.
    pub fn last_name(&mut self) -> String {
        self.random.pick_entry(self.names.last_names())
    }

    /// Returns `"<first> <last>"`.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::Generator;
    ///
    /// let mut generator = Generator::from_seed(12);
    /// let name = generator.name();
    /// assert_eq!(name.split(' ').count(), 2);
    /// ```
    pub fn name(&mut self) -> String {
        let first = self.first_name();
        let last = self.last_name();
        format!("{first} {last}")
    }

    /// Returns a random street name.
    pub fn street_name(&mut self) -> String {
        self.random.pick_entry(self.addresses.street_names())
    }

    /// Returns a random street suffix such as `"Road"`.
    pub fn street_suffix(&mut self) -> String {
        self.random.pick_entry(self.addresses.address_suffixes())
    }

    /// Returns a random city.
    pub fn city(&mut self) -> String {
        self.random.pick_entry(self.addresses.cities())
    }

    /// Returns `"<house number> <street name> <street suffix>"`.
    ///
    /// House numbers lie in `[404, 1804)`.
    pub fn address(&mut self) -> String {
        let number = self.random.between(HOUSE_NUMBER_MIN, HOUSE_NUMBER_MAX);
        let street = self.street_name();
        let suffix = self.street_suffix();
        format!("{number} {street} {suffix}")
    }

    /// Returns an apartment or suite line such as `"Apt #100512"`.
    ///
    /// The literal `100` is followed directly by a number in `[0, 1000)`.
    pub fn address_line2(&mut self) -> String {
        let prefix = if self.random.chance(50) {
            "Apt #"
        } else {
            "Suite #"
        };
        let number = self.random.below(1_000);
        format!("{prefix}100{number}")
    }

    /// Returns [`Generator::address_line2`] with `probability` percent
    /// chance, otherwise `default`.
    pub fn address_line2_with(&mut self, probability: i32, default: Option<&str>) -> Option<String> {
        if self.random.chance(probability) {
            Some(self.address_line2())
        } else {
            default.map(ToOwned::to_owned)
        }
    }

    /// Returns `"<city> <business type>"`.
    pub fn business_name(&mut self) -> String {
        let city = self.city();
        let business = self.random.pick_entry(self.content.business_types());
        format!("{city} {business}")
    }

    /// Returns a lowercase email address.
    ///
    /// The local part is either a first initial plus last name or two
    /// dictionary words, occasionally followed by a number below 100.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::Generator;
    ///
    /// let mut generator = Generator::from_seed(31);
    /// let email = generator.email_address();
    ///
    /// assert_eq!(email.matches('@').count(), 1);
    /// assert_eq!(email, email.to_lowercase());
    /// ```
    pub fn email_address(&mut self) -> String {
        let mut local = if self.random.chance(50) {
            let initial: String = self.first_name().chars().take(1).collect();
            initial + &self.last_name()
        } else {
            let first = self.random.pick_entry(self.content.words());
            first + &self.random.pick_entry(self.content.words())
        };
        if self.random.below(100) > 80 {
            local.push_str(&self.random.below(100).to_string());
        }
        let host = self.random.pick_entry(self.content.email_hosts());
        let tld = self.random.pick_entry(self.content.tlds());
        format!("{local}@{host}.{tld}").to_lowercase()
    }

    /// Returns a name suffix with `probability` percent chance.
    pub fn suffix(&mut self, probability: i32) -> Option<String> {
        self.random
            .pick_entry_gated(self.names.suffixes(), probability)
    }

    /// Returns a name prefix with `probability` percent chance.
    pub fn prefix(&mut self, probability: i32) -> Option<String> {
        self.random
            .pick_entry_gated(self.names.prefixes(), probability)
    }

    /// Returns a random country name.
    pub fn country(&mut self) -> String {
        self.random.pick_entry(self.addresses.countries())
    }

    /// Returns a random ISO country code.
    pub fn country_code(&mut self) -> String {
        self.random.pick_entry(self.addresses.country_codes())
    }

    /// Returns a random nationality.
    pub fn nationality(&mut self) -> String {
        self.random.pick_entry(self.addresses.nationalities())
    }

    /// Returns `digits` independent decimal digits; leading zeros are kept.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeDigits`] when `digits` is negative.
    pub fn number_text(&mut self, digits: i32) -> Result<String, InvalidArgument> {
        let count =
            usize::try_from(digits).map_err(|_| InvalidArgument::NegativeDigits { digits })?;
        Ok((0..count)
            .map(|_| self.random.below(10).to_string())
            .collect())
    }
}
