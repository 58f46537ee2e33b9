//! Fixture generation behind the `data-factory-fixtures` binary.
//!
//! The binary only loads settings and installs logging; generation and
//! encoding live here so they can be exercised without spawning a process.

mod error;

use std::io::Write;

use tracing::info;

use crate::config::FixtureSettings;
use crate::fixtures::{PersonFixture, generate_people_with};
use crate::generator::Generator;
use crate::vocabulary::VocabularySet;

pub use error::FixtureError;

/// Builds the generator described by `settings`.
///
/// # Errors
///
/// Returns [`FixtureError::Vocabulary`] when the configured vocabulary
/// directory holds an unreadable or invalid table.
pub fn build_generator(settings: &FixtureSettings) -> Result<Generator, FixtureError> {
    let mut generator = Generator::from_seed(settings.seed);
    if let Some(dir) = settings.vocabulary_dir() {
        generator.set_vocabulary(VocabularySet::load_dir(dir)?);
    }
    Ok(generator)
}

/// Generates the configured fixtures and encodes each as one JSON line.
///
/// # Errors
///
/// Returns [`FixtureError`] when the vocabulary cannot be loaded or a
/// record cannot be encoded.
///
/// # Example
///
/// ```
/// use data_factory::FixtureSettings;
/// use data_factory::fixture_cli::run;
///
/// let settings = FixtureSettings {
///     seed: 7,
///     count: 2,
///     vocabulary_dir: None,
/// };
///
/// let lines = run(&settings).expect("fixtures generated");
/// assert_eq!(lines.len(), 2);
/// assert!(lines.iter().all(|line| line.starts_with('{')));
/// ```
pub fn run(settings: &FixtureSettings) -> Result<Vec<String>, FixtureError> {
    let mut generator = build_generator(settings)?;
    let people = generate_people_with(&mut generator, settings.count);
    info!(
        seed = settings.seed,
        count = people.len(),
        "generated person fixtures"
    );
    people.iter().map(encode).collect()
}

fn encode(person: &PersonFixture) -> Result<String, FixtureError> {
    serde_json::to_string(person).map_err(|e| FixtureError::Serialize {
        message: e.to_string(),
    })
}

/// Writes `lines` to `out`, one per line.
///
/// # Errors
///
/// Returns [`FixtureError::Output`] when the writer fails.
pub fn write_lines(mut out: impl Write, lines: &[String]) -> Result<(), FixtureError> {
    lines
        .iter()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|()| out.flush())
        .map_err(|e| FixtureError::Output {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests;
