//! Fixture generation settings loaded via `OrthoConfig`.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration for the fixture generator binary.
///
/// Values come from `DATA_FACTORY_*` environment variables, configuration
/// files and command-line flags, in the usual `OrthoConfig` precedence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DATA_FACTORY")]
pub struct FixtureSettings {
    /// Seed for the random source; defaults to the legacy seed.
    #[ortho_config(default = 93_285)]
    pub seed: u64,
    /// Number of records to generate.
    #[ortho_config(default = 10)]
    pub count: usize,
    /// Directory holding replacement vocabulary files.
    pub vocabulary_dir: Option<PathBuf>,
}

impl FixtureSettings {
    /// Return the vocabulary directory, if one was configured.
    #[must_use]
    pub fn vocabulary_dir(&self) -> Option<&Path> {
        self.vocabulary_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for fixture settings parsing.

    use super::*;
    use std::ffi::OsString;

    use crate::random::LEGACY_SEED;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> FixtureSettings {
        FixtureSettings::load_from_iter([OsString::from("data-factory-fixtures")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("DATA_FACTORY_SEED", None::<String>),
            ("DATA_FACTORY_COUNT", None::<String>),
            ("DATA_FACTORY_VOCABULARY_DIR", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.seed, LEGACY_SEED);
        assert_eq!(settings.count, 10);
        assert!(settings.vocabulary_dir().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DATA_FACTORY_SEED", Some("73438".to_owned())),
            ("DATA_FACTORY_COUNT", Some("4".to_owned())),
            (
                "DATA_FACTORY_VOCABULARY_DIR",
                Some("/tmp/vocabulary".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.seed, 73_438);
        assert_eq!(settings.count, 4);
        assert_eq!(
            settings.vocabulary_dir(),
            Some(Path::new("/tmp/vocabulary"))
        );
    }

    #[rstest]
    fn flags_override_defaults() {
        let _guard = lock_env([
            ("DATA_FACTORY_SEED", None::<String>),
            ("DATA_FACTORY_COUNT", None::<String>),
            ("DATA_FACTORY_VOCABULARY_DIR", None::<String>),
        ]);

        let settings = FixtureSettings::load_from_iter([
            OsString::from("data-factory-fixtures"),
            OsString::from("--count"),
            OsString::from("3"),
        ])
        .expect("config should load");

        assert_eq!(settings.count, 3);
        assert_eq!(settings.seed, LEGACY_SEED);
    }
}
