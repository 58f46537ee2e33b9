//! Integration tests for fixture generation with vocabulary directories.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

mod test_support;

use camino::{Utf8Path, Utf8PathBuf};
use data_factory::fixture_cli::{FixtureError, build_generator, run};
use data_factory::{FixtureSettings, NAMES_FILE, VocabularyError};
use rstest::{fixture, rstest};
use test_support::{unique_temp_dir, write_file};

const NAMES_JSON: &str = r#"{
    "firstNames": ["Grace"],
    "lastNames": ["Hopper"],
    "suffixes": ["PhD"],
    "prefixes": ["Rear Admiral"]
}"#;

#[fixture]
fn vocabulary_dir() -> Utf8PathBuf {
    unique_temp_dir("fixture-cli").expect("create temp dir")
}

fn settings(count: usize, dir: &Utf8Path) -> FixtureSettings {
    FixtureSettings {
        seed: 1,
        count,
        vocabulary_dir: Some(dir.as_std_path().to_path_buf()),
    }
}

#[rstest]
fn vocabulary_dir_replaces_present_tables(vocabulary_dir: Utf8PathBuf) {
    write_file(&vocabulary_dir, NAMES_FILE, NAMES_JSON).expect("write names");

    let mut generator = build_generator(&settings(0, &vocabulary_dir)).expect("generator built");

    assert_eq!(generator.name(), "Grace Hopper");
    assert!(!generator.content_data().words().is_empty());
}

#[rstest]
fn run_uses_the_replacement_names(vocabulary_dir: Utf8PathBuf) {
    write_file(&vocabulary_dir, NAMES_FILE, NAMES_JSON).expect("write names");

    let lines = run(&settings(3, &vocabulary_dir)).expect("fixtures generated");

    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.contains("\"name\":\"Grace Hopper\"")));
}

#[rstest]
fn invalid_vocabulary_file_is_reported(vocabulary_dir: Utf8PathBuf) {
    write_file(
        &vocabulary_dir,
        NAMES_FILE,
        r#"{"firstNames": [], "lastNames": ["Hopper"], "suffixes": ["PhD"], "prefixes": ["Dr"]}"#,
    )
    .expect("write names");

    let err = run(&settings(1, &vocabulary_dir)).expect_err("invalid vocabulary");

    assert_eq!(
        err,
        FixtureError::Vocabulary {
            source: VocabularyError::EmptyCategory {
                category: "firstNames"
            }
        }
    );
}
