//! Integration tests for loading vocabulary tables from disk.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

mod test_support;

use std::path::Path;

use camino::Utf8PathBuf;
use data_factory::{
    ADDRESSES_FILE, AddressData, CONTENT_FILE, ContentData, Generator, NAMES_FILE, NameData,
    VocabularyError, VocabularySet, VocabularyTable,
};
use rstest::{fixture, rstest};
use test_support::{unique_temp_dir, write_file};

const CONTENT_JSON: &str = r#"{
    "words": ["ember", "quartz", "a", "I"],
    "businessTypes": ["Foundry"],
    "emailHosts": ["smelter"],
    "tlds": ["io"]
}"#;

#[fixture]
fn vocabulary_dir() -> Utf8PathBuf {
    unique_temp_dir("vocabulary").expect("create temp dir")
}

#[rstest]
fn empty_directory_yields_defaults(vocabulary_dir: Utf8PathBuf) {
    let set = VocabularySet::load_dir(vocabulary_dir.as_std_path()).expect("load defaults");
    assert_eq!(set, VocabularySet::default());
}

#[rstest]
fn present_tables_replace_defaults(vocabulary_dir: Utf8PathBuf) {
    write_file(&vocabulary_dir, CONTENT_FILE, CONTENT_JSON).expect("write content");

    let set = VocabularySet::load_dir(vocabulary_dir.as_std_path()).expect("load vocabulary");

    assert_eq!(set.content.business_types(), ["Foundry"]);
    assert_eq!(set.names, NameData::default());
    assert_eq!(set.addresses, AddressData::default());
}

#[rstest]
fn loaded_tables_drive_generation(vocabulary_dir: Utf8PathBuf) {
    write_file(&vocabulary_dir, CONTENT_FILE, CONTENT_JSON).expect("write content");
    let set = VocabularySet::load_dir(vocabulary_dir.as_std_path()).expect("load vocabulary");
    let mut generator = Generator::from_seed(73_438);

    generator.set_vocabulary(set);

    let business = generator.business_name();
    assert!(business.ends_with(" Foundry"), "unexpected business {business}");
    let email = generator.email_address();
    assert!(email.ends_with("@smelter.io"), "unexpected email {email}");
}

#[rstest]
#[case::names(NAMES_FILE)]
#[case::addresses(ADDRESSES_FILE)]
#[case::content(CONTENT_FILE)]
fn malformed_files_are_reported(vocabulary_dir: Utf8PathBuf, #[case] file_name: &str) {
    write_file(&vocabulary_dir, file_name, "not json").expect("write file");

    let err = VocabularySet::load_dir(vocabulary_dir.as_std_path()).expect_err("malformed file");

    assert!(matches!(err, VocabularyError::ParseError { .. }), "{err:?}");
}

#[rstest]
fn blank_entries_are_rejected(vocabulary_dir: Utf8PathBuf) {
    let json = r#"{
        "words": ["ember", " "],
        "businessTypes": ["Foundry"],
        "emailHosts": ["smelter"],
        "tlds": ["io"]
    }"#;
    write_file(&vocabulary_dir, CONTENT_FILE, json).expect("write content");

    let err = ContentData::from_file(vocabulary_dir.join(CONTENT_FILE).as_std_path())
        .expect_err("blank entry");

    assert_eq!(
        err,
        VocabularyError::InvalidEntry {
            category: "words",
            index: 1,
            value: " ".to_owned(),
        }
    );
}

#[test]
fn missing_file_reports_io_error() {
    let err = NameData::from_file(Path::new("target/data-factory-tests/absent/names.json"))
        .expect_err("missing file");
    assert!(matches!(err, VocabularyError::IoError { .. }));
}
