//! Unit tests for the fixture generation helpers.

use rstest::rstest;

use super::*;
use crate::fixtures::generate_people;

const fn settings(seed: u64, count: usize) -> FixtureSettings {
    FixtureSettings {
        seed,
        count,
        vocabulary_dir: None,
    }
}

#[rstest]
#[case(0)]
#[case(3)]
fn run_emits_one_line_per_fixture(#[case] count: usize) {
    let lines = run(&settings(11, count)).expect("fixtures generated");
    assert_eq!(lines.len(), count);
}

#[test]
fn run_matches_library_generation() {
    let lines = run(&settings(11, 4)).expect("fixtures generated");
    let decoded: Vec<PersonFixture> = lines
        .iter()
        .map(|line| serde_json::from_str(line).expect("valid json line"))
        .collect();
    assert_eq!(decoded, generate_people(11, 4));
}

#[test]
fn write_lines_terminates_each_line() {
    let mut out = Vec::new();
    let lines = vec!["{\"a\":1}".to_owned(), "{\"b\":2}".to_owned()];

    write_lines(&mut out, &lines).expect("write succeeds");

    assert_eq!(String::from_utf8(out).expect("utf8"), "{\"a\":1}\n{\"b\":2}\n");
}

#[test]
fn default_vocabulary_is_used_without_a_directory() {
    let generator = build_generator(&settings(3, 0)).expect("generator built");
    assert_eq!(generator.seed(), 3);
    assert_eq!(generator.name_data(), &crate::vocabulary::NameData::default());
}

#[test]
fn errors_describe_their_cause() {
    let err = FixtureError::Config {
        message: "bad flag".to_owned(),
    };
    assert_eq!(err.to_string(), "configuration error: bad flag");
}
