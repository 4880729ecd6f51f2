//! Golden-file harness: compares the transform pipeline's output against
//! a checked-in `.expected` fixture, line by line.

mod common;

use std::path::Path;

#[test]
fn deprecated_sh_matches_expected_rewrite() {
    let lines = common::transform_fixture(Path::new("tests/golden/deprecated.sh"));
    let rewritten: Vec<String> = lines.into_iter().map(|l| l.rewritten).collect();

    let expected = std::fs::read_to_string("tests/golden/deprecated.expected").unwrap();
    let expected_lines: Vec<&str> = expected.lines().collect();

    assert_eq!(rewritten.len(), expected_lines.len());
    for (actual, expected) in rewritten.iter().zip(expected_lines.iter()) {
        assert_eq!(actual, expected);
    }
}
