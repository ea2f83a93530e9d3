//! Integration tests for the assertion helpers and facade functions
//!
//! Messages are matched the way editor tooling reads them: `file:line:`
//! followed by the message, with continuation lines tab-indented.

use std::sync::Arc;

use regex::Regex;
use testy::{Handle, Harness, Nil, TestContext};

fn mock() -> (Arc<Harness>, Handle) {
    let host = Arc::new(Harness::new());
    let is = Handle::new(host.clone());
    (host, is)
}

fn assert_matches_entry(pattern: &str, entry: &str) {
    let re = Regex::new(pattern).unwrap();
    assert!(re.is_match(entry), "entry {entry:?} does not match {pattern:?}");
}

#[test]
fn test_helpers() {
    let (_host, test) = mock();
    let nil_slice: Option<&[u8]> = None;
    let a_nil: *const i32 = std::ptr::null();
    let an_error: Option<std::io::Error> = Some(std::io::Error::other("an error"));
    let no_error: Option<std::io::Error> = None;

    // not failures
    test.expect_true(true);
    test.expect_false(false);
    test.expect_not_nil(Some(&test));
    test.expect_nil(a_nil);
    test.expect_nil(nil_slice);
    test.expect_nil(&no_error);
    test.expect_not_nil(&an_error);

    // failures, one per line from here
    let first = line!() + 1;
    test.expect_true(false);
    test.expect_false(true);
    test.expect_eq(1, 2);
    test.expect_ne("foo", "foo");
    test.expect_ne(true, true);
    test.expect_nil(Some(&test));
    test.expect_not_nil(a_nil);
    test.expect_eq(test.case_name(), Nil);
    test.expect_eq(Nil, test.case_name());
    test.expect_ne(nil_slice, Nil);
    test.expect_ne(Nil, nil_slice);
    test.expect_nil(&an_error);
    test.expect_not_nil(&no_error);

    assert_eq!(test.fail_count(), 13, "incorrect fail count");

    let output = test.output();
    let at = |offset: u32| format!("helpers.rs:{}: ", first + offset);

    assert_matches_entry(&format!("{}Expression was not true", at(0)), &output[0]);
    assert_matches_entry(&format!("{}Expression was not false", at(1)), &output[1]);
    assert_matches_entry(&format!("{}Values were not equal", at(2)), &output[2]);
    assert_matches_entry(r"(?m)^\s+Got: 1 \(i32\)", &output[2]);
    assert_matches_entry(r"(?m)^\s+Wanted: 2 \(i32\)", &output[2]);
    assert_matches_entry(&format!("{}Values were not unequal", at(3)), &output[3]);
    assert_matches_entry(r#"(?m)^\s+Both: "foo""#, &output[3]);
    assert_matches_entry(&format!("{}Values were not unequal", at(4)), &output[4]);
    assert_matches_entry(r"(?m)^\s+Both: true", &output[4]);
    assert_matches_entry(&format!("{}Expression was not nil", at(5)), &output[5]);
    assert_matches_entry(&format!("{}Expression was nil", at(6)), &output[6]);
    for (index, offset) in [(7, 7), (8, 8), (9, 9), (10, 10)] {
        assert_matches_entry(
            &format!("{}Can't safely compare nil values for equality", at(offset)),
            &output[index],
        );
    }
    assert_matches_entry(&format!("{}Expression was not nil", at(11)), &output[11]);
    assert_matches_entry(&format!("{}Expression was nil", at(12)), &output[12]);
}

#[test]
fn test_fail() {
    let (host, test) = mock();

    assert_eq!(test.fail_count(), 0, "fail count didn't start at zero");

    test.fail();

    assert!(test.failed(), "fail() not recorded in facade");
    assert!(host.failed(), "fail() not recorded in test object");
    assert!(test.output().is_empty());
}

#[test]
fn test_error() {
    let (host, test) = mock();

    test.error(["one", "two"]);

    assert!(test.failed(), "error() not recorded in facade");
    assert!(host.failed(), "error() not recorded in test object");
    assert_matches_entry(r"helpers\.rs:\d+: one two", &test.output()[0]);
}

#[test]
fn test_errorf() {
    let (host, test) = mock();

    test.errorf(format_args!("{} {}", "three", 4));

    assert!(test.failed(), "errorf() not recorded in facade");
    assert!(host.failed(), "errorf() not recorded in test object");
    assert_matches_entry(r"helpers\.rs:\d+: three 4", &test.output()[0]);
}

#[test]
fn test_logging() {
    let host = Arc::new(Harness::new());
    let test = Handle::new_case(host, "Logging test");

    test.log(["one", "two"]);
    test.logf(format_args!("{} {}", "three", 4));
    let log = test.done();

    // all tests pass case
    assert_matches_entry(r"^Logging test: all tests passed", &log);
    assert_matches_entry(r"helpers\.rs:\d+: one two", &log);
    assert_matches_entry(r"helpers\.rs:\d+: three 4", &log);

    // 1 test fails case
    test.error(["inject error"]);
    assert_matches_entry(r"^Logging test: 1 test failed", &test.done());

    // 2 tests fail case
    test.error(["inject error"]);
    assert_matches_entry(r"^Logging test: 2 tests failed", &test.done());
}

#[test]
#[cfg_attr(not(debug_assertions), ignore = "frame walking needs debug info")]
fn test_new_names_case_after_caller() {
    let (_, test) = mock();
    // mock() is the function that called Handle::new
    assert_eq!(test.case_name(), "mock");

    let direct = Handle::new(Arc::new(Harness::new()));
    assert_eq!(direct.case_name(), "test_new_names_case_after_caller");
}

#[test]
fn test_output_snapshots_are_independent() {
    let (_, test) = mock();
    test.log(["entry"]);

    let mut first = test.output();
    let second = test.output();
    assert_eq!(first, second);

    first.clear();
    assert_eq!(test.output(), second);
}

#[test]
fn test_multi_line_messages_keep_alignment() {
    let (_, test) = mock();
    let line = line!() + 1;
    test.log(["first\nsecond\n"]);

    assert_eq!(test.output()[0], format!("helpers.rs:{line}: first\n\tsecond"));
}
