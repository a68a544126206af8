use std::fs::{self};

use minicalc::get_result;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for code in extract_calc_blocks(&content) {
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                let (source, expected) = line.split_once("=>")
                                             .unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));
                let expected = expected.trim();
                match (get_result(source), expected) {
                    (Err(_), "error") => {},
                    (Ok(value), expected) if expected.parse::<i64>().ok() == Some(value) => {},
                    (result, expected) => panic!("Example in {path:?} failed:\n{source}\nExpected \
                                                  {expected}, got {result:?}"),
                }
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_result(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = get_result(src) {
        panic!("Expression {src} evaluated to {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("1 + 2", 3);
    assert_result("7 * 9", 63);
    assert_result("8 - 5", 3);
    assert_result("10 / 2", 5);
    assert_result("42", 42);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_result("2+3*4", 14);
    assert_result("(2+3)*4", 20);
    assert_result("2*3+4", 10);
    assert_result("8-6/2", 5);
}

#[test]
fn operators_are_left_associative() {
    assert_result("10-3-2", 5);
    assert_result("20/4/5", 1);
    assert_result("2*6/4", 3);
    assert_result("1-2+3", 2);
}

#[test]
fn wrapping_in_parentheses_keeps_the_value() {
    for source in ["1+2*3", "10-3-2", "20/4/5", "(1+2)*(3+4)", "7"] {
        let plain = get_result(source).unwrap();
        assert_eq!(get_result(&format!("({source})")).unwrap(), plain);
        assert_eq!(get_result(&format!("(({source}))")).unwrap(), plain);
    }
}

#[test]
fn whitespace_is_ignored() {
    assert_result("  1\t+\n2  ", 3);
    assert_result("( 4 )*( 5 )", 20);
}

#[test]
fn division_truncates_toward_zero() {
    assert_result("7/2", 3);
    assert_result("(0-7)/2", -3);
    assert_result("7/(0-2)", -3);
}

#[test]
fn malformed_input_fails() {
    assert_failure("2+$3");
    assert_failure("(2+3");
    assert_failure("2+");
    assert_failure("");
    assert_failure("-1");
    assert_failure("1 2");
    assert_failure("2)");
}

#[test]
fn failed_evaluations() {
    assert_failure("5/0");
    assert_failure("9223372036854775807+1");
    assert_failure("(0-9223372036854775807-1)/(0-1)");
}

#[test]
fn failures_do_not_affect_later_evaluations() {
    assert_failure("5/0");
    assert_result("5/1", 5);
}
