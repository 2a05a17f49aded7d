use super::*;

#[test]
fn test_identical_names_match() {
    assert!(similar("widget", "widget"));
    assert!(similar("", ""));
}

#[test]
fn test_unrelated_names_do_not_match() {
    assert!(!similar("widget", "backend"));
    assert!(!similar("abc", "xyz"));
}

#[test]
fn test_threshold_is_strict() {
    // One edit across four characters is a ratio of exactly 75.
    assert!(!similar("abcd", "abcx"));
    // One edit across five characters is 80, just over the line.
    assert!(similar("abcde", "abcdx"));
}

#[test]
fn test_matching_is_case_sensitive() {
    assert!(!similar("MyApp", "myapp"));
}

#[test]
fn test_tolerates_punctuation_drift() {
    assert!(similar("my-project", "my_project"));
    assert!(similar("widget", "widgets"));
}

#[test]
fn test_ratio_scale() {
    assert!((ratio("abcd", "abcd") - 100.0).abs() < f64::EPSILON);
    assert!((ratio("abcd", "abcx") - 75.0).abs() < f64::EPSILON);
    assert!(ratio("abcd", "wxyz") < 1.0);
}
