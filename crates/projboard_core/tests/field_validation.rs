use projboard_core::{validate, Validatable};

#[test]
fn min_length_is_exclusive() {
    let exact = Validatable::text("abcde").min_length(5);
    let longer = Validatable::text("abcdef").min_length(5);

    assert!(!validate(&exact));
    assert!(validate(&longer));
}

#[test]
fn max_length_is_exclusive() {
    assert!(!validate(&Validatable::text("abcde").max_length(5)));
    assert!(validate(&Validatable::text("abcd").max_length(5)));
}

#[test]
fn numeric_bounds_are_exclusive() {
    let rules = |value: f64| Validatable::number(value).min(1.0).max(5.0);

    assert!(!validate(&rules(1.0)));
    assert!(validate(&rules(2.0)));
    assert!(validate(&rules(4.0)));
    assert!(!validate(&rules(5.0)));
}

#[test]
fn numeric_constraints_skip_text_values() {
    let rules = Validatable::text("hello").min(10.0).max(0.0);
    assert!(validate(&rules));
}

#[test]
fn length_constraints_skip_number_values() {
    let rules = Validatable::number(3.0).min_length(10).max_length(0);
    assert!(validate(&rules));
}

#[test]
fn required_rejects_blank_text() {
    assert!(!validate(&Validatable::text("").required()));
    assert!(!validate(&Validatable::text("  ").required()));
    assert!(validate(&Validatable::text("Build API").required()));
}

#[test]
fn every_present_constraint_must_pass() {
    let rules = Validatable::text("short").required().min_length(2).max_length(5);
    assert!(!validate(&rules));
}
