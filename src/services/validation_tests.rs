use crate::services::validation::{
    normalize_duration, validate_presentations, PresentationInput, ValidationError,
};

fn input(pairs: &[(&str, &str)]) -> Vec<PresentationInput> {
    pairs
        .iter()
        .map(|(s, d)| PresentationInput::new(*s, *d))
        .collect()
}

#[test]
fn test_valid_request_passes() {
    let presentations = input(&[
        ("Architecting Your Codebase", "60"),
        ("Lightning Intro", "lightning"),
        ("Closing Notes", "45"),
    ]);
    assert!(validate_presentations(&presentations).is_ok());
}

#[test]
fn test_empty_list_passes() {
    assert!(validate_presentations(&[]).is_ok());
}

#[test]
fn test_subject_needs_two_non_whitespace_characters() {
    let presentations = input(&[("a", "30")]);
    assert_eq!(
        validate_presentations(&presentations),
        Err(ValidationError::SubjectTooShort)
    );

    let presentations = input(&[("   ", "30")]);
    assert_eq!(
        validate_presentations(&presentations),
        Err(ValidationError::SubjectTooShort)
    );
}

#[test]
fn test_two_non_whitespace_characters_anywhere_pass() {
    // The rule counts non-whitespace characters anywhere in the string,
    // not the trimmed length.
    let presentations = input(&[(" a b ", "30")]);
    assert!(validate_presentations(&presentations).is_ok());
}

#[test]
fn test_empty_duration_rejected() {
    let presentations = input(&[("Valid Subject", "  ")]);
    assert_eq!(
        validate_presentations(&presentations),
        Err(ValidationError::EmptyDuration)
    );
}

#[test]
fn test_malformed_duration_rejected() {
    for token in ["60m", "sixty", "6 0", " 60", "lightning talk", "-5"] {
        let presentations = input(&[("Valid Subject", token)]);
        assert_eq!(
            validate_presentations(&presentations),
            Err(ValidationError::MalformedDuration),
            "token {:?} should be rejected",
            token
        );
    }
}

#[test]
fn test_lightning_is_case_insensitive() {
    for token in ["lightning", "LIGHTNING", "Lightning", "liGHTning"] {
        let presentations = input(&[("Valid Subject", token)]);
        assert!(validate_presentations(&presentations).is_ok());
    }
}

#[test]
fn test_duplicate_subject_rejected_on_trimmed_value() {
    let presentations = input(&[("Talk A", "30"), (" Talk A ", "45")]);
    assert_eq!(
        validate_presentations(&presentations),
        Err(ValidationError::DuplicateSubject("Talk A".to_string()))
    );
}

#[test]
fn test_duration_out_of_range_rejected() {
    for token in ["0", "241", "1000"] {
        let presentations = input(&[("Valid Subject", token)]);
        assert_eq!(
            validate_presentations(&presentations),
            Err(ValidationError::DurationOutOfRange),
            "token {:?} should be out of range",
            token
        );
    }
}

#[test]
fn test_duration_bounds_inclusive() {
    for token in ["1", "240"] {
        let presentations = input(&[("Valid Subject", token)]);
        assert!(validate_presentations(&presentations).is_ok());
    }
}

#[test]
fn test_first_violation_wins() {
    // The second entry has a malformed duration, the third a bad subject;
    // the earlier violation is reported.
    let presentations = input(&[
        ("Valid Subject", "30"),
        ("Another Subject", "abc"),
        ("x", "30"),
    ]);
    assert_eq!(
        validate_presentations(&presentations),
        Err(ValidationError::MalformedDuration)
    );
}

#[test]
fn test_normalize_duration() {
    assert_eq!(normalize_duration("60"), Ok(60));
    assert_eq!(normalize_duration(" 45 "), Ok(45));
    assert_eq!(normalize_duration("lightning"), Ok(5));
    assert_eq!(normalize_duration("LIGHTNING"), Ok(5));
    assert_eq!(
        normalize_duration("abc"),
        Err(ValidationError::MalformedDuration)
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ValidationError::SubjectTooShort.to_string(),
        "The subject must contain at least two non-whitespace characters"
    );
    assert_eq!(
        ValidationError::EmptyDuration.to_string(),
        "Duration cannot be empty"
    );
    assert_eq!(
        ValidationError::MalformedDuration.to_string(),
        "Duration must be a positive integer or 'lightning', 'LIGHTNING', or 'Lightning'"
    );
    assert_eq!(
        ValidationError::DuplicateSubject("Talk A".to_string()).to_string(),
        "Duplicate presentation subject: Talk A"
    );
    assert_eq!(
        ValidationError::DurationOutOfRange.to_string(),
        "Duration must be between 1 and 240 minutes"
    );
}
