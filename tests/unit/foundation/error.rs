use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LifereelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LifereelError::input_missing("x")
            .to_string()
            .contains("missing input:")
    );
    assert!(
        LifereelError::not_found("x")
            .to_string()
            .contains("not found:")
    );
    assert!(
        LifereelError::upstream("x")
            .to_string()
            .contains("upstream error:")
    );
}

#[test]
fn not_found_is_distinct_from_input_missing() {
    let a = LifereelError::not_found("story '42'");
    let b = LifereelError::input_missing("story id");
    assert!(matches!(a, LifereelError::NotFound(_)));
    assert!(matches!(b, LifereelError::InputMissing(_)));
    assert_ne!(a.to_string(), b.to_string());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LifereelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
