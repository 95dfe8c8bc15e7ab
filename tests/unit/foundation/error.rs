use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RubricError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RubricError::aggregation("x")
            .to_string()
            .contains("aggregation error:")
    );
    assert!(
        RubricError::render("x")
            .to_string()
            .contains("chart render error:")
    );
    assert!(
        RubricError::encode("x")
            .to_string()
            .contains("document encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RubricError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
