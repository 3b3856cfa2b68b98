use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TimelineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TimelineError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        TimelineError::scroll("x")
            .to_string()
            .contains("scroll error:")
    );
    assert!(
        TimelineError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TimelineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
