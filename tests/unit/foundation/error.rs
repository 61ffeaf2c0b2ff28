use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayoutError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        LayoutError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        LayoutError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn border_messages_differ_but_share_a_kind() {
    let small = LayoutError::ConstraintViolation {
        axis: Axis::Width,
        border_mm: 50.0,
        limit_mm: 301.0,
        bound: BorderBound::BelowMinimum,
    };
    let large = LayoutError::ConstraintViolation {
        axis: Axis::Length,
        border_mm: 650.0,
        limit_mm: 600.0,
        bound: BorderBound::AboveMaximum,
    };

    let small_msg = small.to_string();
    let large_msg = large.to_string();
    assert!(small_msg.contains("50.0mm"));
    assert!(small_msg.contains("increase the room width"));
    assert!(large_msg.contains("650.0mm"));
    assert!(large_msg.contains("decrease the room length"));
    assert_eq!(small.kind(), ErrorKind::ConstraintViolation);
    assert_eq!(large.kind(), ErrorKind::ConstraintViolation);
}

#[test]
fn unsupported_module_names_the_module() {
    let err = LayoutError::UnsupportedModule {
        width_mm: 500.0,
        length_mm: 500.0,
    };
    assert_eq!(err.kind(), ErrorKind::UnsupportedModule);
    assert!(err.to_string().contains("500x500"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayoutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}
