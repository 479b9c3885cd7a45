use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PrintframeError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        PrintframeError::precondition("x")
            .to_string()
            .contains("precondition not met:")
    );
    assert!(
        PrintframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PrintframeError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        PrintframeError::storage("x")
            .to_string()
            .contains("storage error:")
    );
    assert!(
        PrintframeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn kind_matches_variant() {
    assert_eq!(PrintframeError::decode("x").kind(), ErrorKind::Decode);
    assert_eq!(
        PrintframeError::precondition("x").kind(),
        ErrorKind::PreconditionNotMet
    );
    assert_eq!(PrintframeError::validation("x").kind(), ErrorKind::Validation);
    assert_eq!(PrintframeError::storage("x").kind(), ErrorKind::Storage);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PrintframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}
