use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MaskError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MaskError::decode("x").to_string().contains("decode error:"));
    assert!(MaskError::encode("x").to_string().contains("encode error:"));
    assert!(
        MaskError::service("quota exceeded")
            .to_string()
            .contains("generation service error: quota exceeded")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MaskError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
