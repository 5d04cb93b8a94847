use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        QrStyleError::invalid_matrix("x")
            .to_string()
            .contains("invalid matrix:")
    );
    assert!(
        QrStyleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        QrStyleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_setting_names_field_and_value() {
    let msg = QrStyleError::invalid_setting("dotStyle", "blob").to_string();
    assert!(msg.contains("`dotStyle`"));
    assert!(msg.contains("\"blob\""));
}

#[test]
fn logo_too_large_reports_percentages() {
    let err = QrStyleError::LogoTooLarge {
        covered: 0.125,
        limit: 0.07,
    };
    let msg = err.to_string();
    assert!(msg.contains("12.5%"), "{msg}");
    assert!(msg.contains("7.0%"), "{msg}");
}

#[test]
fn encoder_preserves_source() {
    let err = QrStyleError::encoder(std::io::Error::other("data too long"));
    let source = std::error::Error::source(&err).expect("source");
    assert_eq!(source.to_string(), "data too long");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = QrStyleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
