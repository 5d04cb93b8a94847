use super::*;

#[test]
fn short_payload_yields_version_one() {
    let m = QrcodeEncoder.encode("hi", EcLevel::L).unwrap();
    assert_eq!(m.size(), 21);
    // Finder corners are dark, the separator next to them is light.
    assert!(m.get(0, 0));
    assert!(m.get(0, 20));
    assert!(m.get(20, 0));
    assert!(!m.get(7, 7));
}

#[test]
fn higher_level_never_shrinks_the_symbol() {
    let data = "https://example.com/some/fairly/long/path?with=query&and=more";
    let low = QrcodeEncoder.encode(data, EcLevel::L).unwrap();
    let high = QrcodeEncoder.encode(data, EcLevel::H).unwrap();
    assert!(high.size() >= low.size());
}

#[test]
fn oversized_payload_surfaces_encoder_error() {
    let data = "x".repeat(8000);
    let err = QrcodeEncoder.encode(&data, EcLevel::H).unwrap_err();
    assert!(matches!(err, QrStyleError::Encoder(_)));
    assert!(err.to_string().starts_with("matrix encoder failed"));
}
