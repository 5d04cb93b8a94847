use super::*;
use serde_json::json;

#[test]
fn parses_hex_variants() {
    assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(Color::parse("#0F0").unwrap(), Color::rgb(0, 255, 0));
    assert_eq!(
        Color::parse("#0000ff80").unwrap(),
        Color::rgba(0, 0, 255, 128)
    );
    assert_eq!(Color::parse("4f46e5").unwrap(), Color::rgb(0x4f, 0x46, 0xe5));
}

#[test]
fn parses_css_functions_and_names() {
    assert_eq!(
        Color::parse("rgb(10, 20, 30)").unwrap(),
        Color::rgb(10, 20, 30)
    );
    assert_eq!(
        Color::parse("RGBA(10,20,30,0.5)").unwrap(),
        Color::rgba(10, 20, 30, 128)
    );
    assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
    assert_eq!(Color::parse("transparent").unwrap().a, 0);
}

#[test]
fn rejects_malformed_strings() {
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("#gg0000").is_err());
    assert!(Color::parse("rgb(1,2)").is_err());
    assert!(Color::parse("not a color").is_err());
}

#[test]
fn deserializes_object_and_array_forms() {
    let c: Color = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Color::rgb(1, 2, 3));
    let c: Color = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(c, Color::rgba(1, 2, 3, 4));
    assert!(serde_json::from_value::<Color>(json!([1, 2])).is_err());
}

#[test]
fn serializes_as_hex() {
    assert_eq!(
        serde_json::to_value(Color::rgb(0x12, 0xab, 0xef)).unwrap(),
        json!("#12abef")
    );
    assert_eq!(
        serde_json::to_value(Color::rgba(0, 0, 0, 0x80)).unwrap(),
        json!("#00000080")
    );
}

#[test]
fn opacity_maps_alpha() {
    assert_eq!(Color::WHITE.opacity(), 1.0);
    assert_eq!(Color::rgba(0, 0, 0, 0).opacity(), 0.0);
}
