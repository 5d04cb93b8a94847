use super::*;

#[test]
fn solid_when_gradient_disabled() {
    let s = StyleSettings {
        foreground_color: Color::rgb(10, 20, 30),
        ..StyleSettings::default()
    };
    let fills = resolve_fills(&s);
    assert_eq!(fills.main, Fill::solid(Color::rgb(10, 20, 30)));
    assert!(fills.gradient.is_none());
    for corner in Corner::ALL {
        assert_eq!(fills.eye(corner), &fills.main);
    }
}

#[test]
fn gradient_reference_shared_by_fallthrough_eyes() {
    let s = StyleSettings {
        use_gradient: true,
        gradient_direction: GradientDirection::Deg45,
        eye_color_bl: Some(Color::rgb(9, 9, 9)),
        ..StyleSettings::default()
    };
    let fills = resolve_fills(&s);
    let gradient = fills.gradient.as_ref().unwrap();
    assert_eq!(gradient.id, MAIN_GRADIENT_ID);
    assert_eq!(gradient.stops.len(), 2);
    assert_eq!(gradient.stops[0].color, s.gradient_start);
    assert_eq!(gradient.stops[1].color, s.gradient_end);
    assert_eq!(
        fills.main,
        Fill::Gradient {
            id: MAIN_GRADIENT_ID.to_owned()
        }
    );
    assert_eq!(fills.eye(Corner::TopLeft), &fills.main);
    assert_eq!(fills.eye(Corner::TopRight), &fills.main);
    assert_eq!(fills.eye(Corner::BottomLeft), &Fill::solid(Color::rgb(9, 9, 9)));
}

#[test]
fn direction_presets_map_exactly() {
    let cases = [
        (GradientDirection::Deg0, (0.0, 0.0), (100.0, 0.0)),
        (GradientDirection::Deg45, (0.0, 100.0), (100.0, 0.0)),
        (GradientDirection::Deg90, (0.0, 100.0), (0.0, 0.0)),
        (GradientDirection::Deg135, (0.0, 0.0), (100.0, 100.0)),
    ];
    for (dir, start, end) in cases {
        assert_eq!(dir.vector(), (Point::from(start), Point::from(end)), "{dir:?}");
    }
    let (start, end) = GradientDirection::Deg90.vector();
    assert_eq!(start.x, end.x);
    assert!(end.y < start.y);
}

#[test]
fn eye_cascade_precedence() {
    let main = Fill::solid(Color::BLACK);
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);
    assert_eq!(resolve_eye_fill(Some(red), Some(blue), &main), Fill::solid(red));
    assert_eq!(resolve_eye_fill(None, Some(blue), &main), Fill::solid(blue));
    assert_eq!(resolve_eye_fill(None, None, &main), main);
}

#[test]
fn fill_serializes_with_kind_tag() {
    let v = serde_json::to_value(Fill::solid(Color::rgb(255, 0, 0))).unwrap();
    assert_eq!(v, serde_json::json!({"kind": "solid", "color": "#ff0000"}));
}
