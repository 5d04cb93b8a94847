use super::*;
use crate::compile::plan::compile_plan;
use crate::matrix::adapter::QrMatrix;

fn matrix() -> QrMatrix {
    QrMatrix::from_modules(21, vec![false; 441]).unwrap()
}

fn ops(frame: FrameKind, kind: LayerKind) -> Option<Vec<DrawOp>> {
    let settings = StyleSettings {
        frame,
        ..StyleSettings::default()
    };
    let plan = compile_plan(&matrix(), &settings).unwrap();
    plan.layer(kind).map(|l| l.ops.clone())
}

#[test]
fn no_frame_means_no_frame_layers() {
    assert!(ops(FrameKind::None, LayerKind::FrameUnderlay).is_none());
    assert!(ops(FrameKind::None, LayerKind::FrameOverlay).is_none());
}

#[test]
fn border_is_a_single_stroke() {
    assert!(ops(FrameKind::Border, LayerKind::FrameUnderlay).is_none());
    let overlay = ops(FrameKind::Border, LayerKind::FrameOverlay).unwrap();
    assert!(matches!(overlay[..], [DrawOp::StrokePath { width, .. }] if width == 8.0));
}

#[test]
fn badge_has_shell_band_and_caption() {
    let underlay = ops(FrameKind::Badge, LayerKind::FrameUnderlay).unwrap();
    assert_eq!(underlay.len(), 1);
    let overlay = ops(FrameKind::Badge, LayerKind::FrameOverlay).unwrap();
    assert_eq!(overlay.len(), 2);
    let DrawOp::Text {
        text,
        position,
        color,
        ..
    } = &overlay[1]
    else {
        panic!("caption missing");
    };
    assert_eq!(text, "SCAN ME");
    // Canvas 290 + 140.
    assert_eq!(position.x, 215.0);
    assert_eq!(*color, Color::WHITE);
}

#[test]
fn badge_without_caption_keeps_band() {
    let settings = StyleSettings {
        frame: FrameKind::Badge,
        frame_text: "   ".to_owned(),
        ..StyleSettings::default()
    };
    let plan = compile_plan(&matrix(), &settings).unwrap();
    let overlay = plan.layer(LayerKind::FrameOverlay).unwrap();
    assert_eq!(overlay.ops.len(), 1);
}

#[test]
fn phone_notch_stays_above_the_code() {
    use kurbo::Shape;
    let settings = StyleSettings {
        frame: FrameKind::Phone,
        margin_size: 0,
        ..StyleSettings::default()
    };
    let plan = compile_plan(&matrix(), &settings).unwrap();
    let overlay = plan.layer(LayerKind::FrameOverlay).unwrap();
    let DrawOp::FillPath { path, .. } = &overlay.ops[0] else {
        panic!("notch is not a fill");
    };
    assert!(path.bounding_box().y1 <= plan.content_offset.y);
}

#[test]
fn opacities_are_clamped() {
    let settings = StyleSettings {
        bg_image: Some("bg.png".to_owned()),
        bg_opacity: 3.0,
        logo_enabled: true,
        logo_url: Some("logo.png".to_owned()),
        logo_opacity: -1.0,
        ..StyleSettings::default()
    };
    let plan = compile_plan(&matrix(), &settings).unwrap();
    let bg = plan.layer(LayerKind::BackgroundImage).unwrap();
    assert!(matches!(bg.ops[..], [DrawOp::Image { opacity, .. }] if opacity == 1.0));
    let logo = plan.layer(LayerKind::Logo).unwrap();
    assert!(matches!(logo.ops[1], DrawOp::Image { opacity, .. } if opacity == 0.0));
}

#[test]
fn frame_shells_leave_the_background_image_visible() {
    use kurbo::Shape;
    for frame in [FrameKind::Badge, FrameKind::Phone] {
        let settings = StyleSettings {
            frame,
            bg_image: Some("bg.png".to_owned()),
            ..StyleSettings::default()
        };
        let plan = compile_plan(&matrix(), &settings).unwrap();
        let bg = plan.layer(LayerKind::BackgroundImage).unwrap();
        let DrawOp::Image { rect, .. } = &bg.ops[0] else {
            panic!("background is not an image");
        };
        let underlay = plan.layer(LayerKind::FrameUnderlay).unwrap();
        let [DrawOp::FillPath { path, rule, .. }] = &underlay.ops[..] else {
            panic!("{frame:?} shell is not a single fill");
        };
        assert_eq!(*rule, FillRule::EvenOdd, "{frame:?}");
        // Shell paints its rim but not the window over the code.
        assert_eq!(path.winding(Point::new(5.0, rect.center().y)).abs(), 1, "{frame:?}");
        assert_eq!(path.winding(plan.content_offset.to_point()) % 2, 0, "{frame:?}");
        assert_eq!(path.winding(rect.center()) % 2, 0, "{frame:?}");
    }
}
