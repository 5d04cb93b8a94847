use super::*;
use crate::compile::plan::compile_plan;
use crate::matrix::adapter::QrMatrix;
use crate::style::settings::{DotStyle, StyleSettings};

fn plan_for(settings: &StyleSettings) -> RenderPlan {
    let m = QrMatrix::from_modules(21, vec![true; 441]).unwrap();
    compile_plan(&m, settings).unwrap()
}

#[test]
fn stable_for_equal_plans() {
    let s = StyleSettings::default();
    assert_eq!(fingerprint_plan(&plan_for(&s)), fingerprint_plan(&plan_for(&s)));
}

#[test]
fn style_changes_move_the_hash() {
    let base = fingerprint_plan(&plan_for(&StyleSettings::default()));
    let dots = fingerprint_plan(&plan_for(&StyleSettings {
        dot_style: DotStyle::Dots,
        ..StyleSettings::default()
    }));
    let color = fingerprint_plan(&plan_for(&StyleSettings {
        eye_color: Some(Color::rgb(200, 0, 0)),
        ..StyleSettings::default()
    }));
    assert_ne!(base, dots);
    assert_ne!(base, color);
    assert_ne!(dots, color);
}

#[test]
fn display_is_32_hex_digits() {
    let fp = PlanFingerprint { hi: 1, lo: 0xff };
    assert_eq!(fp.to_string(), "000000000000000100000000000000ff");
}
