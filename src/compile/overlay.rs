use kurbo::{RoundedRect, RoundedRectRadii};

use crate::compile::plan::{DrawOp, Layer, LayerKind};
use crate::foundation::core::{BezPath, FillRule, Point, Rect};
use crate::geometry::exclusion::LogoBox;
use crate::geometry::planner::Geometry;
use crate::style::color::Color;
use crate::style::fill::Fill;
use crate::style::settings::{FrameKind, StyleSettings};
use crate::synth::finder::EyeShapes;
use crate::synth::modules::ModuleShapes;
use crate::synth::shapes::push_shape;

/// Font size of the badge caption.
pub const BADGE_FONT_SIZE: f64 = 28.0;

/// Everything the composer stacks, already synthesized.
pub(crate) struct LayerInputs<'a> {
    pub(crate) geom: &'a Geometry,
    pub(crate) settings: &'a StyleSettings,
    pub(crate) main_fill: &'a Fill,
    pub(crate) modules: ModuleShapes,
    pub(crate) eyes: Vec<EyeShapes>,
    pub(crate) logo: Option<&'a LogoBox>,
}

/// Stack all layers back to front. Optional layers are omitted, never emitted empty.
pub(crate) fn compose_layers(inputs: LayerInputs<'_>) -> Vec<Layer> {
    let LayerInputs {
        geom,
        settings,
        main_fill,
        modules,
        eyes,
        logo,
    } = inputs;
    let canvas = Rect::new(0.0, 0.0, geom.canvas_size, geom.canvas_size);
    let mut layers = Vec::with_capacity(9);

    layers.push(Layer {
        kind: LayerKind::Background,
        ops: vec![solid_rect(canvas, settings.background_color)],
    });

    if let Some(href) = settings.active_bg_image() {
        layers.push(Layer {
            kind: LayerKind::BackgroundImage,
            ops: vec![DrawOp::Image {
                href: href.to_owned(),
                rect: canvas,
                opacity: unit(settings.bg_opacity),
            }],
        });
    }

    let underlay = frame_underlay(geom, settings);
    if !underlay.is_empty() {
        layers.push(Layer {
            kind: LayerKind::FrameUnderlay,
            ops: underlay,
        });
    }

    layers.push(Layer {
        kind: LayerKind::ModuleFill,
        ops: vec![DrawOp::FillPath {
            path: modules.path,
            fill: main_fill.clone(),
            rule: FillRule::NonZero,
            opacity: 1.0,
        }],
    });

    for eye in eyes {
        layers.push(Layer {
            kind: LayerKind::Eye { corner: eye.corner },
            ops: vec![
                DrawOp::FillPath {
                    path: eye.outer,
                    fill: eye.fill.clone(),
                    rule: FillRule::EvenOdd,
                    opacity: 1.0,
                },
                DrawOp::FillPath {
                    path: eye.inner,
                    fill: eye.fill,
                    rule: FillRule::NonZero,
                    opacity: 1.0,
                },
            ],
        });
    }

    if let (Some(logo), Some(href)) = (logo, settings.active_logo()) {
        layers.push(Layer {
            kind: LayerKind::Logo,
            ops: vec![
                solid_rect(logo.bounds, settings.background_color),
                DrawOp::Image {
                    href: href.to_owned(),
                    rect: logo.image,
                    opacity: unit(settings.logo_opacity),
                },
            ],
        });
    }

    let overlay = frame_overlay(geom, settings);
    if !overlay.is_empty() {
        layers.push(Layer {
            kind: LayerKind::FrameOverlay,
            ops: overlay,
        });
    }

    layers
}

/// Frame shell as an even-odd ring around the panel or screen. The cut-out leaves the
/// background color and any background image visible behind the code.
fn frame_underlay(geom: &Geometry, settings: &StyleSettings) -> Vec<DrawOp> {
    let c = geom.canvas_size;
    let canvas = Rect::new(0.0, 0.0, c, c);
    let (shell, window) = match settings.frame {
        FrameKind::None | FrameKind::Border => return Vec::new(),
        FrameKind::Badge => {
            // The panel wraps the base block (code plus quiet zone) with a 10-unit lip.
            let panel = Rect::new(50.0, 10.0, c - 50.0, 20.0 + geom.base_canvas + 10.0);
            (
                RoundedRect::from_rect(canvas, 24.0),
                RoundedRect::from_rect(panel, 16.0),
            )
        }
        FrameKind::Phone => {
            let screen = Rect::new(20.0, 60.0, c - 20.0, c - 10.0);
            (
                RoundedRect::from_rect(canvas, 40.0),
                RoundedRect::from_rect(screen, 24.0),
            )
        }
    };
    let mut path = BezPath::new();
    push_shape(&mut path, &shell);
    push_shape(&mut path, &window);
    vec![DrawOp::FillPath {
        path,
        fill: Fill::solid(settings.frame_color),
        rule: FillRule::EvenOdd,
        opacity: 1.0,
    }]
}

fn frame_overlay(geom: &Geometry, settings: &StyleSettings) -> Vec<DrawOp> {
    let c = geom.canvas_size;
    match settings.frame {
        FrameKind::None => Vec::new(),
        FrameKind::Border => {
            let mut path = BezPath::new();
            push_shape(
                &mut path,
                &RoundedRect::from_rect(Rect::new(20.0, 20.0, c - 20.0, c - 20.0), 20.0),
            );
            vec![DrawOp::StrokePath {
                path,
                color: settings.frame_color,
                width: 8.0,
            }]
        }
        FrameKind::Badge => {
            let band = Rect::new(50.0, c - 95.0, c - 50.0, c - 25.0);
            let mut ops = vec![solid_shape(
                &RoundedRect::from_rect(band, 35.0),
                settings.frame_color,
            )];
            let text = settings.frame_text.trim();
            if !text.is_empty() {
                ops.push(DrawOp::Text {
                    text: text.to_owned(),
                    position: Point::new(c / 2.0, c - 60.0 + BADGE_FONT_SIZE * 0.35),
                    font_size: BADGE_FONT_SIZE,
                    color: settings.background_color,
                });
            }
            ops
        }
        FrameKind::Phone => {
            let notch = Rect::new(c / 2.0 - 50.0, 60.0, c / 2.0 + 50.0, 76.0);
            vec![solid_shape(
                &RoundedRect::from_rect(notch, RoundedRectRadii::new(0.0, 0.0, 8.0, 8.0)),
                settings.frame_color,
            )]
        }
    }
}

fn solid_rect(rect: Rect, color: Color) -> DrawOp {
    solid_shape(&rect, color)
}

fn solid_shape(shape: &impl kurbo::Shape, color: Color) -> DrawOp {
    let mut path = BezPath::new();
    push_shape(&mut path, shape);
    DrawOp::FillPath {
        path,
        fill: Fill::solid(color),
        rule: FillRule::NonZero,
        opacity: 1.0,
    }
}

fn unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/compile/overlay.rs"]
mod tests;
