use super::*;
use crate::compile::plan::compile_plan;
use crate::matrix::adapter::QrMatrix;
use crate::style::settings::StyleSettings;

fn plan() -> RenderPlan {
    let m = QrMatrix::from_modules(21, vec![true; 441]).unwrap();
    compile_plan(&m, &StyleSettings::default()).unwrap()
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn rasterizes_quiet_zone_and_modules() {
    let frame = RasterRenderer::new(1.0).render_plan(&plan()).unwrap();
    assert_eq!((frame.width, frame.height), (290, 290));
    assert!(frame.premultiplied);
    assert_eq!(pixel(&frame, 5, 5), [255, 255, 255, 255]);
    // Inside the top-left finder ring.
    assert_eq!(pixel(&frame, 45, 45), [0, 0, 0, 255]);
    // A data module in the bottom-right area.
    assert_eq!(pixel(&frame, 245, 245), [0, 0, 0, 255]);
}

#[test]
fn scale_multiplies_pixel_size() {
    let frame = RasterRenderer::new(2.0).render_plan(&plan()).unwrap();
    assert_eq!(frame.width, 580);
    assert_eq!(frame.data.len(), 580 * 580 * 4);
}

#[test]
fn invalid_scale_is_rejected() {
    for scale in [0.0, -1.0, f32::NAN, 1e6] {
        let err = RasterRenderer::new(scale).render_plan(&plan()).unwrap_err();
        assert!(matches!(err, QrStyleError::Validation(_)), "{scale}");
    }
}

#[test]
fn demultiply_restores_straight_alpha() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 128, 128],
        premultiplied: true,
    };
    assert_eq!(demultiplied(&frame), vec![128, 0, 255, 128]);
}

#[test]
fn png_round_trip_on_disk() {
    let dir = std::path::PathBuf::from("target").join("qrstyle_unit_raster");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("plan.png");
    let _ = std::fs::remove_file(&path);

    let frame = RasterRenderer::default().render_plan(&plan()).unwrap();
    write_png(&frame, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
