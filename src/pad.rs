use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, imageops};

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// How to pad: target canvas size (`None` = square of the larger source
/// dimension), fill color, and where to place the source on the canvas
/// ((0, 0) = top-left, (1, 1) = bottom-right).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadSpec {
    pub size: Option<(u32, u32)>,
    pub color: Rgb<u8>,
    pub centering: (f32, f32),
}

impl Default for PadSpec {
    fn default() -> Self {
        Self {
            size: None,
            color: BLACK,
            centering: (0.5, 0.5),
        }
    }
}

/// Places `img` unscaled on a solid-color canvas and returns the result.
/// The source image is left untouched.
pub fn pad(img: &DynamicImage, spec: &PadSpec) -> RgbImage {
    let (w, h) = (img.width(), img.height());
    let (target_w, target_h) = spec.size.unwrap_or_else(|| {
        let side = w.max(h);
        (side, side)
    });

    let x = offset(target_w, w, spec.centering.0);
    let y = offset(target_h, h, spec.centering.1);

    let mut canvas = ImageBuffer::from_pixel(target_w, target_h, spec.color);
    imageops::overlay(&mut canvas, &img.to_rgb8(), i64::from(x), i64::from(y));
    canvas
}

fn offset(target: u32, source: u32, centering: f32) -> u32 {
    let slack = target.saturating_sub(source);
    (slack as f32 * centering.clamp(0.0, 1.0)).round() as u32
}
