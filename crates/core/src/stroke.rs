//! Stroke-width estimation over page pixels.
//!
//! Measures the mean horizontal dark-run length inside a block. Heavy type
//! produces longer runs, so the value separates headline faces from body
//! text. It is a coarse boldness proxy, not calibrated typography
//! measurement.

use image::GenericImageView;
use tracing::debug;

use crate::geometry::BBox;
use crate::layout::{LayoutParams, ParagraphBlock};

/// Pixel access used by stroke analysis.
///
/// Implementations report weighted luminance on a 0-255 scale; anything
/// below [`LayoutParams::darkness_cutoff`] counts as ink.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);
    fn luminance(&self, x: u32, y: u32) -> f32;
}

fn weighted_luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

impl PixelSource for image::DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn luminance(&self, x: u32, y: u32) -> f32 {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        weighted_luminance(r, g, b)
    }
}

impl PixelSource for image::RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn luminance(&self, x: u32, y: u32) -> f32 {
        let [r, g, b] = self.get_pixel(x, y).0;
        weighted_luminance(r, g, b)
    }
}

impl PixelSource for image::GrayImage {
    fn dimensions(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn luminance(&self, x: u32, y: u32) -> f32 {
        self.get_pixel(x, y).0[0] as f32
    }
}

/// Mean accepted dark-run length inside `bbox`, or 0.0 when nothing
/// qualifies.
///
/// Samples only rows in the vertical middle half of the box, skipping the
/// ascender and descender bands. Each sampled row is scanned left to right;
/// a run is accepted when a light pixel closes it at a length inside
/// `[min_stroke_run, max_stroke_run)`. Runs still open at the right edge
/// of the box are discarded with the fills and photographs.
pub fn stroke_width(pixels: &dyn PixelSource, bbox: &BBox, params: &LayoutParams) -> f64 {
    let (img_w, img_h) = pixels.dimensions();
    let clipped = bbox.clamp_to(img_w, img_h);
    if clipped.is_empty() {
        return 0.0;
    }

    let h = clipped.height();
    let start_y = clipped.y0 + h / 4;
    let end_y = clipped.y0 + h * 3 / 4;

    let mut total_len: u64 = 0;
    let mut runs: u64 = 0;

    for y in start_y..end_y {
        let mut current_run: u32 = 0;
        for x in clipped.x0..clipped.x1 {
            if pixels.luminance(x as u32, y as u32) < params.darkness_cutoff {
                current_run += 1;
            } else if current_run > 0 {
                if current_run >= params.min_stroke_run && current_run < params.max_stroke_run {
                    total_len += u64::from(current_run);
                    runs += 1;
                }
                current_run = 0;
            }
        }
    }

    if runs == 0 {
        return 0.0;
    }
    total_len as f64 / runs as f64
}

/// Fills in `stroke_width` for every block. Without a pixel source the
/// measurements stay 0.0 and headline promotion falls back to block height
/// alone.
pub fn measure_blocks(
    pixels: Option<&dyn PixelSource>,
    blocks: &mut [ParagraphBlock],
    params: &LayoutParams,
) {
    let Some(pixels) = pixels else {
        return;
    };

    for block in blocks.iter_mut() {
        block.stroke_width = stroke_width(pixels, &block.bbox, params);
    }
    debug!(blocks = blocks.len(), "measured stroke widths");
}
