//! Line-to-paragraph clustering.
//!
//! Groups consecutive text lines into paragraph blocks by comparing each
//! vertical gap against the incoming line's own height.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::params::LayoutParams;
use crate::detect::TextLine;
use crate::geometry::BBox;

/// A paragraph-level grouping of consecutive text lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    /// Smallest rectangle containing every member line.
    pub bbox: BBox,

    /// Member line texts joined with single spaces, in input order.
    pub text: String,

    /// Arithmetic mean of member line confidences.
    pub confidence: f64,

    /// Number of member lines.
    pub line_count: usize,

    /// Mean dark-run length measured inside the block, 0.0 until a pixel
    /// source has been sampled.
    pub stroke_width: f64,
}

impl ParagraphBlock {
    fn seed(line: &TextLine) -> Self {
        Self {
            bbox: line.bbox,
            text: line.text.clone(),
            confidence: line.confidence,
            line_count: 1,
            stroke_width: 0.0,
        }
    }

    /// Merges a line into the block: union box, space-joined text, and a
    /// running mean that keeps `confidence` the exact average of all member
    /// confidences regardless of merge order.
    fn absorb(&mut self, line: &TextLine) {
        self.bbox = self.bbox.union(&line.bbox);
        self.text.push(' ');
        self.text.push_str(&line.text);
        let total = self.confidence * self.line_count as f64 + line.confidence;
        self.line_count += 1;
        self.confidence = total / self.line_count as f64;
    }

    pub fn height(&self) -> i32 {
        self.bbox.height()
    }
}

/// Groups lines into paragraph blocks.
///
/// Lines must already be in reading order (see
/// [`crate::detect::sort_reading_order`]); the gap test compares each line
/// against the one immediately before it. A gap strictly greater than
/// `line_height * gap_threshold_ratio` starts a new block; a gap exactly at
/// the threshold merges.
pub fn cluster_lines(lines: &[TextLine], params: &LayoutParams) -> Vec<ParagraphBlock> {
    let mut blocks = Vec::new();
    let Some(first) = lines.first() else {
        return blocks;
    };

    let mut current = ParagraphBlock::seed(first);
    let mut prev_bottom = first.bbox.y1;

    for line in &lines[1..] {
        let line_height = line.bbox.height();
        let vertical_gap = line.bbox.y0 - prev_bottom;

        if vertical_gap as f64 > line_height as f64 * params.gap_threshold_ratio {
            blocks.push(current);
            current = ParagraphBlock::seed(line);
        } else {
            current.absorb(line);
        }

        prev_bottom = line.bbox.y1;
    }
    blocks.push(current);

    debug!(
        lines = lines.len(),
        blocks = blocks.len(),
        "clustered lines into paragraph blocks"
    );
    blocks
}
