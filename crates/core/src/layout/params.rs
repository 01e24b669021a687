//! Layout analysis parameters.
//!
//! Contains LayoutParams struct for controlling paragraph clustering,
//! zone partitioning, stroke sampling, and article assembly.

/// Parameters for page layout analysis.
///
/// Every threshold here is an empirical tuning knob, not a derived
/// constant. The defaults were calibrated on scanned Nepali newsprint and
/// will need adjustment for other corpora.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// If the vertical gap between two lines exceeds this fraction of the
    /// incoming line's height, the lines belong to different paragraphs.
    /// There is no universally correct value; tune per corpus. Default: 0.6
    pub gap_threshold_ratio: f64,

    /// Margin around the page centerline used to decide whether a block
    /// straddles the center or sits inside one column. Default: 50
    pub buffer_zone: i32,

    /// Blocks taller than this many pixels are headline candidates.
    /// Default: 22
    pub height_threshold: i32,

    /// Blocks whose mean stroke width exceeds this are headline candidates
    /// even when short. Default: 2.2
    pub stroke_threshold: f64,

    /// A vertical jump larger than this between consecutive blocks closes
    /// the article being assembled. Default: 120
    pub gap_break: i32,

    /// Pixels with weighted luminance below this count as ink, on a 0-255
    /// scale. Default: 156.0
    pub darkness_cutoff: f32,

    /// Shortest dark run accepted as a stroke sample. Default: 1
    pub min_stroke_run: u32,

    /// Dark runs at or beyond this length are rejected as solid fills or
    /// photographs rather than glyph strokes. Default: 25
    pub max_stroke_run: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            gap_threshold_ratio: 0.6,
            buffer_zone: 50,
            height_threshold: 22,
            stroke_threshold: 2.2,
            gap_break: 120,
            darkness_cutoff: 156.0,
            min_stroke_run: 1,
            max_stroke_run: 25,
        }
    }
}

impl LayoutParams {
    /// Creates new layout parameters with the specified values.
    ///
    /// # Panics
    /// Panics if gap_threshold_ratio is negative or not finite, or if the
    /// stroke run window is empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gap_threshold_ratio: f64,
        buffer_zone: i32,
        height_threshold: i32,
        stroke_threshold: f64,
        gap_break: i32,
        darkness_cutoff: f32,
        min_stroke_run: u32,
        max_stroke_run: u32,
    ) -> Self {
        assert!(
            gap_threshold_ratio.is_finite() && gap_threshold_ratio >= 0.0,
            "gap_threshold_ratio should be a non-negative finite number"
        );
        assert!(
            min_stroke_run < max_stroke_run,
            "stroke run window should be non-empty"
        );

        Self {
            gap_threshold_ratio,
            buffer_zone,
            height_threshold,
            stroke_threshold,
            gap_break,
            darkness_cutoff,
            min_stroke_run,
            max_stroke_run,
        }
    }
}
