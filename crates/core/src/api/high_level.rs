//! High-level page reconstruction API.
//!
//! Provides the main public entry points:
//! - `reconstruct_page()` - run the full pipeline on one page of detections
//! - `reconstruct_pages()` - run a batch of pages on a rayon pool
//! - `cluster_paragraphs()` - stop after paragraph clustering
//! - `build_corpus()` - clean tokens and join them into corpus text

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::detect::{Detection, NormalizeOptions, normalize_lines, sort_reading_order};
use crate::error::{LayoutError, Result};
use crate::layout::{
    Article, LayoutParams, ParagraphBlock, assemble_articles, cluster_lines, derive_page_width,
    partition,
};
use crate::script::ScriptProfile;
use crate::stroke::{PixelSource, measure_blocks};
use crate::text::{CorpusLevel, clean_tokens, reconstruct};

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Options for page reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembleOptions {
    /// Layout analysis thresholds.
    pub params: LayoutParams,

    /// Line normalization settings applied before clustering.
    pub normalize: NormalizeOptions,

    /// Script the page is expected to carry.
    pub script: ScriptProfile,

    /// Page width in pixels for zone classification. None derives it from
    /// the rightmost block edge.
    pub page_width: Option<i32>,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            params: LayoutParams::default(),
            normalize: NormalizeOptions::default(),
            script: ScriptProfile::default(),
            page_width: None,
        }
    }
}

/// Everything the pipeline produced for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReconstruction {
    /// Paragraph blocks in reading order, stroke widths filled in when
    /// pixels were available.
    pub blocks: Vec<ParagraphBlock>,

    /// Assembled articles, full-width zone first, then left, then right.
    pub articles: Vec<Article>,

    /// Mean confidence over the normalized lines, 0.0 when none survive.
    pub average_confidence: f64,

    /// Number of lines that survived normalization.
    pub line_count: usize,
}

/// One page of a batch: its detections plus optional pixels for stroke
/// measurement.
pub struct PageInput<'a> {
    pub detections: Vec<Detection>,
    pub pixels: Option<&'a (dyn PixelSource + Sync)>,
}

/// Normalizes detections and groups them into paragraph blocks.
///
/// This is the front half of [`reconstruct_page`] for callers that want
/// blocks without zoning or article assembly. Stroke widths are left at
/// 0.0.
pub fn cluster_paragraphs(
    detections: &[Detection],
    options: &AssembleOptions,
) -> Vec<ParagraphBlock> {
    let mut lines = normalize_lines(detections, &options.normalize, &options.script);
    sort_reading_order(&mut lines);
    cluster_lines(&lines, &options.params)
}

/// Runs the full reconstruction pipeline on one page.
///
/// Detections are normalized, sorted into reading order, clustered into
/// paragraph blocks, measured against `pixels` when given, split into
/// column zones, and assembled into articles. Empty input produces an
/// empty reconstruction, never an error.
///
/// # Example
/// ```ignore
/// use patrika_core::high_level::{AssembleOptions, reconstruct_page};
/// use patrika_core::tsv::{TsvLevel, parse_detections};
///
/// let tsv = std::fs::read_to_string("page.tsv")?;
/// let detections = parse_detections(&tsv, TsvLevel::Line);
/// let page = reconstruct_page(&detections, None, &AssembleOptions::default());
/// for article in &page.articles {
///     println!("{}", article.headline);
/// }
/// ```
pub fn reconstruct_page(
    detections: &[Detection],
    pixels: Option<&dyn PixelSource>,
    options: &AssembleOptions,
) -> PageReconstruction {
    let mut lines = normalize_lines(detections, &options.normalize, &options.script);
    sort_reading_order(&mut lines);

    let line_count = lines.len();
    let average_confidence = if lines.is_empty() {
        0.0
    } else {
        lines.iter().map(|line| line.confidence).sum::<f64>() / line_count as f64
    };

    let mut blocks = cluster_lines(&lines, &options.params);
    measure_blocks(pixels, &mut blocks, &options.params);

    let page_width = options
        .page_width
        .unwrap_or_else(|| derive_page_width(&blocks));
    let zoned = partition(blocks.clone(), page_width, options.params.buffer_zone);
    let articles = assemble_articles(&zoned, &options.params);

    info!(
        lines = line_count,
        blocks = blocks.len(),
        articles = articles.len(),
        "reconstructed page"
    );

    PageReconstruction {
        blocks,
        articles,
        average_confidence,
        line_count,
    }
}

/// Reconstructs a batch of pages in parallel, preserving input order.
///
/// Pages are distributed over a rayon pool sized to the available
/// parallelism. The only failure mode is pool construction; per-page
/// reconstruction itself cannot fail.
pub fn reconstruct_pages(
    pages: &[PageInput<'_>],
    options: &AssembleOptions,
) -> Result<Vec<PageReconstruction>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(default_thread_count())
        .build()
        .map_err(|e| LayoutError::ThreadPool(e.to_string()))?;

    let mut results: Vec<(usize, PageReconstruction)> = pool.install(|| {
        pages
            .par_iter()
            .enumerate()
            .map(|(idx, page)| {
                let pixels = page.pixels.map(|p| p as &dyn PixelSource);
                (idx, reconstruct_page(&page.detections, pixels, options))
            })
            .collect()
    });

    results.sort_by_key(|(idx, _)| *idx);
    Ok(results.into_iter().map(|(_, page)| page).collect())
}

/// Cleans raw OCR tokens against the profile and joins the survivors into
/// corpus text at the requested level.
pub fn build_corpus<I, S>(profile: &ScriptProfile, tokens: I, level: CorpusLevel) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cleaned = clean_tokens(profile, tokens);
    reconstruct(profile, &cleaned, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_default_profile() {
        let options = AssembleOptions::default();
        assert_eq!(options.script, ScriptProfile::devanagari());
        assert_eq!(options.page_width, None);
    }

    #[test]
    fn build_corpus_cleans_before_joining() {
        let profile = ScriptProfile::devanagari();
        let out = build_corpus(&profile, ["नेपाल@@", "xyz"], CorpusLevel::Word);
        assert_eq!(out, "नेपाल ");
    }
}
