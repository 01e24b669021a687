//! Headline and body assembly.
//!
//! Walks each zone top to bottom and folds paragraph blocks into
//! headline/body article units. A block is promoted to headline when it is
//! tall or its strokes are heavy; a large vertical jump closes the article
//! in progress.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cluster::ParagraphBlock;
use super::params::LayoutParams;
use super::zone::ZonedBlocks;

/// A headline with its following body text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    pub body: String,
}

/// Assembles articles zone by zone.
///
/// Output order is FullWidth first, then LeftColumn, then RightColumn,
/// each zone's blocks visited by ascending top edge.
pub fn assemble_articles(zoned: &ZonedBlocks, params: &LayoutParams) -> Vec<Article> {
    let mut articles = Vec::new();
    for blocks in [&zoned.full_width, &zoned.left, &zoned.right] {
        assemble_zone(blocks, params, &mut articles);
    }

    debug!(
        blocks = zoned.len(),
        articles = articles.len(),
        "assembled articles"
    );
    articles
}

fn assemble_zone(blocks: &[ParagraphBlock], params: &LayoutParams, out: &mut Vec<Article>) {
    let mut headline = String::new();
    let mut body = String::new();
    let mut last_bottom: Option<i32> = None;

    for block in blocks.iter().sorted_by_key(|b| b.bbox.y0) {
        if let Some(bottom) = last_bottom
            && block.bbox.y0 - bottom > params.gap_break
        {
            flush(&mut headline, &mut body, out);
        }

        let is_headline = block.height() > params.height_threshold
            || block.stroke_width > params.stroke_threshold;

        if is_headline {
            flush(&mut headline, &mut body, out);
            headline = block.text.clone();
        } else if headline.is_empty() && body.is_empty() {
            // No banner preceded this run; its first text doubles as the
            // headline rather than being dropped.
            headline = block.text.clone();
        } else {
            body.push_str(&block.text);
            body.push(' ');
        }

        last_bottom = Some(block.bbox.y1);
    }

    flush(&mut headline, &mut body, out);
}

fn flush(headline: &mut String, body: &mut String, out: &mut Vec<Article>) {
    if headline.is_empty() && body.is_empty() {
        return;
    }
    out.push(Article {
        headline: std::mem::take(headline).trim().to_string(),
        body: std::mem::take(body).trim().to_string(),
    });
}
