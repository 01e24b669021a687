//! Column zone partitioning.
//!
//! Newsprint pages mix full-width banners with two columns of body text.
//! Splitting blocks into zones before article assembly keeps the columns
//! from interleaving.

use serde::{Deserialize, Serialize};

use super::cluster::ParagraphBlock;
use crate::geometry::BBox;

/// Horizontal page partition a block is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    FullWidth,
    LeftColumn,
    RightColumn,
}

/// Blocks split by zone, relative input order preserved within each list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZonedBlocks {
    pub full_width: Vec<ParagraphBlock>,
    pub left: Vec<ParagraphBlock>,
    pub right: Vec<ParagraphBlock>,
}

impl ZonedBlocks {
    pub fn len(&self) -> usize {
        self.full_width.len() + self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies one block against the page centerline.
///
/// FullWidth is checked first so a wide block straddling the center is
/// never misread as a column member.
pub fn classify(bbox: &BBox, page_width: i32, buffer_zone: i32) -> Zone {
    let center = page_width / 2;
    if bbox.x0 < center - buffer_zone && bbox.x1 > center + buffer_zone {
        Zone::FullWidth
    } else if bbox.x1 < center + buffer_zone {
        Zone::LeftColumn
    } else {
        Zone::RightColumn
    }
}

/// Splits blocks into the three page zones. Every block lands in exactly
/// one zone.
pub fn partition(blocks: Vec<ParagraphBlock>, page_width: i32, buffer_zone: i32) -> ZonedBlocks {
    let mut zoned = ZonedBlocks::default();
    for block in blocks {
        match classify(&block.bbox, page_width, buffer_zone) {
            Zone::FullWidth => zoned.full_width.push(block),
            Zone::LeftColumn => zoned.left.push(block),
            Zone::RightColumn => zoned.right.push(block),
        }
    }
    zoned
}

/// Widest right edge across blocks, used when the caller supplies no page
/// width.
pub fn derive_page_width(blocks: &[ParagraphBlock]) -> i32 {
    blocks.iter().map(|b| b.bbox.x1).max().unwrap_or(0)
}
