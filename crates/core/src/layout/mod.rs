//! Layout analysis module for OCR page reconstruction.
//!
//! This module contains:
//! - Layout analysis parameters (LayoutParams)
//! - Paragraph clustering (grouping consecutive lines by vertical gap)
//! - Column zone partitioning
//! - Article assembly (headline/body folding per zone)

pub mod article;
pub mod cluster;
pub mod params;
pub mod zone;

// Re-export params
pub use params::*;

// Re-export the layout types and algorithms
pub use article::*;
pub use cluster::*;
pub use zone::*;
