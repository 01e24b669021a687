//! High-level API module for OCR page reconstruction.
//!
//! # Example
//!
//! ```ignore
//! use patrika_core::api::{AssembleOptions, reconstruct_page};
//!
//! let page = reconstruct_page(&detections, None, &AssembleOptions::default());
//! ```

pub mod high_level;

// Re-export for convenience
pub use high_level::{
    AssembleOptions, PageInput, PageReconstruction, build_corpus, cluster_paragraphs,
    reconstruct_page, reconstruct_pages,
};
