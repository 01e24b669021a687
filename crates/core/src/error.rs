//! Error types for the patrika OCR reconstruction library.

use thiserror::Error;

/// Primary error type for OCR reconstruction operations.
///
/// The pure layout transformations never fail; empty input produces empty
/// output. Errors arise only at the edges: reading detection files, decoding
/// page images, rejecting invalid configuration, and building worker pools.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
