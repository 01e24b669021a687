//! patrika - OCR page reconstruction and Devanagari corpus assembly.

pub mod api;
pub mod detect;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod script;
pub mod stroke;
pub mod text;
pub mod tsv;

pub use api::high_level;

pub use error::{LayoutError, Result};
