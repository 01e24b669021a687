//! Text post-processing: cleaning OCR tokens and assembling corpus output.

pub mod clean;
pub mod corpus;

pub use clean::{accept, clean, clean_tokens};
pub use corpus::{CorpusLevel, reconstruct};
