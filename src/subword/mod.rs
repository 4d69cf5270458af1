/*!
 * Subword codec for round-tripping text through a pretrained tokenizer.
 *
 * - `SubwordCodec`: the encode/decode interface used by the pipeline
 * - `SubwordModel`: a tokenizer model addressed by file path
 * - `spm`: SentencePiece implementation
 */

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::errors::CodecError;

pub use self::spm::SentencePieceCodec;

pub mod spm;

/// Common trait for subword codecs
///
/// Implementations must be deterministic: the same input encoded with the
/// same model always yields the same pieces.
pub trait SubwordCodec: Debug {
    /// Trim `raw_text` and split it into subword pieces joined by single spaces
    fn encode(&self, raw_text: &str) -> Result<String, CodecError>;

    /// Split `encoded_text` on whitespace and reassemble the original-alphabet text
    fn decode(&self, encoded_text: &str) -> Result<String, CodecError>;
}

/// A pretrained tokenizer model, identified by its file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubwordModel {
    path: PathBuf,
}

impl SubwordModel {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
