/*!
 * SentencePiece codec.
 *
 * The model is loaded on the first encode/decode call and kept for the
 * lifetime of the codec, so a bad model path surfaces as `ModelLoad` at the
 * first use rather than at construction.
 */

use log::debug;
use once_cell::sync::OnceCell;
use std::fmt;

use crate::errors::CodecError;
use super::{SubwordCodec, SubwordModel};

#[cfg(feature = "spm")]
type Processor = sentencepiece::SentencePieceProcessor;

// Placeholder so the codec still builds without the native library
#[cfg(not(feature = "spm"))]
struct Processor;

/// SentencePiece-backed subword codec
pub struct SentencePieceCodec {
    model: SubwordModel,
    processor: OnceCell<Processor>,
}

impl SentencePieceCodec {
    /// Create a codec for the given model. Nothing is loaded yet.
    pub fn new(model: SubwordModel) -> Self {
        Self {
            model,
            processor: OnceCell::new(),
        }
    }

    pub fn model(&self) -> &SubwordModel {
        &self.model
    }

    fn processor(&self) -> Result<&Processor, CodecError> {
        self.processor.get_or_try_init(|| {
            debug!("Loading subword model {:?}", self.model.path());
            load_processor(&self.model)
        })
    }
}

impl fmt::Debug for SentencePieceCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentencePieceCodec")
            .field("model", &self.model)
            .field("loaded", &self.processor.get().is_some())
            .finish()
    }
}

#[cfg(feature = "spm")]
fn load_processor(model: &SubwordModel) -> Result<Processor, CodecError> {
    sentencepiece::SentencePieceProcessor::open(model.path()).map_err(|e| CodecError::ModelLoad {
        path: model.path().to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(not(feature = "spm"))]
fn load_processor(model: &SubwordModel) -> Result<Processor, CodecError> {
    Err(CodecError::ModelLoad {
        path: model.path().to_path_buf(),
        message: "SentencePiece support not compiled in".to_string(),
    })
}

impl SubwordCodec for SentencePieceCodec {
    #[cfg(feature = "spm")]
    fn encode(&self, raw_text: &str) -> Result<String, CodecError> {
        let processor = self.processor()?;
        let pieces = processor
            .encode(raw_text.trim())
            .map_err(|e| CodecError::Encode(e.to_string()))?;

        Ok(pieces
            .into_iter()
            .map(|p| p.piece)
            .collect::<Vec<_>>()
            .join(" "))
    }

    #[cfg(feature = "spm")]
    fn decode(&self, encoded_text: &str) -> Result<String, CodecError> {
        let processor = self.processor()?;
        let pieces: Vec<&str> = encoded_text.split_whitespace().collect();

        processor
            .decode_pieces(pieces.as_slice())
            .map_err(|e| CodecError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "spm"))]
    fn encode(&self, _raw_text: &str) -> Result<String, CodecError> {
        self.processor().map(|_| String::new())
    }

    #[cfg(not(feature = "spm"))]
    fn decode(&self, _encoded_text: &str) -> Result<String, CodecError> {
        self.processor().map(|_| String::new())
    }
}
