/*!
 * Tests for subword codecs
 */

use corpus_translator::errors::CodecError;
use corpus_translator::subword::{SentencePieceCodec, SubwordCodec, SubwordModel};
use crate::common::mock_codec::CharCodec;

#[test]
fn test_encode_withPaddedText_shouldTrimAndJoinPieces() {
    let codec = CharCodec;

    let encoded = codec.encode("  hi you ").unwrap();

    assert_eq!(encoded, "▁h i ▁y o u");
}

#[test]
fn test_encode_decode_withSameModel_shouldBeDeterministic() {
    let codec = CharCodec;
    let text = "the quick   brown fox";

    let first = codec.decode(&codec.encode(text).unwrap()).unwrap();
    let second = codec.decode(&codec.encode(text).unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, "the quick brown fox");
}

#[test]
fn test_subword_model_withPath_shouldExposePath() {
    let model = SubwordModel::new("models/sourceM.model");
    assert_eq!(model.path().to_str(), Some("models/sourceM.model"));
    assert_eq!(model.clone(), model);
}

#[test]
fn test_sentencepiece_withMissingModel_shouldReportModelLoadOnFirstUse() {
    let codec = SentencePieceCodec::new(SubwordModel::new("does-not-exist.model"));

    // Construction never touches the file
    assert_eq!(codec.model().path().to_str(), Some("does-not-exist.model"));

    match codec.encode("hello") {
        Err(CodecError::ModelLoad { path, .. }) => {
            assert_eq!(path.to_str(), Some("does-not-exist.model"));
        }
        other => panic!("expected ModelLoad, got {:?}", other),
    }
}
