/*!
 * Tests for the pipeline orchestrator
 */

use anyhow::Result;
use corpus_translator::app_config::AlignmentPolicy;
use corpus_translator::backend::MockBackend;
use corpus_translator::errors::{CodecError, CorpusError, PipelineError};
use corpus_translator::pipeline::{CorpusPipeline, PipelineStage};
use crate::common;
use crate::common::mock_codec::{BrokenCodec, CharCodec};

fn char_pipeline(backend: MockBackend) -> CorpusPipeline {
    CorpusPipeline::new(Box::new(CharCodec), Box::new(CharCodec), Box::new(backend))
}

#[tokio::test]
async fn test_run_withEchoBackend_shouldReachDoneAndReportCounts() -> Result<()> {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_corpus(temp_dir.path(), "input.txt")?;
    let output = temp_dir.path().join("out.csv");
    let mut pipeline = char_pipeline(MockBackend::echo());
    assert_eq!(pipeline.stage(), PipelineStage::Idle);

    let report = pipeline.run(&input, &output).await?;

    assert_eq!(pipeline.stage(), PipelineStage::Done);
    assert_eq!(report.source_lines, 4);
    assert_eq!(report.translated_lines, 4);
    assert_eq!(report.records_written, 4);
    assert_eq!(report.output_path, output);
    Ok(())
}

#[tokio::test]
async fn test_run_withEchoBackend_shouldSendEncodedLinesToBackend() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "input.txt", "ab cd\nx\n")?;
    let output = temp_dir.path().join("out.csv");
    let backend = MockBackend::echo();
    let calls = backend.call_counter();
    let mut pipeline = char_pipeline(backend);

    pipeline.run(&input, &output).await?;

    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    let rows = common::read_csv_rows(&output)?;
    assert_eq!(rows[1], vec!["ab cd", "ab cd"]);
    assert_eq!(rows[2], vec!["x", "x"]);
    Ok(())
}

#[tokio::test]
async fn test_run_twice_shouldFailWithAlreadyRun() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "input.txt", "one\n")?;
    let output = temp_dir.path().join("out.csv");
    let mut pipeline = char_pipeline(MockBackend::echo());

    pipeline.run(&input, &output).await?;
    let second = pipeline.run(&input, &output).await;

    assert!(matches!(second, Err(PipelineError::AlreadyRun)));
    assert_eq!(pipeline.stage(), PipelineStage::Done);
    Ok(())
}

#[tokio::test]
async fn test_run_withMissingInput_shouldFailBeforeTranslating() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("out.csv");
    let backend = MockBackend::echo();
    let calls = backend.call_counter();
    let mut pipeline = char_pipeline(backend);

    let result = pipeline.run(temp_dir.path().join("missing.txt"), &output).await;

    assert!(matches!(result, Err(PipelineError::Input(CorpusError::InputNotFound { .. }))));
    assert_eq!(pipeline.stage(), PipelineStage::Failed);
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_run_withBrokenSourceModel_shouldFailWithModelLoad() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "input.txt", "one\n")?;
    let output = temp_dir.path().join("out.csv");
    let mut pipeline = CorpusPipeline::new(
        Box::new(BrokenCodec),
        Box::new(CharCodec),
        Box::new(MockBackend::echo()),
    );

    let result = pipeline.run(&input, &output).await;

    assert!(matches!(result, Err(PipelineError::Codec(CodecError::ModelLoad { .. }))));
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_run_withStrictAlignmentAndShortOutput_shouldFailWithoutWriting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "input.txt", "a\nb\nc\n")?;
    let output = temp_dir.path().join("out.csv");
    let mut pipeline = char_pipeline(MockBackend::truncating(2)).with_alignment(AlignmentPolicy::Strict);

    let result = pipeline.run(&input, &output).await;

    assert!(matches!(result, Err(PipelineError::Alignment(_))));
    assert_eq!(pipeline.stage(), PipelineStage::Failed);
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_run_withMappingBackend_shouldDecodeWithTargetCodec() -> Result<()> {
    fn shout(line: &str) -> String {
        line.to_uppercase()
    }

    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "input.txt", "hello world\n")?;
    let output = temp_dir.path().join("out.csv");
    let mut pipeline = char_pipeline(MockBackend::mapping(shout));

    pipeline.run(&input, &output).await?;

    let rows = common::read_csv_rows(&output)?;
    assert_eq!(rows[1], vec!["hello world", "HELLO WORLD"]);
    Ok(())
}
