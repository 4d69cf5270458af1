/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use corpus_translator::errors::{
    AlignmentError, AppError, BackendError, CodecError, CorpusError, PipelineError,
};

#[test]
fn test_corpusError_inputNotFound_shouldDisplayPath() {
    let error = CorpusError::InputNotFound {
        path: PathBuf::from("missing.txt"),
        message: "No such file or directory".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("missing.txt"));
    assert!(display.contains("No such file"));
}

#[test]
fn test_codecError_modelLoad_shouldDisplayPath() {
    let error = CodecError::ModelLoad {
        path: PathBuf::from("sourceM.model"),
        message: "Not found".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to load subword model"));
    assert!(display.contains("sourceM.model"));
}

#[test]
fn test_backendError_execution_shouldDisplayStatusAndStderr() {
    let error = BackendError::Execution {
        status: Some(1),
        stderr: "CUDA out of memory".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("exit status 1"));
    assert!(display.contains("CUDA out of memory"));

    let killed = BackendError::Execution { status: None, stderr: String::new() };
    assert!(format!("{}", killed).contains("signal"));
}

#[test]
fn test_alignmentError_mismatch_shouldDisplayCounts() {
    let error = AlignmentError::Mismatch { source_lines: 5, translated_lines: 3 };
    let display = format!("{}", error);
    assert!(display.contains('5'));
    assert!(display.contains('3'));
}

#[test]
fn test_pipelineError_fromBackendError_shouldWrapCorrectly() {
    let backend_error = BackendError::Timeout(30);
    let pipeline_error: PipelineError = backend_error.into();
    assert!(matches!(pipeline_error, PipelineError::Backend(BackendError::Timeout(30))));
    assert!(format!("{}", pipeline_error).contains("30 seconds"));
}

#[test]
fn test_appError_fromPipelineError_shouldWrapCorrectly() {
    let app_error: AppError = PipelineError::AlreadyRun.into();
    assert!(matches!(app_error, AppError::Pipeline(PipelineError::AlreadyRun)));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
}
