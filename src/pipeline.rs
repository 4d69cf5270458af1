/*!
 * Pipeline orchestrator for batch corpus translation.
 *
 * The pipeline runs its stages strictly in order, exactly once:
 * 1. Reading: load the source corpus
 * 2. Encoding: subword-encode each line with the source model
 * 3. Translating: hand the whole batch to the backend
 * 4. Decoding: subword-decode each returned line with the target model
 * 5. Exporting: align by position and write the CSV corpus
 *
 * Nothing is written to the output path unless every earlier stage succeeds.
 */

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::alignment;
use crate::app_config::AlignmentPolicy;
use crate::backend::TranslationBackend;
use crate::corpus;
use crate::errors::{CodecError, PipelineError};
use crate::subword::SubwordCodec;

/// Stage of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Reading,
    Encoding,
    Translating,
    Decoding,
    Exporting,
    Done,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Reading => "reading",
            Self::Encoding => "encoding",
            Self::Translating => "translating",
            Self::Decoding => "decoding",
            Self::Exporting => "exporting",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Summary of a successful run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Where the corpus was written
    pub output_path: PathBuf,
    /// Non-empty lines read from the input
    pub source_lines: usize,
    /// Lines returned by the backend
    pub translated_lines: usize,
    /// Data rows written (header excluded)
    pub records_written: usize,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

/// Single-use translation pipeline
pub struct CorpusPipeline {
    source_codec: Box<dyn SubwordCodec>,
    target_codec: Box<dyn SubwordCodec>,
    backend: Box<dyn TranslationBackend>,
    alignment: AlignmentPolicy,
    show_progress: bool,
    stage: PipelineStage,
}

impl CorpusPipeline {
    /// Create a pipeline from its collaborators
    pub fn new(
        source_codec: Box<dyn SubwordCodec>,
        target_codec: Box<dyn SubwordCodec>,
        backend: Box<dyn TranslationBackend>,
    ) -> Self {
        Self {
            source_codec,
            target_codec,
            backend,
            alignment: AlignmentPolicy::default(),
            show_progress: false,
            stage: PipelineStage::Idle,
        }
    }

    /// Set the policy for line-count mismatches between source and translation
    pub fn with_alignment(mut self, policy: AlignmentPolicy) -> Self {
        self.alignment = policy;
        self
    }

    /// Draw progress bars for the encode and decode stages
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Run the whole pipeline once
    pub async fn run<P1: AsRef<Path>, P2: AsRef<Path>>(
        &mut self,
        input_path: P1,
        output_path: P2,
    ) -> Result<PipelineReport, PipelineError> {
        if self.stage != PipelineStage::Idle {
            return Err(PipelineError::AlreadyRun);
        }

        let result = self.run_stages(input_path.as_ref(), output_path.as_ref()).await;
        match &result {
            Ok(_) => self.advance(PipelineStage::Done),
            Err(e) => {
                error!("Pipeline failed while {}: {}", self.stage, e);
                self.stage = PipelineStage::Failed;
            }
        }
        result
    }

    async fn run_stages(&mut self, input_path: &Path, output_path: &Path) -> Result<PipelineReport, PipelineError> {
        let start_time = Instant::now();

        self.advance(PipelineStage::Reading);
        let lines = corpus::read_lines(input_path)?;
        info!("Loaded {} sentences from {:?}", lines.len(), input_path);

        self.advance(PipelineStage::Encoding);
        let encoded = self.apply_codec(&lines, "Encoding", |line| self.source_codec.encode(line))?;

        self.advance(PipelineStage::Translating);
        info!("Translating {} lines with {}", encoded.len(), self.backend.name());
        let translated = self.backend.translate_batch(&encoded).await?;

        self.advance(PipelineStage::Decoding);
        let decoded = self.apply_codec(&translated, "Decoding", |line| self.target_codec.decode(line))?;

        self.advance(PipelineStage::Exporting);
        let records = alignment::align(&lines, &decoded, self.alignment)?;
        let records_written = alignment::export(&records, output_path)?;

        info!("Saved parallel corpus to '{}'", output_path.display());

        Ok(PipelineReport {
            output_path: output_path.to_path_buf(),
            source_lines: lines.len(),
            translated_lines: translated.len(),
            records_written,
            elapsed: start_time.elapsed(),
        })
    }

    fn advance(&mut self, next: PipelineStage) {
        debug!("Pipeline stage: {} -> {}", self.stage, next);
        self.stage = next;
    }

    fn apply_codec<F>(&self, lines: &[String], label: &str, op: F) -> Result<Vec<String>, CodecError>
    where
        F: Fn(&str) -> Result<String, CodecError>,
    {
        let progress_bar = self.progress_bar(lines.len() as u64, label);

        let mut output = Vec::with_capacity(lines.len());
        for line in lines {
            output.push(op(line)?);
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        Ok(output)
    }

    fn progress_bar(&self, len: u64, label: &str) -> ProgressBar {
        if !self.show_progress || len == 0 {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(len);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message(label.to_string());
        progress_bar
    }
}

impl fmt::Debug for CorpusPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorpusPipeline")
            .field("source_codec", &self.source_codec)
            .field("target_codec", &self.target_codec)
            .field("backend", &self.backend)
            .field("alignment", &self.alignment)
            .field("stage", &self.stage)
            .finish()
    }
}
