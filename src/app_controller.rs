use anyhow::{anyhow, Result, Context};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::backend::OnmtBackend;
use crate::file_utils::FileManager;
use crate::pipeline::{CorpusPipeline, PipelineReport};
use crate::subword::{SentencePieceCodec, SubwordModel};

// @module: Application controller for corpus translation

/// Main application controller for corpus translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Output path to use when none is given explicitly
    pub fn resolve_output_path(&self, output_path: Option<PathBuf>) -> PathBuf {
        output_path.unwrap_or_else(|| self.config.output_file.clone())
    }

    /// Build the pipeline wired to the configured models and engine
    pub fn build_pipeline(&self) -> CorpusPipeline {
        let source_codec = SentencePieceCodec::new(SubwordModel::new(&self.config.source_model));
        let target_codec = SentencePieceCodec::new(SubwordModel::new(&self.config.target_model));
        let backend = OnmtBackend::new(self.config.backend.clone());

        CorpusPipeline::new(Box::new(source_codec), Box::new(target_codec), Box::new(backend))
            .with_alignment(self.config.alignment)
    }

    /// Run the main workflow for one input corpus
    ///
    /// An existing output file is replaced unless `no_clobber` is set, in which
    /// case the run fails before anything is read.
    pub async fn run(&self, input_file: &Path, output_path: Option<PathBuf>, no_clobber: bool) -> Result<PipelineReport> {
        let output_path = self.resolve_output_path(output_path);

        if FileManager::file_exists(&output_path) {
            if no_clobber {
                return Err(anyhow!("Output file already exists: {:?} (remove --no-clobber to overwrite)", output_path));
            }
            warn!("Overwriting existing output: {:?}", output_path);
        }

        info!(
            "Translating {:?} with {} (model: {:?}, {})",
            input_file,
            self.config.backend.command,
            self.config.backend.model,
            if self.config.backend.is_cpu() { "CPU".to_string() } else { format!("GPU {}", self.config.backend.gpu) }
        );

        let mut pipeline = self.build_pipeline().with_progress(true);
        let report = pipeline
            .run(input_file, &output_path)
            .await
            .with_context(|| format!("Failed to translate corpus {:?}", input_file))?;

        info!(
            "{} of {} sentences exported in {}.",
            report.records_written,
            report.source_lines,
            Self::format_duration(report.elapsed)
        );

        Ok(report)
    }

    // Format duration in a human-readable format (HH:MM:SS)
    pub fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
