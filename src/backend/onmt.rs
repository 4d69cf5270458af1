/*!
 * OpenNMT subprocess backend.
 *
 * Each call writes the encoded batch to a temporary file, runs the engine
 * once over it and reads the predictions back from a second temporary file.
 */

use async_trait::async_trait;
use log::{debug, error, info};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::{Duration, Instant};
use tokio::process::Command;

use crate::app_config::BackendConfig;
use crate::errors::BackendError;
use super::{TranslationBackend, TranslationJob};

/// Backend that shells out to `onmt_translate` (or a compatible command)
#[derive(Debug, Clone)]
pub struct OnmtBackend {
    config: BackendConfig,
}

impl OnmtBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Arguments passed to the engine for one batch
    pub fn command_args(&self, source_path: &Path, output_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-model".into(),
            self.config.model.clone().into_os_string(),
            "-src".into(),
            source_path.as_os_str().to_os_string(),
            "-output".into(),
            output_path.as_os_str().to_os_string(),
            "-gpu".into(),
            self.config.gpu.to_string().into(),
            "-min_length".into(),
            self.config.min_length.to_string().into(),
        ];

        if self.config.replace_unk {
            args.push("-replace_unk".into());
        }
        if self.config.verbose {
            args.push("-verbose".into());
        }

        args
    }

    async fn run_engine(&self, job: &TranslationJob) -> Result<Output, BackendError> {
        let args = self.command_args(job.input_path(), job.output_path());
        debug!("Running {} {:?}", self.config.command, args);

        let mut command = Command::new(&self.config.command);
        command
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        let output_future = command.output();

        let result = match self.config.timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), output_future)
                .await
                .map_err(|_| BackendError::Timeout(secs))?,
            None => output_future.await,
        };

        result.map_err(|e| BackendError::Spawn {
            command: self.config.command.clone(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl TranslationBackend for OnmtBackend {
    async fn translate_batch(&self, encoded_lines: &[String]) -> Result<Vec<String>, BackendError> {
        if encoded_lines.is_empty() {
            debug!("Empty batch, skipping translation engine");
            return Ok(Vec::new());
        }

        let job = TranslationJob::create(encoded_lines, self.config.temp_dir.as_deref())?;

        let start_time = Instant::now();
        let output = self.run_engine(&job).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("Error during translation:\n{}", stderr);
            return Err(BackendError::Execution {
                status: output.status.code(),
                stderr,
            });
        }

        let diagnostics = String::from_utf8_lossy(&output.stderr);
        if !diagnostics.trim().is_empty() {
            info!("{}", diagnostics.trim_end());
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("{}", stdout.trim_end());
        }

        info!(
            "Translation completed in {:.2} seconds.",
            start_time.elapsed().as_secs_f64()
        );

        job.read_output()
    }

    fn name(&self) -> &str {
        &self.config.command
    }
}
