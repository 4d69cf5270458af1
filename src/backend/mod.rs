/*!
 * Translation backend adapters.
 *
 * The pipeline talks to the translation engine only through the
 * `TranslationBackend` trait:
 * - `onmt`: runs OpenNMT's `onmt_translate` as a subprocess over batch files
 * - `job`: temporary batch files owned by a single engine call
 * - `mock`: in-process backend with scripted behavior, for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::BackendError;

pub use self::job::TranslationJob;
pub use self::mock::{MockBackend, MockBehavior};
pub use self::onmt::OnmtBackend;

/// Common trait for translation backends
///
/// This trait defines the interface that all backend implementations must follow,
/// allowing the engine to be swapped for a stub in tests.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate a batch of encoded source lines
    ///
    /// # Arguments
    /// * `encoded_lines` - Subword-encoded source lines, in corpus order
    ///
    /// # Returns
    /// * `Result<Vec<String>, BackendError>` - Encoded target lines in the order the
    ///   engine produced them. The count is not checked against the input.
    async fn translate_batch(&self, encoded_lines: &[String]) -> Result<Vec<String>, BackendError>;

    /// Short name used in log messages
    fn name(&self) -> &str;
}

pub mod job;
pub mod mock;
pub mod onmt;
