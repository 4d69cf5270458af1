/*!
 * Mock backend implementation for testing.
 *
 * This module provides a backend that simulates different engine behaviors:
 * - `MockBackend::echo()` - Returns the encoded lines unchanged
 * - `MockBackend::truncating(n)` - Returns only the first `n` lines
 * - `MockBackend::failing()` - Always fails like an engine exiting with status 1
 * - `MockBackend::mapping(f)` - Applies `f` to every line
 */

use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::BackendError;
use super::TranslationBackend;

/// Behavior mode for the mock backend
#[derive(Clone, Copy)]
pub enum MockBehavior {
    /// Return every line unchanged
    Echo,
    /// Return only the first `keep` lines
    Truncate { keep: usize },
    /// Fail with an execution error
    Failing,
    /// Apply a function to every line
    Map(fn(&str) -> String),
}

impl fmt::Debug for MockBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Echo => write!(f, "Echo"),
            Self::Truncate { keep } => write!(f, "Truncate {{ keep: {} }}", keep),
            Self::Failing => write!(f, "Failing"),
            Self::Map(_) => write!(f, "Map"),
        }
    }
}

/// Mock backend for testing pipeline behavior
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of batches received
    call_count: Arc<AtomicUsize>,
    /// Last batch received
    last_batch: Mutex<Vec<String>>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_batch: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn truncating(keep: usize) -> Self {
        Self::new(MockBehavior::Truncate { keep })
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn mapping(f: fn(&str) -> String) -> Self {
        Self::new(MockBehavior::Map(f))
    }

    /// Number of batches translated so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Shared handle on the call counter, usable after the backend is moved into a pipeline
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }

    /// Copy of the most recent batch
    pub fn last_batch(&self) -> Vec<String> {
        self.last_batch
            .lock()
            .map(|batch| batch.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate_batch(&self, encoded_lines: &[String]) -> Result<Vec<String>, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut batch) = self.last_batch.lock() {
            *batch = encoded_lines.to_vec();
        }

        match self.behavior {
            MockBehavior::Echo => Ok(encoded_lines.to_vec()),
            MockBehavior::Truncate { keep } => {
                Ok(encoded_lines.iter().take(keep).cloned().collect())
            }
            MockBehavior::Failing => Err(BackendError::Execution {
                status: Some(1),
                stderr: "mock engine failure".to_string(),
            }),
            MockBehavior::Map(f) => Ok(encoded_lines.iter().map(|line| f(line)).collect()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
