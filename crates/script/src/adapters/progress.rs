// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;

/// Observational progress ticks. Never affects control flow.
#[async_trait]
pub trait ProgressHandler: Send + Sync {
    async fn start(&self, detail: &str);
    async fn next(&self, detail: &str);
    async fn end(&self, success: bool);
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::ProgressHandler;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded progress tick
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ProgressEvent {
        Start(String),
        Next(String),
        End(bool),
    }

    /// Fake progress handler for testing
    #[derive(Clone, Default)]
    pub struct FakeProgress {
        events: Arc<Mutex<Vec<ProgressEvent>>>,
    }

    impl FakeProgress {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded ticks
        pub fn events(&self) -> Vec<ProgressEvent> {
            self.events.lock().clone()
        }
    }

    #[async_trait]
    impl ProgressHandler for FakeProgress {
        async fn start(&self, detail: &str) {
            self.events.lock().push(ProgressEvent::Start(detail.to_string()));
        }

        async fn next(&self, detail: &str) {
            self.events.lock().push(ProgressEvent::Next(detail.to_string()));
        }

        async fn end(&self, success: bool) {
            self.events.lock().push(ProgressEvent::End(success));
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProgress, ProgressEvent};
