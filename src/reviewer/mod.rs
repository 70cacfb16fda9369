//! Reviewer trait and timeout enforcement.
//!
//! The LLM call itself lives outside this crate: implementations own
//! prompt templating, model selection, and token budgeting. This module
//! only defines the seam and the one bound worth enforcing here — a
//! caller-visible timeout on the outbound call.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ContextPayload;

/// Errors from the reviewer collaborator.
#[derive(Error, Debug)]
pub enum ReviewerError {
    #[error("review call timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("reviewer error: {0}")]
    Backend(String),
}

/// An opaque review function: context payload in, unstructured review
/// text out.
#[async_trait]
pub trait Reviewer: Send + Sync {
    async fn review(&self, payload: &ContextPayload) -> Result<String, ReviewerError>;
}

/// Run a review with a hard timeout.
///
/// On expiry the invocation fails with [`ReviewerError::Timeout`]; retrying
/// is the caller's decision, not this crate's.
pub async fn review_with_timeout(
    reviewer: &dyn Reviewer,
    payload: &ContextPayload,
    timeout: Duration,
) -> Result<String, ReviewerError> {
    tokio::time::timeout(timeout, reviewer.review(payload))
        .await
        .map_err(|_| ReviewerError::Timeout {
            secs: timeout.as_secs(),
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;
    use crate::context::{assemble, ProjectContext};
    use crate::models::{CommitMetadata, CommitRef};

    struct CannedReviewer(String);

    #[async_trait]
    impl Reviewer for CannedReviewer {
        async fn review(&self, _payload: &ContextPayload) -> Result<String, ReviewerError> {
            Ok(self.0.clone())
        }
    }

    struct StallingReviewer;

    #[async_trait]
    impl Reviewer for StallingReviewer {
        async fn review(&self, _payload: &ContextPayload) -> Result<String, ReviewerError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!("sleep outlives every test timeout")
        }
    }

    fn payload() -> ContextPayload {
        assemble(
            CommitRef::new("abc123"),
            CommitMetadata::default(),
            Some("diff".into()),
            Vec::new(),
            Vec::new(),
            ProjectContext::default(),
            &ContextConfig::default(),
        )
    }

    #[tokio::test]
    async fn fast_review_passes_through() {
        let reviewer = CannedReviewer("looks good".into());
        let text = review_with_timeout(&reviewer, &payload(), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(text, "looks good");
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_review_times_out() {
        let result =
            review_with_timeout(&StallingReviewer, &payload(), Duration::from_secs(30)).await;
        match result {
            Err(ReviewerError::Timeout { secs }) => assert_eq!(secs, 30),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
