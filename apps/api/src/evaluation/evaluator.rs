//! Evaluator: pluggable backend that turns an evaluation prompt into response text.
//!
//! Default: `LlmEvaluator` (Gemini via `LlmClient`).
//!
//! `AppState` holds an `Arc<dyn Evaluator>` so tests can swap in a
//! deterministic stand-in without touching the network.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};

/// Produces response text for a prompt. Implementations must return the
/// backend's text as-is.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Gemini-backed evaluator. One remote call per prompt.
pub struct LlmEvaluator(pub LlmClient);

#[async_trait]
impl Evaluator for LlmEvaluator {
    async fn evaluate(&self, prompt: &str) -> Result<String, LlmError> {
        self.0.generate_text(prompt).await
    }
}


#[cfg(test)]
mod tests {
    use super::stubs::{FailingEvaluator, StaticEvaluator};
    use super::*;

    #[tokio::test]
    async fn test_stub_returns_text_unmodified() {
        let raw = "  {\"JD Match\":\"55%\"}\n";
        let evaluator = StaticEvaluator::new(raw);

        let response = evaluator.evaluate("prompt").await.unwrap();

        assert_eq!(response, raw);
        assert_eq!(evaluator.prompts(), vec!["prompt".to_string()]);
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let evaluator: Box<dyn Evaluator> = Box::new(FailingEvaluator::default());
        let err = evaluator.evaluate("prompt").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }
}
