use std::sync::Arc;

use crate::evaluation::evaluator::Evaluator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable evaluator. Default: LlmEvaluator (Gemini). Stateless between calls.
    pub evaluator: Arc<dyn Evaluator>,
}
