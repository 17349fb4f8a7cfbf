pub mod evaluator;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
