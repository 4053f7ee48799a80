use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Candidate, Evaluation};

use super::prompt_builder::{SYSTEM_PROMPT, build_user_prompt};

pub struct EvaluationService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    strict_schema: bool,
}

impl<L> EvaluationService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, strict_schema: bool) -> Self {
        Self {
            llm_client,
            strict_schema,
        }
    }

    /// Asks the evaluator to grade the candidates and merge the good ones.
    #[tracing::instrument(skip(self, candidates), fields(candidates = candidates.len()))]
    pub async fn evaluate(&self, candidates: &[Candidate]) -> Result<Evaluation, EvaluationError> {
        let prompt = build_user_prompt(candidates);

        let content = self
            .llm_client
            .complete_json(SYSTEM_PROMPT, &prompt)
            .await
            .map_err(EvaluationError::Completion)?;

        let evaluation = parse_evaluation(&content)?;

        if self.strict_schema {
            let languages: Vec<_> = candidates.iter().map(|c| c.lang).collect();
            let missing = evaluation.missing_parts(&languages);
            if !missing.is_empty() {
                return Err(EvaluationError::SchemaMismatch(format!(
                    "missing {}",
                    missing.join(", ")
                )));
            }
        }

        tracing::info!(
            verdicts = evaluation.evaluations.as_ref().map_or(0, Vec::len),
            merged = evaluation.merged.is_some(),
            "Evaluation completed"
        );

        Ok(evaluation)
    }
}

/// Parses evaluator output. Absent keys are accepted; present keys must match
/// the requested schema.
pub fn parse_evaluation(content: &str) -> Result<Evaluation, EvaluationError> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| EvaluationError::InvalidJson(e.to_string()))?;

    serde_json::from_value(value).map_err(|e| EvaluationError::SchemaMismatch(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("completion: {0}")]
    Completion(LlmClientError),
    #[error("evaluator returned invalid json: {0}")]
    InvalidJson(String),
    #[error("evaluation does not match schema: {0}")]
    SchemaMismatch(String),
}
