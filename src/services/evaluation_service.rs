use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    constants::{prompts, EVAL_MAX_TOKENS},
    errors::{AppError, AppResult},
    models::domain::{ConversationTurn, EvaluationResult, Role},
    services::completion_client::{CompletionClient, CompletionRequest},
};

// The service is instructed not to fence its output, but sometimes does
// anyway.
static FENCE_JSON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*").expect("FENCE_JSON_RE is a valid regex pattern"));
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*").expect("FENCE_RE is a valid regex pattern"));

#[derive(Debug, Deserialize)]
struct VerdictDto {
    score: f64,
    #[serde(default)]
    feedback: String,
}

/// Turns a completed conversation and a rubric into a numeric verdict.
///
/// `grade` returns an explicit `Result`; the caller applies
/// `EvaluationResult::unavailable()` as the fail-open policy.
pub struct EvaluationPipeline {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl EvaluationPipeline {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub async fn grade(
        &self,
        turns: &[ConversationTurn],
        criteria: &[String],
    ) -> AppResult<EvaluationResult> {
        let prompt = prompts::evaluation_prompt(
            &Self::render_criteria(criteria),
            &Self::render_transcript(turns),
        );

        let reply = self
            .client
            .complete(CompletionRequest {
                model: self.model.clone(),
                max_tokens: EVAL_MAX_TOKENS,
                system: prompts::GRADING_SYSTEM_PROMPT.to_string(),
                messages: vec![ConversationTurn::user(prompt)],
            })
            .await?;

        Self::parse_verdict(&reply)
    }

    fn render_criteria(criteria: &[String]) -> String {
        if criteria.is_empty() {
            return prompts::DEFAULT_CRITERION.to_string();
        }
        criteria
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}", i + 1, c))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_transcript(turns: &[ConversationTurn]) -> String {
        turns
            .iter()
            .map(|turn| {
                let label = match turn.role {
                    Role::User => "STUDENT",
                    Role::Assistant => "AI",
                };
                format!("{}: {}", label, turn.content)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn parse_verdict(raw: &str) -> AppResult<EvaluationResult> {
        let without_json_fence = FENCE_JSON_RE.replace_all(raw.trim(), "");
        let cleaned = FENCE_RE.replace_all(&without_json_fence, "");

        let verdict: VerdictDto = serde_json::from_str(cleaned.trim())
            .map_err(|e| AppError::EvaluationError(format!("Malformed verdict: {}", e)))?;

        let feedback = if verdict.feedback.is_empty() {
            prompts::DEFAULT_FEEDBACK.to_string()
        } else {
            verdict.feedback
        };

        Ok(EvaluationResult::new(verdict.score.round() as i32, feedback))
    }
}
