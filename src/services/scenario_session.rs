use std::sync::Arc;

use crate::{
    constants::{prompts::CONNECTION_ERROR_MESSAGE, REPLY_MAX_TOKENS},
    errors::{AppError, AppResult},
    models::domain::{ConversationTurn, EvaluationResult, ScenarioSpec},
    services::{
        completion_client::{CompletionClient, CompletionRequest},
        evaluation_service::EvaluationPipeline,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingInput,
    Sending,
    Evaluating,
    Complete,
}

/// Turn-bounded conversation with the AI character.
///
/// Turns are a cost paid at submission: a failed reply neither refunds the
/// turn nor grants an extra one. At most one Completion Service call is ever
/// in flight, so turns append in strict call order by construction.
pub struct ScenarioSession {
    spec: ScenarioSpec,
    model: String,
    client: Arc<dyn CompletionClient>,
    evaluator: EvaluationPipeline,
    messages: Vec<ConversationTurn>,
    turns_used: u32,
    phase: SessionPhase,
    complete: bool,
    result: Option<EvaluationResult>,
}

impl ScenarioSession {
    pub fn new(spec: ScenarioSpec, model: impl Into<String>, client: Arc<dyn CompletionClient>) -> Self {
        let model = model.into();
        let mut messages = Vec::new();
        // The raw opening content is the first logical message for scoring,
        // even when the UI renders it as a parsed transcript.
        if !spec.opening_message.is_empty() {
            messages.push(ConversationTurn::assistant(spec.opening_message.clone()));
        }

        Self {
            evaluator: EvaluationPipeline::new(client.clone(), model.clone()),
            spec,
            model,
            client,
            messages,
            turns_used: 0,
            phase: SessionPhase::AwaitingInput,
            complete: false,
            result: None,
        }
    }

    /// Submits one user message and drives the state machine through the
    /// reply and, on the final turn, the evaluation step.
    pub async fn submit(&mut self, input: &str) -> AppResult<()> {
        let text = input.trim();

        if self.complete {
            return Err(AppError::ValidationError(
                "Scenario is already complete".to_string(),
            ));
        }
        if self.phase == SessionPhase::Sending {
            return Err(AppError::ValidationError(
                "A message is already in flight".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(AppError::ValidationError(
                "Message is empty".to_string(),
            ));
        }
        if self.turns_used >= self.spec.max_turns {
            return Err(AppError::ValidationError(
                "No turns remaining".to_string(),
            ));
        }

        self.messages.push(ConversationTurn::user(text));
        self.turns_used += 1;
        self.phase = SessionPhase::Sending;

        let request = CompletionRequest {
            model: self.model.clone(),
            max_tokens: REPLY_MAX_TOKENS,
            system: self.spec.system_prompt.clone(),
            messages: self.messages.clone(),
        };

        match self.client.complete(request).await {
            Ok(reply) => self.messages.push(ConversationTurn::assistant(reply)),
            Err(err) => {
                // Recover in-band: the failure is communicated as an
                // assistant turn and the session stays usable.
                log::warn!("Reply call failed ({}): {}", err.error_code(), err);
                self.messages
                    .push(ConversationTurn::assistant(CONNECTION_ERROR_MESSAGE));
            }
        }

        if self.turns_used >= self.spec.max_turns {
            self.evaluate().await;
        } else {
            self.phase = SessionPhase::AwaitingInput;
        }

        Ok(())
    }

    /// Resolves the verdict exactly once, applying the fail-open fallback
    /// when grading is unavailable.
    async fn evaluate(&mut self) {
        self.phase = SessionPhase::Evaluating;

        let verdict = match self
            .evaluator
            .grade(&self.messages, &self.spec.evaluation_criteria)
            .await
        {
            Ok(verdict) => verdict,
            Err(err) => {
                log::warn!("Evaluation failed ({}): {}", err.error_code(), err);
                EvaluationResult::unavailable()
            }
        };

        log::info!(
            "Scenario complete: score {}, {} points",
            verdict.score,
            verdict.points
        );
        self.result = Some(verdict);
        self.complete = true;
        self.phase = SessionPhase::Complete;
    }

    pub fn spec(&self) -> &ScenarioSpec {
        &self.spec
    }

    pub fn messages(&self) -> &[ConversationTurn] {
        &self.messages
    }

    pub fn turns_used(&self) -> u32 {
        self.turns_used
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    pub fn points(&self) -> i32 {
        self.result.as_ref().map(|r| r.points).unwrap_or(0)
    }
}
