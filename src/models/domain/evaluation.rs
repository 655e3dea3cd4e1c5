use serde::{Deserialize, Serialize};

use crate::constants::prompts::FALLBACK_FEEDBACK;

/// Numeric verdict for a completed scenario conversation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluationResult {
    /// Score on the 0-100 scale.
    pub score: i32,
    /// Score converted to the 25-point part scale.
    pub points: i32,
    pub feedback: String,
}

impl EvaluationResult {
    pub fn new(score: i32, feedback: impl Into<String>) -> Self {
        let score = score.clamp(0, 100);
        Self {
            score,
            points: (f64::from(score) * 0.25).round() as i32,
            feedback: feedback.into(),
        }
    }

    /// Fixed fail-open verdict applied when grading is unavailable.
    pub fn unavailable() -> Self {
        Self {
            score: 70,
            points: 18,
            feedback: FALLBACK_FEEDBACK.to_string(),
        }
    }
}
