/// System prompt for the grading call. The service is told to skip markdown
/// fences, but responses are still de-fenced defensively before parsing.
pub const GRADING_SYSTEM_PROMPT: &str =
    "You are a grading assistant. Respond with only valid JSON, no markdown, no backticks, no extra text.";

/// Criterion used when a scenario defines no evaluation criteria of its own.
pub const DEFAULT_CRITERION: &str =
    "Overall quality of the student's sales technique, communication, and application of concepts.";

/// Verdict returned whenever grading fails for any reason. Fail-open: an
/// ungradeable session is treated as a passing one.
pub const FALLBACK_FEEDBACK: &str =
    "Scenario complete. Your responses were evaluated but detailed scoring was unavailable.";

/// Feedback used when the verdict JSON omits the feedback field.
pub const DEFAULT_FEEDBACK: &str = "Scenario complete.";

/// Assistant turn appended in-band when a scenario reply call fails.
pub const CONNECTION_ERROR_MESSAGE: &str = "[Connection error — please try again]";

/// Banner separating scripted transcript content from a trailing free-form
/// question block authored in the same field.
pub const ANALYSIS_DUE_MARKER: &str = "**YOUR ANALYSIS IS DUE BELOW";

/// Builds the grading prompt from the numbered rubric and the rendered
/// conversation transcript.
pub fn evaluation_prompt(criteria_text: &str, transcript: &str) -> String {
    format!(
        r#"You are an expert evaluator for a BYU-Idaho Professional Selling course using Sales EQ by Jeb Blount.

Evaluate the student's performance in the following conversation based on these specific criteria:

{criteria_text}

Here is the full conversation:

{transcript}

Score the student from 0-100. Be fair but rigorous — a student who gives vague or generic advice should score 40-60. A student who demonstrates specific knowledge of Blount's framework and gives actionable, persona-specific guidance should score 75-95. Only give 95+ for truly exceptional responses.

Respond with ONLY a JSON object, no other text:
{{"score": <number 0-100>, "feedback": "<2-3 sentences explaining what they did well and what they could improve>"}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_prompt_embeds_criteria_and_transcript() {
        let prompt = evaluation_prompt("1. Asked questions", "STUDENT: hi\n\nAI: hello");

        assert!(prompt.contains("1. Asked questions"));
        assert!(prompt.contains("STUDENT: hi"));
        assert!(prompt.contains("ONLY a JSON object"));
    }
}
