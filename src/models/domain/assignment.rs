use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A published two-part assignment as served by the assignment store.
///
/// The wire format follows the store's JSON (camelCase keys, `correct` for
/// the correct-option index). Definitions are validated at the store boundary
/// so malformed ones never reach the session engine.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDefinition {
    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    pub chapter_label: String,

    #[validate(nested)]
    pub p1: QuizSpec,

    #[validate(nested)]
    pub p2: ScenarioSpec,

    /// Completion Service model id; empty means "use the configured default".
    #[serde(default)]
    pub api_model: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[validate(schema(function = validate_quiz_spec))]
#[serde(rename_all = "camelCase")]
pub struct QuizSpec {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[validate(schema(function = validate_question))]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub text: String,

    #[validate(length(min = 2))]
    pub options: Vec<String>,

    #[serde(rename = "correct")]
    pub correct_index: usize,

    #[serde(default)]
    pub feedback: QuestionFeedback,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct QuestionFeedback {
    #[serde(default)]
    pub correct: String,
    #[serde(default)]
    pub incorrect: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSpec {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub role_label: String,

    #[serde(default)]
    pub ai_avatar_label: String,

    #[validate(range(min = 1))]
    pub max_turns: u32,

    #[validate(length(min = 1))]
    pub system_prompt: String,

    #[serde(default)]
    pub opening_message: String,

    #[serde(default)]
    pub scenario_context: String,

    #[serde(default)]
    pub evaluation_criteria: Vec<String>,
}

fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if question.correct_index >= question.options.len() {
        return Err(ValidationError::new("correct_index_out_of_range"));
    }
    Ok(())
}

fn validate_quiz_spec(spec: &QuizSpec) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for question in &spec.questions {
        if !seen.insert(question.id.as_str()) {
            return Err(ValidationError::new("duplicate_question_id"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, correct_index: usize) -> Question {
        Question {
            id: id.to_string(),
            text: "What drives buying decisions?".to_string(),
            options: vec!["Logic".to_string(), "Emotion".to_string()],
            correct_index,
            feedback: QuestionFeedback::default(),
        }
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        assert!(question("q1", 1).validate().is_ok());
        assert!(question("q1", 2).validate().is_err());
    }

    #[test]
    fn quiz_spec_rejects_duplicate_question_ids() {
        let spec = QuizSpec {
            title: String::new(),
            description: String::new(),
            questions: vec![question("q1", 0), question("q1", 1)],
        };

        assert!(spec.validate().is_err());
    }

    #[test]
    fn quiz_spec_rejects_empty_question_list() {
        let spec = QuizSpec {
            title: String::new(),
            description: String::new(),
            questions: vec![],
        };

        assert!(spec.validate().is_err());
    }

    #[test]
    fn question_parses_store_wire_format() {
        let json = r#"{
            "id": "q1",
            "text": "What is the primary driver of buying decisions?",
            "options": ["Logic and data", "Emotion, justified by logic"],
            "correct": 1,
            "feedback": { "correct": "Yes.", "incorrect": "No." }
        }"#;

        let parsed: Question = serde_json::from_str(json).expect("question should parse");
        assert_eq!(parsed.correct_index, 1);
        assert_eq!(parsed.feedback.correct, "Yes.");
    }

    #[test]
    fn scenario_spec_requires_at_least_one_turn() {
        let spec = ScenarioSpec {
            title: String::new(),
            description: String::new(),
            role_label: String::new(),
            ai_avatar_label: String::new(),
            max_turns: 0,
            system_prompt: "You are Pat.".to_string(),
            opening_message: String::new(),
            scenario_context: String::new(),
            evaluation_criteria: vec![],
        };

        assert!(spec.validate().is_err());
    }
}
