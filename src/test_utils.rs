use crate::models::domain::{
    AssignmentDefinition, Question, QuestionFeedback, QuizSpec, ScenarioSpec,
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A four-question single-choice quiz.
    pub fn quiz_spec() -> QuizSpec {
        fn question(id: &str, text: &str, correct_index: usize) -> Question {
            Question {
                id: id.to_string(),
                text: text.to_string(),
                options: vec![
                    "Logic and data".to_string(),
                    "Emotion, justified by logic".to_string(),
                    "Price and value comparison".to_string(),
                    "Relationship history".to_string(),
                ],
                correct_index,
                feedback: QuestionFeedback {
                    correct: "Correct!".to_string(),
                    incorrect: "Not quite.".to_string(),
                },
            }
        }

        QuizSpec {
            title: "Knowledge Check".to_string(),
            description: "Test your understanding of the assigned reading.".to_string(),
            questions: vec![
                question("q1", "What is the primary driver of buying decisions?", 1),
                question("q2", "What should precede the pitch?", 0),
                question("q3", "How should resistance be handled?", 2),
                question("q4", "What closes a discovery call?", 3),
            ],
        }
    }

    pub fn scenario_spec(max_turns: u32) -> ScenarioSpec {
        ScenarioSpec {
            title: "The Tense Demo Call".to_string(),
            description: "Navigate a product demo with a skeptical prospect.".to_string(),
            role_label: "Your Role: Account Executive".to_string(),
            ai_avatar_label: "PAT".to_string(),
            max_turns,
            system_prompt: "You are Pat, a skeptical VP of Operations.".to_string(),
            opening_message: "Yeah, I've got about 20 minutes. Go ahead.".to_string(),
            scenario_context: "<strong>The Setup:</strong> A Zoom demo with Pat Chen.".to_string(),
            evaluation_criteria: vec![
                "Did the student ask discovery questions before pitching?".to_string(),
                "Did they handle resistance professionally?".to_string(),
            ],
        }
    }

    pub fn assignment() -> AssignmentDefinition {
        AssignmentDefinition {
            slug: "reading_the_room_ch4_5".to_string(),
            title: "Reading the Room".to_string(),
            chapter_label: "Chapters 4–5".to_string(),
            p1: quiz_spec(),
            p2: scenario_spec(10),
            api_model: "test-model".to_string(),
        }
    }

    /// Opening content in the scripted-transcript format, with the trailing
    /// analysis block authored in the same field.
    pub fn transcript_opening() -> String {
        "\
**[0:00]**

**Jordan:** Thanks everyone for making the time today.

**Dr. Osei:** [checks watch] We have thirty minutes.

**Marcus:** Let's get into the numbers.

**Sandra:** My team needs to know the training burden.

**Elliot:** And I need the total cost of ownership.

---

**YOUR ANALYSIS IS DUE BELOW**

Submit your analysis responding to the questions above.
"
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_are_valid_definitions() {
        assignment().validate().expect("fixture should validate");
    }

    #[test]
    fn test_fixture_quiz_has_four_questions() {
        assert_eq!(quiz_spec().questions.len(), 4);
    }

    #[test]
    fn test_fixture_transcript_opening_parses() {
        let parsed = crate::services::transcript_parser::parse(&transcript_opening());
        assert_eq!(parsed.expect("should parse").len(), 5);
    }
}
