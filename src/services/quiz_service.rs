use std::collections::HashMap;

use crate::{
    constants::PART_POINTS_MAX,
    errors::{AppError, AppResult},
    models::domain::QuizSpec,
};

/// One student's pass through the multiple-choice part.
///
/// The first answer to each question is final, and submission is a terminal,
/// idempotent state. Lives only in session memory.
pub struct QuizAttempt {
    spec: QuizSpec,
    answers: HashMap<String, usize>,
    submitted: bool,
    score_pct: i32,
    points: i32,
}

impl QuizAttempt {
    pub fn new(spec: QuizSpec) -> Self {
        Self {
            spec,
            answers: HashMap::new(),
            submitted: false,
            score_pct: 0,
            points: 0,
        }
    }

    /// Records an answer. Returns false (no state change) once the quiz is
    /// submitted, when the question already has an answer, and for unknown
    /// question ids or out-of-range option indexes.
    pub fn select_answer(&mut self, question_id: &str, option_index: usize) -> bool {
        if self.submitted || self.answers.contains_key(question_id) {
            return false;
        }

        let Some(question) = self.spec.questions.iter().find(|q| q.id == question_id) else {
            return false;
        };
        if option_index >= question.options.len() {
            return false;
        }

        self.answers.insert(question_id.to_string(), option_index);
        true
    }

    /// Scores the attempt. Errors while unanswered questions remain; a
    /// repeat call after submission is a no-op.
    pub fn submit(&mut self) -> AppResult<()> {
        if self.submitted {
            return Ok(());
        }

        let total = self.spec.questions.len();
        if self.answers.len() < total {
            return Err(AppError::ValidationError(format!(
                "{} of {} questions answered",
                self.answers.len(),
                total
            )));
        }

        let correct = self
            .spec
            .questions
            .iter()
            .filter(|q| self.answers.get(&q.id) == Some(&q.correct_index))
            .count();

        self.score_pct = round_ratio(correct, total, 100.0);
        self.points = round_ratio(correct, total, f64::from(PART_POINTS_MAX));
        self.submitted = true;

        log::info!(
            "Quiz submitted: {}/{} correct, {} points",
            correct,
            total,
            self.points
        );
        Ok(())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn score_pct(&self) -> i32 {
        self.score_pct
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn total_questions(&self) -> usize {
        self.spec.questions.len()
    }

    pub fn answer_for(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }
}

fn round_ratio(correct: usize, total: usize, scale: f64) -> i32 {
    (correct as f64 / total as f64 * scale).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn answer_all(attempt: &mut QuizAttempt, correct: usize) {
        let questions = fixtures::quiz_spec().questions;
        for (i, question) in questions.iter().enumerate() {
            let index = if i < correct {
                question.correct_index
            } else {
                // Any index other than the correct one.
                (question.correct_index + 1) % question.options.len()
            };
            assert!(attempt.select_answer(&question.id, index));
        }
    }

    #[test]
    fn three_of_four_correct_scores_19_points_75_pct() {
        let mut attempt = QuizAttempt::new(fixtures::quiz_spec());
        answer_all(&mut attempt, 3);

        attempt.submit().expect("submit should succeed");

        assert_eq!(attempt.points(), 19);
        assert_eq!(attempt.score_pct(), 75);
    }

    #[test]
    fn all_correct_scores_full_points() {
        let mut attempt = QuizAttempt::new(fixtures::quiz_spec());
        answer_all(&mut attempt, 4);

        attempt.submit().unwrap();

        assert_eq!(attempt.points(), 25);
        assert_eq!(attempt.score_pct(), 100);
    }

    #[test]
    fn none_correct_scores_zero() {
        let mut attempt = QuizAttempt::new(fixtures::quiz_spec());
        answer_all(&mut attempt, 0);

        attempt.submit().unwrap();

        assert_eq!(attempt.points(), 0);
        assert_eq!(attempt.score_pct(), 0);
    }

    #[test]
    fn first_answer_is_final() {
        let mut attempt = QuizAttempt::new(fixtures::quiz_spec());

        assert!(attempt.select_answer("q1", 0));
        assert!(!attempt.select_answer("q1", 1));
        assert_eq!(attempt.answer_for("q1"), Some(0));
    }

    #[test]
    fn select_rejects_unknown_question_and_bad_index() {
        let mut attempt = QuizAttempt::new(fixtures::quiz_spec());

        assert!(!attempt.select_answer("nope", 0));
        assert!(!attempt.select_answer("q1", 99));
        assert_eq!(attempt.answered_count(), 0);
    }

    #[test]
    fn submit_rejects_incomplete_attempt() {
        let mut attempt = QuizAttempt::new(fixtures::quiz_spec());
        attempt.select_answer("q1", 0);

        let result = attempt.submit();

        assert!(result.is_err());
        assert!(!attempt.is_submitted());
    }

    #[test]
    fn submitted_state_is_terminal_and_idempotent() {
        let mut attempt = QuizAttempt::new(fixtures::quiz_spec());
        answer_all(&mut attempt, 2);
        attempt.submit().unwrap();
        let points = attempt.points();

        // Repeat submit is a no-op, and answers are frozen.
        attempt.submit().unwrap();
        assert!(!attempt.select_answer("q1", 1));
        assert_eq!(attempt.points(), points);
    }
}
