use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    events::{EventBus, NoticeKind},
    models::domain::{AssignmentDefinition, HostReportEvent, TranscriptMessage},
    services::{
        completion_client::CompletionClient,
        host_report::HostReportBridge,
        quiz_service::QuizAttempt,
        scenario_session::ScenarioSession,
        transcript_parser::{self, MarkerSplit},
    },
    stores::AssignmentStore,
};

/// Top-level orchestrator for one single-user session: loads the assignment,
/// owns both part states, aggregates scores and drives host reporting.
pub struct SessionController {
    assignment: AssignmentDefinition,
    quiz: QuizAttempt,
    scenario: ScenarioSession,
    bridge: HostReportBridge,
    events: EventBus,
}

impl SessionController {
    /// Fetches the assignment by slug and initializes session state. A
    /// missing assignment is terminal: the session never starts.
    pub async fn load(
        store: &dyn AssignmentStore,
        slug: &str,
        client: Arc<dyn CompletionClient>,
        bridge: HostReportBridge,
        events: EventBus,
        default_model: &str,
    ) -> AppResult<Self> {
        let assignment = store
            .fetch_assignment(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assignment '{}' not found", slug)))?;

        let model = if assignment.api_model.is_empty() {
            default_model.to_string()
        } else {
            assignment.api_model.clone()
        };

        let quiz = QuizAttempt::new(assignment.p1.clone());
        let scenario = ScenarioSession::new(assignment.p2.clone(), model, client);

        bridge.report(HostReportEvent::Init);
        log::info!("Session started for assignment '{}'", assignment.slug);

        Ok(Self {
            assignment,
            quiz,
            scenario,
            bridge,
            events,
        })
    }

    pub fn assignment(&self) -> &AssignmentDefinition {
        &self.assignment
    }

    pub fn quiz(&self) -> &QuizAttempt {
        &self.quiz
    }

    pub fn scenario(&self) -> &ScenarioSession {
        &self.scenario
    }

    pub fn select_answer(&mut self, question_id: &str, option_index: usize) -> bool {
        self.quiz.select_answer(question_id, option_index)
    }

    pub fn submit_quiz(&mut self) -> AppResult<()> {
        self.quiz.submit()?;
        self.events.publish(
            NoticeKind::Success,
            format!("Part 1 submitted: {}/25 points", self.quiz.points()),
        );
        Ok(())
    }

    /// Forwards one user message to the scenario; when this message completes
    /// the scenario, the aggregate result is reported to the host.
    pub async fn send_message(&mut self, input: &str) -> AppResult<()> {
        let was_complete = self.scenario.is_complete();
        self.scenario.submit(input).await?;

        if !was_complete && self.scenario.is_complete() {
            self.bridge.report_final(self.aggregate_points());
            self.events.publish(
                NoticeKind::Success,
                format!("Part 2 complete: {}/25 points", self.scenario.points()),
            );
        }

        Ok(())
    }

    /// Aggregate final score out of 50, always recomputed from current state.
    pub fn aggregate_points(&self) -> i32 {
        self.quiz.points() + self.scenario.points()
    }

    /// 0 before quiz submission, 50 after, 100 once the scenario completes.
    pub fn progress(&self) -> u8 {
        if self.scenario.is_complete() {
            100
        } else if self.quiz.is_submitted() {
            50
        } else {
            0
        }
    }

    /// Manual "submit to host" action. Idempotent: re-emits score and
    /// completion from the current aggregate, never accumulating.
    pub fn submit_to_host(&self) {
        self.bridge.report_final(self.aggregate_points());
    }

    /// Routes the scenario opening through the transcript parser for display.
    /// `None` means the opening is rendered as a single plain message.
    pub fn opening_transcript(&self) -> Option<(Vec<TranscriptMessage>, MarkerSplit)> {
        let opening = &self.assignment.p2.opening_message;
        transcript_parser::parse(opening)
            .map(|messages| (messages, transcript_parser::split_at_marker(opening)))
    }
}
