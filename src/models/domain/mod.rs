pub mod assignment;
pub mod conversation;
pub mod evaluation;
pub mod report;
pub mod transcript;

pub use assignment::{AssignmentDefinition, Question, QuestionFeedback, QuizSpec, ScenarioSpec};
pub use conversation::{ConversationTurn, Role};
pub use evaluation::EvaluationResult;
pub use report::{HostReportEvent, HostReportMessage};
pub use transcript::TranscriptMessage;
