pub mod prompts;

/// Maximum points for each part of the assignment.
pub const PART_POINTS_MAX: i32 = 25;

/// Combined score scale reported to the host.
pub const SCORE_MAX: i32 = 50;

/// Minimum aggregate points for a passing result (70% of the 50-point scale).
pub const PASS_THRESHOLD: i32 = 35;

/// Token budget for in-character scenario replies.
pub const REPLY_MAX_TOKENS: u32 = 512;

/// Token budget for the grading verdict.
pub const EVAL_MAX_TOKENS: u32 = 300;

/// Source tag on every message toward the hosting frame.
pub const REPORT_SOURCE: &str = "saleseq";
