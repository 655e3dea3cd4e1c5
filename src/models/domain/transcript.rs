use serde::{Deserialize, Serialize};

/// One spoken line of a scripted multi-speaker dialogue.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranscriptMessage {
    pub speaker: String,
    /// Spoken text with bracketed stage directions removed.
    pub text: String,
    /// Timestamp context (`mm:ss`) in effect when the line was spoken;
    /// empty when no marker preceded it.
    pub time: String,
    pub stage_directions: Vec<String>,
}
