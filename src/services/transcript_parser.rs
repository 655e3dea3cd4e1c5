use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::prompts::ANALYSIS_DUE_MARKER;
use crate::models::domain::TranscriptMessage;

/// Minimum number of speaker-lines before text is treated as a transcript.
/// Short dialogue snippets below this stay a single plain message.
const MIN_SPEAKER_LINES: usize = 4;

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*\[(\d+:\d+)\]\*\*$").expect("TIMESTAMP_RE is a valid regex pattern")
});

static SPEAKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*(.+?):\*\*\s*(.+)$").expect("SPEAKER_RE is a valid regex pattern")
});

static STAGE_DIRECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("STAGE_DIRECTION_RE is a valid regex pattern"));

/// Parses scripted dialogue into structured speaker turns.
///
/// Line-oriented grammar: blank lines and a lone `---` are ignored, a
/// `**[mm:ss]**` line sets the timestamp context for subsequent messages,
/// and `**Speaker:** dialogue` emits one message with bracketed segments
/// extracted into stage directions. Any other line is ignored. Returns
/// `None` when fewer than four speaker-lines are found.
pub fn parse(text: &str) -> Option<Vec<TranscriptMessage>> {
    let mut messages = Vec::new();
    let mut current_time = String::new();
    let mut speaker_lines = 0;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == "---" {
            continue;
        }

        if let Some(caps) = TIMESTAMP_RE.captures(trimmed) {
            current_time = caps[1].to_string();
            continue;
        }

        if let Some(caps) = SPEAKER_RE.captures(trimmed) {
            speaker_lines += 1;
            let speaker = caps[1].to_string();

            let mut stage_directions = Vec::new();
            let spoken = STAGE_DIRECTION_RE
                .replace_all(&caps[2], |dir: &regex::Captures| {
                    stage_directions.push(dir[1].to_string());
                    ""
                })
                .trim()
                .to_string();

            messages.push(TranscriptMessage {
                speaker,
                text: spoken,
                time: current_time.clone(),
                stage_directions,
            });
        }
    }

    if speaker_lines < MIN_SPEAKER_LINES {
        return None;
    }
    Some(messages)
}

/// Result of cutting authored content at the analysis-due banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerSplit {
    pub body: String,
    pub trailer: String,
}

/// Cuts the text at the first occurrence of the analysis-due banner so a
/// transcript and a trailing question block authored in one field can be
/// rendered separately. Without the banner, `trailer` is empty.
pub fn split_at_marker(text: &str) -> MarkerSplit {
    match text.find(ANALYSIS_DUE_MARKER) {
        Some(idx) => MarkerSplit {
            body: text[..idx].trim().to_string(),
            trailer: text[idx..].trim().to_string(),
        },
        None => MarkerSplit {
            body: text.to_string(),
            trailer: String::new(),
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Visual identity for a transcript speaker. Presentation-only; has no
/// bearing on scoring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeakerIdentity {
    pub initials: String,
    pub color: String,
    pub background: String,
    pub label: String,
    pub side: Side,
}

/// Maps speaker names to visual identities via substring match.
pub struct SpeakerRoster {
    entries: Vec<(String, SpeakerIdentity)>,
}

impl SpeakerRoster {
    pub fn new(entries: Vec<(String, SpeakerIdentity)>) -> Self {
        Self { entries }
    }

    /// Unmatched names get a deterministic fallback: first two characters
    /// uppercased, neutral palette, left side.
    pub fn identity_for(&self, name: &str) -> SpeakerIdentity {
        for (key, identity) in &self.entries {
            if name.contains(key.as_str()) {
                return identity.clone();
            }
        }

        SpeakerIdentity {
            initials: name.chars().take(2).collect::<String>().to_uppercase(),
            color: "#6b7280".to_string(),
            background: "#f9fafb".to_string(),
            label: name.to_string(),
            side: Side::Left,
        }
    }
}

impl Default for SpeakerRoster {
    fn default() -> Self {
        fn entry(
            key: &str,
            initials: &str,
            color: &str,
            background: &str,
            label: &str,
            side: Side,
        ) -> (String, SpeakerIdentity) {
            (
                key.to_string(),
                SpeakerIdentity {
                    initials: initials.to_string(),
                    color: color.to_string(),
                    background: background.to_string(),
                    label: label.to_string(),
                    side,
                },
            )
        }

        Self::new(vec![
            entry(
                "Jordan",
                "JH",
                "#3b82f6",
                "#eff6ff",
                "Jordan Hess — MedBridge Sales Rep",
                Side::Right,
            ),
            entry(
                "Dr. Osei",
                "PO",
                "#ef4444",
                "#fef2f2",
                "Dr. Patricia Osei — Chief of Surgery",
                Side::Left,
            ),
            entry(
                "Marcus",
                "MT",
                "#f59e0b",
                "#fffbeb",
                "Marcus Tran — VP of Operations",
                Side::Left,
            ),
            entry(
                "Sandra",
                "SK",
                "#10b981",
                "#ecfdf5",
                "Sandra Kowalski — Nurse Manager",
                Side::Left,
            ),
            entry(
                "Elliot",
                "EF",
                "#8b5cf6",
                "#f5f3ff",
                "Elliot Forde — Director of Finance",
                Side::Left,
            ),
        ])
    }
}
