use serde::Serialize;

use crate::constants::{PASS_THRESHOLD, REPORT_SOURCE, SCORE_MAX};

/// Events emitted toward the hosting frame. The field names and the 50-point
/// scale are parsed literally by the host's scoring bridge and must not
/// change shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HostReportEvent {
    Init,
    Score { raw: i32, max: i32 },
    Complete { passed: bool },
}

impl HostReportEvent {
    pub fn score(raw: i32) -> Self {
        HostReportEvent::Score {
            raw,
            max: SCORE_MAX,
        }
    }

    pub fn complete(raw: i32) -> Self {
        HostReportEvent::Complete {
            passed: raw >= PASS_THRESHOLD,
        }
    }
}

/// Envelope for the cross-boundary message channel; the fixed source tag
/// lets the host distinguish these events from unrelated traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HostReportMessage {
    pub source: &'static str,
    #[serde(flatten)]
    pub event: HostReportEvent,
}

impl HostReportMessage {
    pub fn new(event: HostReportEvent) -> Self {
        Self {
            source: REPORT_SOURCE,
            event,
        }
    }
}
