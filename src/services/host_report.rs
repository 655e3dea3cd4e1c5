use std::sync::Arc;
use tokio::sync::mpsc;

use crate::models::domain::{HostReportEvent, HostReportMessage};

/// Cross-boundary delivery of report messages toward the hosting frame.
/// Fire-and-forget: no acknowledgment, no retry; the host is expected to be
/// idempotent on repeated receipt of the same event.
pub trait ReportSink: Send + Sync {
    fn deliver(&self, message: HostReportMessage);
}

/// Emits the fixed set of report events through an injected sink.
#[derive(Clone)]
pub struct HostReportBridge {
    sink: Arc<dyn ReportSink>,
}

impl HostReportBridge {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    pub fn report(&self, event: HostReportEvent) {
        log::debug!("Host report: {:?}", event);
        self.sink.deliver(HostReportMessage::new(event));
    }

    /// Emits the score event followed by the completion event for the given
    /// aggregate raw score.
    pub fn report_final(&self, raw: i32) {
        self.report(HostReportEvent::score(raw));
        self.report(HostReportEvent::complete(raw));
    }
}

/// In-process sink delivering over an unbounded channel; stands in for the
/// host frame's message channel.
pub struct ChannelReportSink {
    tx: mpsc::UnboundedSender<HostReportMessage>,
}

impl ChannelReportSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostReportMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ReportSink for ChannelReportSink {
    fn deliver(&self, message: HostReportMessage) {
        // A disconnected host cannot fail the session.
        let _ = self.tx.send(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge() -> (HostReportBridge, mpsc::UnboundedReceiver<HostReportMessage>) {
        let (sink, rx) = ChannelReportSink::new();
        (HostReportBridge::new(Arc::new(sink)), rx)
    }

    #[test]
    fn report_wraps_events_with_the_source_tag() {
        let (bridge, mut rx) = bridge();

        bridge.report(HostReportEvent::Init);

        let message = rx.try_recv().expect("message should be delivered");
        assert_eq!(message.source, "saleseq");
        assert_eq!(message.event, HostReportEvent::Init);
    }

    #[test]
    fn report_final_emits_score_then_complete() {
        let (bridge, mut rx) = bridge();

        bridge.report_final(40);

        assert_eq!(
            rx.try_recv().unwrap().event,
            HostReportEvent::Score { raw: 40, max: 50 }
        );
        assert_eq!(
            rx.try_recv().unwrap().event,
            HostReportEvent::Complete { passed: true }
        );
    }

    #[test]
    fn report_final_below_threshold_is_not_passed() {
        let (bridge, mut rx) = bridge();

        bridge.report_final(34);

        let _score = rx.try_recv().unwrap();
        assert_eq!(
            rx.try_recv().unwrap().event,
            HostReportEvent::Complete { passed: false }
        );
    }

    #[test]
    fn delivery_to_a_dropped_receiver_is_silent() {
        let (sink, rx) = ChannelReportSink::new();
        drop(rx);
        let bridge = HostReportBridge::new(Arc::new(sink));

        bridge.report(HostReportEvent::Init);
    }
}
