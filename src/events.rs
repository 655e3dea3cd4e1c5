use tokio::sync::broadcast;
use uuid::Uuid;

/// Transient user-facing notice published while a session runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Explicit notice bus injected into the components that publish to it,
/// so independent sessions in tests never share subscriber state.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Notice>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    /// Fire-and-forget: publishing with no live subscribers is not an error.
    pub fn publish(&self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let _ = self.tx.send(notice);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}
