//! User-facing notices ("toasts") passed over a channel.
//!
//! Actions send [`Notice`]s through a [`Notifier`]; whichever front end owns
//! the [`NoticeReceiver`] decides how to show them.

use tokio::sync::mpsc;

/// Visual treatment of a notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Errors and rejected actions.
    Destructive,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Sending half of a notice channel.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl Notifier {
    /// Send a notice. A closed channel is not an error for the sender.
    pub fn send(&self, notice: Notice) {
        if let Err(e) = self.tx.send(notice) {
            tracing::debug!("Notice dropped, no receiver: {}", e.0.title);
        }
    }
}

/// Receiving half of a notice channel.
#[derive(Debug)]
pub struct NoticeReceiver {
    rx: mpsc::UnboundedReceiver<Notice>,
}

impl NoticeReceiver {
    /// Wait for the next notice. None once every notifier is dropped.
    pub async fn recv(&mut self) -> Option<Notice> {
        self.rx.recv().await
    }

    /// Take every notice already queued without waiting.
    pub fn drain(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Ok(notice) = self.rx.try_recv() {
            notices.push(notice);
        }
        notices
    }
}

/// Create a notice channel.
pub fn channel() -> (Notifier, NoticeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NoticeReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notices_arrive_in_order() {
        let (notifier, mut receiver) = channel();
        notifier.send(Notice::info("Video uploaded", "Ready"));
        notifier.send(Notice::error("Analysis failed", "Try again"));

        let first = receiver.recv().await.unwrap();
        assert_eq!(first.title, "Video uploaded");
        assert!(!first.is_error());

        let rest = receiver.drain();
        assert_eq!(rest.len(), 1);
        assert!(rest[0].is_error());
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (notifier, receiver) = channel();
        drop(receiver);
        notifier.send(Notice::info("ignored", ""));
    }

    #[tokio::test]
    async fn test_recv_ends_when_notifiers_dropped() {
        let (notifier, mut receiver) = channel();
        let clone = notifier.clone();
        drop(notifier);
        clone.send(Notice::info("last", ""));
        drop(clone);

        assert_eq!(receiver.recv().await.map(|n| n.title), Some("last".to_string()));
        assert_eq!(receiver.recv().await, None);
    }
}
