const SLIDE_IN_AFTER_MS: u64 = 100;
const DISMISS_AFTER_MS: u64 = 5_000;
const REMOVE_AFTER_LEAVE_MS: u64 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#22c55e",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

impl ToastPhase {
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateX(0)",
            Self::Entering | Self::Leaving => "translateX(400px)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
    created_at_ms: u64,
}

impl Notification {
    fn phase_at(&self, now_ms: u64) -> Option<ToastPhase> {
        let age = now_ms.saturating_sub(self.created_at_ms);
        if age >= DISMISS_AFTER_MS + REMOVE_AFTER_LEAVE_MS {
            None
        } else if age >= DISMISS_AFTER_MS {
            Some(ToastPhase::Leaving)
        } else if age >= SLIDE_IN_AFTER_MS {
            Some(ToastPhase::Shown)
        } else {
            Some(ToastPhase::Entering)
        }
    }

    pub fn inline_style(&self) -> String {
        format!(
            "background: {}; transform: {};",
            self.kind.background(),
            self.phase.transform()
        )
    }
}

/// Timed, auto-dismissing toasts. Phases are derived from the age of each
/// toast, so a late `tick` jumps straight to the correct phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
            created_at_ms: now_ms,
        });
        id
    }

    /// Returns true when any toast changed phase or was removed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let before = self.items.len();
        let mut changed = false;

        self.items.retain_mut(|item| match item.phase_at(now_ms) {
            Some(phase) => {
                changed |= item.phase != phase;
                item.phase = phase;
                true
            }
            None => false,
        });

        changed || self.items.len() != before
    }

    /// Offsets from creation at which a toast changes phase.
    pub fn schedule_offsets_ms() -> [u64; 3] {
        [
            SLIDE_IN_AFTER_MS,
            DISMISS_AFTER_MS,
            DISMISS_AFTER_MS + REMOVE_AFTER_LEAVE_MS,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_walks_through_its_lifecycle() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("Message sent", NotificationKind::Success, 1_000);
        assert_eq!(queue.items()[0].phase, ToastPhase::Entering);

        assert!(!queue.tick(1_050));
        assert!(queue.tick(1_100));
        assert_eq!(queue.items()[0].phase, ToastPhase::Shown);
        assert_eq!(queue.items()[0].id, id);

        assert!(queue.tick(6_000));
        assert_eq!(queue.items()[0].phase, ToastPhase::Leaving);

        assert!(queue.tick(6_300));
        assert!(queue.items().is_empty());
    }

    #[test]
    fn toasts_expire_independently() {
        let mut queue = NotificationQueue::new();
        queue.push("first", NotificationKind::Info, 0);
        queue.push("second", NotificationKind::Error, 3_000);

        queue.tick(5_400);
        let messages: Vec<&str> = queue.items().iter().map(|item| item.message.as_str()).collect();
        assert_eq!(messages, ["second"]);
        assert_eq!(queue.items()[0].phase, ToastPhase::Shown);
    }

    #[test]
    fn style_reflects_kind_and_phase() {
        let mut queue = NotificationQueue::new();
        queue.push("oops", NotificationKind::Error, 0);
        assert_eq!(
            queue.items()[0].inline_style(),
            "background: #ef4444; transform: translateX(400px);"
        );

        queue.tick(200);
        assert_eq!(
            queue.items()[0].inline_style(),
            "background: #ef4444; transform: translateX(0);"
        );
    }
}
