//! Transient user-facing notices (toasts).
//!
//! The session subsystem reports login/logout outcomes and session expiry
//! here; `components::notice_tray` renders and dismisses them.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use uuid::Uuid;

/// Visual tone of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "notice--success",
            Self::Error => "notice--error",
            Self::Info => "notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

/// Ordered list of visible notices, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Maximum notices kept on screen; older ones fall off.
    pub const MAX_VISIBLE: usize = 4;

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notice { id, level, message: message.into() });
        if self.items.len() > Self::MAX_VISIBLE {
            let overflow = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }
}

/// Copyable handle used by non-component code to raise notices.
#[derive(Clone, Copy, Debug)]
pub struct Notices {
    state: RwSignal<NoticeState>,
}

impl Notices {
    pub fn new() -> Self {
        Self { state: RwSignal::new(NoticeState::default()) }
    }

    pub fn signal(&self) -> RwSignal<NoticeState> {
        self.state
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(NoticeLevel::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(NoticeLevel::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(NoticeLevel::Info, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.state.update(|s| s.dismiss(id));
    }

    pub fn snapshot(&self) -> NoticeState {
        self.state.get_untracked()
    }

    fn push(&self, level: NoticeLevel, message: impl Into<String>) -> Uuid {
        let message = message.into();
        let mut id = Uuid::nil();
        self.state.update(|s| id = s.push(level, message));
        id
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}
