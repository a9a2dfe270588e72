//! ==============================================================================
//! notice.rs - transient notices
//! ==============================================================================
//!
//! purpose:
//!     one notice is visible at a time. showing a new one replaces the
//!     current one, and each show bumps a generation so the dismissal timer
//!     of an older notice cannot hide a newer one.
//!
//! ==============================================================================

/// how long a notice stays up, in milliseconds
pub const NOTICE_DISMISS_MS: u32 = 4_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Info => "message info",
            NoticeKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// anything that can put a notice in front of the user
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// the single visible notice and its generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeSlot {
    /// replaces whatever is shown. returns the generation to dismiss later.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation += 1;
        self.current = Some(notice);
        self.generation
    }

    /// hides the notice if `generation` is still the one on screen
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
