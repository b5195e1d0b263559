//! User-facing notices
//!
//! Notices are transient, single-display messages with a severity level
//! ("Operation completed successfully.", "Record not found."). Instead of
//! mutating implicit session state, every handler receives an explicit
//! [`Notices`] buffer; the host drains it into whatever flash mechanism its
//! rendering layer uses.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// The operation completed.
    Success,
    /// The operation failed or the record was not found.
    Danger,
}

/// A single user-facing message with a severity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity level.
    pub level: NoticeLevel,
    /// Single-line message text.
    pub message: String,
}

/// Per-request notice buffer, passed into each handler call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Notices(Vec<Notice>);

impl Notices {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success notice.
    pub fn success(&mut self, message: impl Into<String>) {
        self.0.push(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    /// Queue a danger notice.
    pub fn danger(&mut self, message: impl Into<String>) {
        self.0.push(Notice {
            level: NoticeLevel::Danger,
            message: message.into(),
        });
    }

    /// Queued notices, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Notice] {
        &self.0
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take all queued notices out of the buffer, leaving it empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.0)
    }
}
