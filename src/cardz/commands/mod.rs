use crate::model::{Card, Outcome};

pub mod add;
pub mod helpers;
pub mod import;
pub mod list;
pub mod query;
pub mod review;
pub mod strip;

/// Severity of a message produced by a command, rendered by the CLI layer.
#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A timestamped card with its waiting time relative to the query instant.
/// Negative `wait` means overdue.
#[derive(Debug, Clone)]
pub struct ScheduledCard {
    pub card: Card,
    pub wait: i64,
}

/// What a completed review transaction did.
#[derive(Debug, Clone)]
pub struct ReviewReport {
    pub outcome: Outcome,
    /// The card's state after the rename.
    pub card: Card,
    /// Seconds since the previous review; `None` on a first review.
    pub elapsed: Option<u64>,
}

/// Structured result every command returns; the CLI layer decides how to
/// render it.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub selected: Option<Card>,
    pub listed: Vec<ScheduledCard>,
    pub review: Option<ReviewReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_selected(mut self, card: Card) -> Self {
        self.selected = Some(card);
        self
    }

    pub fn with_listed(mut self, cards: Vec<ScheduledCard>) -> Self {
        self.listed = cards;
        self
    }

    pub fn with_review(mut self, report: ReviewReport) -> Self {
        self.review = Some(report);
        self
    }
}
