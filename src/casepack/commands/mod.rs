//! Business logic, one module per user-visible operation.
//!
//! Every command is a `run(...)` function that takes the store plus plain
//! arguments and returns a [`CmdResult`] — no I/O, no terminal assumptions.
//! The host renders the messages and delivers any export bundle. Commands
//! speak the user's 1-based case numbers; translation to the store's
//! 0-based indices happens here and nowhere else.

use crate::archive::ExportArchive;
use crate::error::{CasepackError, Result};
use crate::model::TestCase;
use crate::store::CaseStore;

pub mod add;
pub mod delete;
pub mod export;
pub mod list;
pub mod paste;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// A case paired with the 1-based number it is shown under.
#[derive(Debug, Clone)]
pub struct ListedCase {
    pub number: usize,
    pub case: TestCase,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ListedCase>,
    pub export: Option<ExportArchive>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedCase>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_export(mut self, export: ExportArchive) -> Self {
        self.export = Some(export);
        self
    }
}

/// Maps a user-facing case number onto a valid store index.
pub(crate) fn resolve_number(store: &CaseStore, number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .filter(|index| *index < store.len())
        .ok_or(CasepackError::OutOfRange(number))
}
