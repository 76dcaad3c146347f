//! Business logic for each command.
//!
//! Every operation is a `run` function generic over [`ClusterGateway`] that
//! returns a [`CmdResult`]: leveled messages, an optional listing, and an
//! optional dispatch action for the binary to execute after printing.
//! Nothing in this layer writes to the terminal or exits the process.
//!
//! "No match" and "ambiguous" are ordinary outcomes here, not errors: they
//! come back as messages inside an `Ok(CmdResult)` and the process still
//! exits cleanly. Only external-tool failures travel the `Err` path.

use crate::render::Span;

pub mod find;
pub mod helpers;
pub mod namespaces;
pub mod pod_exec;
pub mod pods;
pub mod scale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single user-facing line, carried as spans so query highlighting and
/// object names survive to the print layer without embedded markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub spans: Vec<Span>,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            spans: vec![Span::plain(content)],
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            spans: vec![Span::heading(content)],
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            spans: vec![Span::new(content, crate::render::Role::Warning)],
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            spans: vec![Span::new(content, crate::render::Role::Error)],
        }
    }

    pub fn spans(level: MessageLevel, spans: Vec<Span>) -> Self {
        Self { level, spans }
    }
}

/// Structured listing attached to a result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    None,
    /// Indented single-column rows.
    Rows(Vec<Vec<Span>>),
    /// Two-column namespace / pod-name table; the print layer computes the
    /// column width from the widest namespace.
    Table(Vec<(Vec<Span>, Vec<Span>)>),
}

/// A mutating or terminal-handover call the binary should issue after
/// rendering the result. Kept as a value so every outcome of resolution is
/// explicit and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchAction {
    Logs {
        namespace: String,
        pod: String,
        follow: bool,
    },
    Shell {
        namespace: String,
        pod: String,
    },
    Scale {
        namespace: String,
        deployment: String,
        replicas: u32,
    },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listing: Listing,
    pub dispatch: Option<DispatchAction>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self::default().with_message(message)
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = listing;
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchAction) -> Self {
        self.dispatch = Some(dispatch);
        self
    }
}
