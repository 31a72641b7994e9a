//! Request contract shared by commands and queries.

use validator::Validate;

/// Whether a request changes state or only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Changes state; not safe to repeat blindly
    Command,
    /// Reads state; repeating it with unchanged data yields the same result
    Query,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Query => "query",
        }
    }
}

/// An immutable description of one use-case invocation.
///
/// Declarative input rules are expressed with `validator` attributes and are
/// checked by the dispatch pipeline before the handler runs.
pub trait Request: Validate + Send + 'static {
    /// What the handler returns on success.
    type Output: Send + 'static;

    /// Stable name used for logging, metrics and error reports.
    const NAME: &'static str;

    const KIND: RequestKind;
}
