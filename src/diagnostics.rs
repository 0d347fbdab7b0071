use log::{error, warn};

/// A problem encountered while parsing a front matter block.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Non-fatal notice from the parser; extraction continues.
    Warning(String),
    /// Fatal parse failure; the block yielded no mapping.
    Error(String),
}

/// Receives parse warnings and errors without influencing control flow.
///
/// Implementations must not panic.
pub trait DiagnosticsSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::Warning(message) => warn!("{}", message),
            Diagnostic::Error(message) => error!("{}", message),
        }
    }
}

/// Discards every diagnostic.
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}
