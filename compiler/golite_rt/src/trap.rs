//! Trap handler: what happens when a runtime error reaches the boundary.
//!
//! Every runtime error is fatal for the GoLite program. The running program
//! uses [`TrapHandler::Exit`], which writes the diagnostic line to stderr and
//! exits with status 1. Tests use [`TrapHandler::Capture`], which records the
//! diagnostic and hands the error back.

use parking_lot::Mutex;
use tracing::debug;

use crate::errors::RuntimeError;
use crate::output::PrintHandlerImpl;

/// Records diagnostics instead of exiting.
#[derive(Default)]
pub struct CaptureTrapHandler {
    diagnostics: Mutex<Vec<String>>,
}

impl CaptureTrapHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostic lines recorded so far, oldest first.
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.lock().clone()
    }
}

/// Trap handler implementation using enum dispatch.
#[derive(Default)]
pub enum TrapHandler {
    /// Print the diagnostic to stderr and exit with status 1 (default).
    #[default]
    Exit,
    /// Record the diagnostic and return the error.
    Capture(CaptureTrapHandler),
}

impl TrapHandler {
    pub fn capture() -> Self {
        TrapHandler::Capture(CaptureTrapHandler::new())
    }

    /// Handle a fatal error.
    ///
    /// Pending program output is flushed before the process exits, so the
    /// output produced before the failure is not lost.
    pub fn raise(&self, err: RuntimeError, output: &PrintHandlerImpl) -> RuntimeError {
        debug!(kind = ?err.kind, line = ?err.line, "runtime trap");
        match self {
            TrapHandler::Exit => {
                output.flush();
                eprintln!("{}", err.diagnostic());
                std::process::exit(1)
            }
            TrapHandler::Capture(h) => {
                h.diagnostics.lock().push(err.diagnostic());
                err
            }
        }
    }

    /// Recorded diagnostics; always empty for `Exit`.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            TrapHandler::Exit => Vec::new(),
            TrapHandler::Capture(h) => h.diagnostics(),
        }
    }
}
