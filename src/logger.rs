//! Logging capability injected into the collector
//!
//! The collector reports progress through [`Logger`] instead of a global
//! logger; the binary wires in [`TracingLogger`].

use std::sync::Mutex;

/// Progress sink
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards messages to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "notepad_collector", "{}", message);
    }
}

/// Keeps messages in memory, for hosts that display them after a run
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages logged so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}
