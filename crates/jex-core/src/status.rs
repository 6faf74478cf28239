//! Progress reporting to an external observer.
//!
//! The aggregation loop pushes human-readable updates as it works; the
//! observer trait keeps it decoupled from whatever surface actually
//! renders them (terminal, UI, test collector).

/// One progress notification pushed during a crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Human-readable progress text.
    pub text: String,
    /// True on the successful terminal update (export now available).
    pub done: bool,
    /// True on the failed terminal update.
    pub error: bool,
}

impl StatusUpdate {
    /// An intermediate progress update.
    pub fn progress(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            error: false,
        }
    }

    /// The successful terminal update.
    pub fn done(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: true,
            error: false,
        }
    }

    /// The failed terminal update.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            error: true,
        }
    }
}

/// Receives progress updates from the aggregation loop.
pub trait StatusObserver: Send + Sync {
    fn on_status(&self, update: StatusUpdate);
}

/// Observer that discards all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl StatusObserver for NullObserver {
    fn on_status(&self, _update: StatusUpdate) {}
}
