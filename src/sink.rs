//! Diagnostic sink: where validators report failed byte fetches.
//!
//! Injected at validator construction instead of a process-wide logger, so
//! tests can capture messages without global configuration. Diagnostics are
//! best-effort and never affect a validation verdict.

/// Receives one human-readable message per failed byte fetch. Fire-and-forget.
pub trait DiagnosticSink {
    fn record(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _message: &str) {}
}

/// Forwards messages to a `tracing::error!` event. Without a subscriber
/// installed the events are dropped, so this doubles as a no-op default.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Adapts any `Fn(&str)` closure into a sink, handy for collecting messages
/// in tests.
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F: Fn(&str)> DiagnosticSink for FnSink<F> {
    fn record(&self, message: &str) {
        (self.0)(message)
    }
}
