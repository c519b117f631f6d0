// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reporting sinks for the unused-variable summary.
//!
//! ```text
//! Report::report(&str)
//!   FnMut(&str)       caller callback
//!   WriterReport<W>   one line per report, stderr by default
//!   TracingReport     tracing::warn!
//!   NoReport          discard
//! ```

use std::io::Write;

/// Tag every summary line starts with.
pub const REPORT_TAG: &str = "[envalid-unused]";

/// Renders the summary line for a non-empty list of names.
#[must_use]
pub fn format_report(names: &[String]) -> String {
    format!(
        "{REPORT_TAG} Found {} unused environment variable(s): {}",
        names.len(),
        names.join(", ")
    )
}

/// Receives the summary line. Called at most once per detection.
pub trait Report {
    fn report(&mut self, message: &str);
}

impl<F: FnMut(&str)> Report for F {
    fn report(&mut self, message: &str) {
        self(message);
    }
}

/// Writes each message as a line. Write failures are logged and dropped.
#[derive(Debug)]
pub struct WriterReport<W> {
    writer: W,
}

impl<W: Write> WriterReport<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterReport<std::io::Stderr> {
    /// The default reporter.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> Report for WriterReport<W> {
    fn report(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}").and_then(|()| self.writer.flush()) {
            tracing::debug!(error = %e, "failed to write unused-variable report");
        }
    }
}

/// Emits the message as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReport;

impl Report for TracingReport {
    fn report(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Discards the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReport;

impl Report for NoReport {
    fn report(&mut self, _message: &str) {}
}
