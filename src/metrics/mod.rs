//! Session metrics.
//!
//! Counts what happened during one interactive session so it can be logged
//! at shutdown.

use crate::commands::Command;
use std::time::{Duration, Instant};

/// Counters for a single session.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    /// Non-blank lines dispatched, including unknown commands
    commands_total: u64,

    /// Lines whose keyword was not a known command
    unknown_commands_total: u64,

    /// Blank lines skipped without dispatch
    blank_lines_total: u64,

    started_at: Instant,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMetrics {
    /// Create a new metrics collector; the session clock starts now.
    pub fn new() -> Self {
        Self {
            commands_total: 0,
            unknown_commands_total: 0,
            blank_lines_total: 0,
            started_at: Instant::now(),
        }
    }

    /// Record a dispatched command.
    pub fn record_command(&mut self, command: Command) {
        self.commands_total += 1;
        if command == Command::Unknown {
            self.unknown_commands_total += 1;
        }
    }

    /// Record a skipped blank line.
    pub fn record_blank_line(&mut self) {
        self.blank_lines_total += 1;
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    pub fn unknown_commands_total(&self) -> u64 {
        self.unknown_commands_total
    }

    pub fn blank_lines_total(&self) -> u64 {
        self.blank_lines_total
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total(),
            unknown_commands_total: self.unknown_commands_total(),
            blank_lines_total: self.blank_lines_total(),
            session_duration_ms: self.elapsed().as_millis() as u64,
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub unknown_commands_total: u64,
    pub blank_lines_total: u64,
    pub session_duration_ms: u64,
}
