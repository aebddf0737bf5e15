// Copyright 2025 the co2viz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Receives user-visible alerts.
pub trait AlertSink {
    /// Shows `message` to the user.
    fn alert(&mut self, message: &str);
}

/// Reports alerts through the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn alert(&mut self, message: &str) {
        tracing::error!(target: "co2viz::alert", "{message}");
    }
}

impl AlertSink for Vec<String> {
    fn alert(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}
