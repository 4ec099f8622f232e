use chrono::Utc;
use serde_json::json;

/// Structured JSONL logger. Info goes to stdout, errors to stderr.
#[derive(Clone, Debug)]
pub struct Logger {
    rid: u64,
    enabled: bool,
}

impl Logger {
    /// Creates a new `Logger`.
    ///
    /// # Panics
    ///
    /// Panics if `rid` is zero.
    #[must_use]
    pub fn new(rid: u64) -> Self {
        assert!(rid > 0, "Logger rid must be non-zero");
        Self { rid, enabled: true }
    }

    /// A logger that drops every entry.
    #[must_use]
    pub const fn silent() -> Self {
        Self { rid: 0, enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn info(&self, subsystem: &str, action: &str, message: &str) {
        self.emit("info", subsystem, action, message);
    }

    pub fn error(&self, subsystem: &str, action: &str, message: &str) {
        self.emit("error", subsystem, action, message);
    }

    fn emit(&self, level: &str, subsystem: &str, action: &str, message: &str) {
        if !self.enabled {
            return;
        }
        let log_entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "level": level,
            "rid": self.rid,
            "subsystem": subsystem,
            "action": action,
            "msg": message,
        });

        if level == "error" {
            eprintln!("{log_entry}");
        } else {
            println!("{log_entry}");
        }
    }
}

/// Shared logger for the free functions and `Default` impls.
pub(crate) static SILENT: Logger = Logger::silent();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "rid must be non-zero")]
    fn rejects_zero_rid() {
        let _ = Logger::new(0);
    }

    #[test]
    fn silent_logger_is_disabled() {
        assert!(!Logger::silent().is_enabled());
        assert!(Logger::new(7).is_enabled());
        // Must not print or panic.
        SILENT.error("test", "noop", "dropped");
    }
}
