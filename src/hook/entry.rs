use crate::level::Level;

/// A single log record as seen by the hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity of the record
    pub level: Level,
    /// Rendered message text
    pub message: String,
    /// Module or target that emitted the record (may be empty)
    pub target: String,
}

impl LogEntry {
    /// Creates an entry with an empty target.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            target: String::new(),
        }
    }

    /// Sets the emitting target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_empty_target() {
        let entry = LogEntry::new(Level::Warn, "low disk");

        assert_eq!(entry.level, Level::Warn);
        assert_eq!(entry.message, "low disk");
        assert!(entry.target.is_empty());
    }

    #[test]
    fn with_target_sets_target() {
        let entry = LogEntry::new(Level::Error, "boom").with_target("app::db");
        assert_eq!(entry.target, "app::db");
    }
}
