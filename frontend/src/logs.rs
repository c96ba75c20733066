use shared::{LogEntry, LogKind};

/// Append-only system log shown in the dashboard's log viewer.
///
/// `push` is the only mutator; entries are never reordered or deduplicated,
/// so the viewer renders a snapshot in append order and scrolls to the tail.
#[derive(Default)]
pub struct LogBuffer {
    entries: Vec<LogEntry>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LogKind, message: &str, timestamp: &str) {
        self.entries.push(LogEntry {
            timestamp: timestamp.to_string(),
            message: message.to_string(),
            kind,
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_append_order() {
        let mut logs = LogBuffer::new();
        logs.push(LogKind::Info, "first", "10:00:00");
        logs.push(LogKind::Warning, "second", "10:00:01");
        logs.push(LogKind::Info, "first", "10:00:02");

        let messages: Vec<&str> = logs.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "first"]);
        assert_eq!(logs.entries()[1].kind, LogKind::Warning);
    }
}
