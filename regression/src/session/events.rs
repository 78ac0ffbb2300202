use log::info;

const MAX_LOGS: usize = 200;

/// A single status line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// Bounded history of the status lines emitted by a session.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    lines: Vec<LogLine>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a status line and forwards it to the logger.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{message}");
        self.push(LogLine {
            level: "INFO",
            message,
        });
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Returns the last `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> &[LogLine] {
        &self.lines[self.lines.len().saturating_sub(n)..]
    }

    pub fn last(&self) -> Option<&LogLine> {
        self.lines.last()
    }

    fn push(&mut self, line: LogLine) {
        self.lines.push(line);
        if self.lines.len() > MAX_LOGS {
            let drain = self.lines.len() - MAX_LOGS;
            self.lines.drain(0..drain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded() {
        let mut log = EventLog::new();
        for i in 0..MAX_LOGS + 10 {
            log.info(format!("line {i}"));
        }

        assert_eq!(log.lines().len(), MAX_LOGS);
        assert_eq!(log.lines()[0].message, "line 10");
    }

    #[test]
    fn tail() {
        let mut log = EventLog::new();
        log.info("a");
        log.info("b");
        log.info("c");

        let tail: Vec<_> = log.tail(2).iter().map(|l| l.message.as_str()).collect();
        assert_eq!(tail, ["b", "c"]);
        assert_eq!(log.tail(10).len(), 3);
    }
}
