//! 人間向けログ（--verbose 時に stderr へ 1 行ずつ出力）

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

/// LogRecord を `[level] message key=value ...` 形式で stderr に出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

pub(crate) fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(ref fields) = record.fields {
        for (k, v) in fields {
            match v.as_str() {
                Some(s) => line.push_str(&format!(" {}={}", k, s)),
                None => line.push_str(&format!(" {}={}", k, v)),
            }
        }
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;

    #[test]
    fn test_format_line_with_fields() {
        let rec = LogRecord::new(LogLevel::Info, "usecase", "write", "status written")
            .with_field("path", "/tmp/data/auto.json")
            .with_field("bytes", 40);
        assert_eq!(
            format_line(&rec),
            "[info] status written bytes=40 path=/tmp/data/auto.json"
        );
    }

    #[test]
    fn test_format_line_without_fields() {
        let rec = LogRecord::new(LogLevel::Debug, "cli", "lifecycle", "start");
        assert_eq!(format_line(&rec), "[debug] start");
    }
}
