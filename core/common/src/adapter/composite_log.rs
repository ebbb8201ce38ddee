//! 複数の Log に順に書き出す Log 実装

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

/// 登録された Log に順に書き出すコンポジット
///
/// 1 つが失敗しても残りには書き出し、最初のエラーを返す。
pub struct CompositeLog {
    logs: Vec<Arc<dyn Log>>,
}

impl CompositeLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for CompositeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for l in &self.logs {
            if let Err(e) = l.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<String>>);

    impl Log for Recording {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct Failing;

    impl Log for Failing {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("log sink unavailable"))
        }
    }

    #[test]
    fn test_composite_writes_to_all_even_after_failure() {
        let rec = Arc::new(Recording(Mutex::new(Vec::new())));
        let logs: Vec<Arc<dyn Log>> = vec![Arc::new(Failing) as Arc<dyn Log>, rec.clone() as Arc<dyn Log>];
        let log = CompositeLog::new(logs);
        let err = log
            .log(&LogRecord::new(LogLevel::Info, "cli", "lifecycle", "hello"))
            .unwrap_err();
        assert_eq!(err, Error::io_msg("log sink unavailable"));
        assert_eq!(*rec.0.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[test]
    fn test_empty_composite_is_ok() {
        let log = CompositeLog::new(Vec::new());
        assert!(log
            .log(&LogRecord::new(LogLevel::Debug, "cli", "lifecycle", "x"))
            .is_ok());
    }
}
