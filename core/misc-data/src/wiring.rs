//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{CompositeLog, FileJsonLog, NoopLog, StdClock, StdFileSystem, StderrLog};
use common::ports::outbound::{Clock, FileSystem, Log};

use crate::adapter::StdTargetPathResolver;
use crate::ports::outbound::TargetPathResolver;
use crate::usecase::WriteStatusUseCase;

/// JSONL ログの出力先を指定する環境変数
pub const LOG_FILE_ENV: &str = "MISC_DATA_LOG_FILE";

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    pub target_resolver: Arc<dyn TargetPathResolver>,
    pub write_status_use_case: WriteStatusUseCase,
    /// 構造化ログ。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
}

/// ログ出力先を組み立てる（--verbose → stderr、MISC_DATA_LOG_FILE → JSONL）
fn build_logger(fs: &Arc<dyn FileSystem>, verbose: bool, log_file: Option<PathBuf>) -> Arc<dyn Log> {
    let mut logs: Vec<Arc<dyn Log>> = Vec::new();
    if verbose {
        logs.push(Arc::new(StderrLog));
    }
    if let Some(path) = log_file {
        logs.push(Arc::new(FileJsonLog::new(Arc::clone(fs), path)));
    }
    match logs.len() {
        0 => Arc::new(NoopLog),
        1 => logs.remove(0),
        _ => Arc::new(CompositeLog::new(logs)),
    }
}

fn log_file_from_env() -> Option<PathBuf> {
    std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_misc_data(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let logger = build_logger(&fs, verbose, log_file_from_env());
    let target_resolver: Arc<dyn TargetPathResolver> = Arc::new(StdTargetPathResolver::new());
    let write_status_use_case =
        WriteStatusUseCase::new(clock, Arc::clone(&fs), Arc::clone(&logger));
    App {
        target_resolver,
        write_status_use_case,
        logger,
    }
}
