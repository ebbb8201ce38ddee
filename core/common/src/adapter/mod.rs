//! アダプター（外界の I/O を trait で抽象化したポートの標準実装）
//!
//! usecase は ports::outbound の trait 経由でのみファイル・時刻・ログに触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod composite_log;
pub mod file_json_log;
pub mod std_clock;
pub mod std_fs;
pub mod stderr_log;

pub use composite_log::CompositeLog;
pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_clock::StdClock;
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrLog;
