//! make-misc-data のコマンド enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の match でディスパッチする。

/// 実行するコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// ヘルプ表示
    Help,
    /// Status Record をターゲットパスに書き込む（既定）
    Write,
    /// 書き込まずに JSON を stdout に出す（--dry-run）
    Print,
}
