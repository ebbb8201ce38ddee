//! ターゲットパス解決 Outbound ポート
//!
//! 書き込み先 `data/auto.json` の解決を抽象化する。

use common::error::Error;
use std::path::PathBuf;

/// パス解決の入力（CLI の -o/--output, -r/--root オプション）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetPathInput {
    pub output: Option<String>,
    pub root: Option<String>,
}

/// ターゲットパス解決抽象（Outbound ポート）
pub trait TargetPathResolver: Send + Sync {
    fn resolve(&self, input: &TargetPathInput) -> Result<PathBuf, Error>;
}
