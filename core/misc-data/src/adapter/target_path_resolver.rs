//! 標準ターゲットパス解決（CLI オプション・環境変数・起動ディレクトリ）

use crate::ports::outbound::{TargetPathInput, TargetPathResolver};
use common::error::Error;
use std::env;
use std::path::{Path, PathBuf};

/// ルート配下の書き込み先（<root>/data/auto.json）
pub const DATA_DIR: &str = "data";
pub const FILE_NAME: &str = "auto.json";

/// ルートを上書きする環境変数
pub const ROOT_ENV: &str = "MISC_DATA_ROOT";

/// 標準ターゲットパス解決実装
///
/// `cwd` は通常 `std::env::current_dir()`。テストでは任意のパスを渡す。
pub struct StdTargetPathResolver {
    cwd: Option<PathBuf>,
}

impl StdTargetPathResolver {
    pub fn new() -> Self {
        Self {
            cwd: env::current_dir().ok(),
        }
    }

    #[cfg(test)]
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }

    /// 起動ディレクトリの 1 つ上をルートとする（../data/auto.json）
    fn default_root(&self) -> Result<PathBuf, Error> {
        let cwd = self
            .cwd
            .as_deref()
            .ok_or_else(|| Error::env("Cannot determine the current directory"))?;
        Ok(cwd
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.join("..")))
    }
}

impl Default for StdTargetPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn under_root(root: &Path) -> PathBuf {
    root.join(DATA_DIR).join(FILE_NAME)
}

impl TargetPathResolver for StdTargetPathResolver {
    /// 書き込み先を解決する
    ///
    /// 優先順位:
    /// 1. -o/--output（そのファイル）
    /// 2. -r/--root（<root>/data/auto.json）
    /// 3. 環境変数 MISC_DATA_ROOT
    /// 4. 起動ディレクトリの 1 つ上（../data/auto.json）
    fn resolve(&self, input: &TargetPathInput) -> Result<PathBuf, Error> {
        if let Some(ref output) = input.output {
            if output.is_empty() {
                return Err(Error::invalid_argument("--output must not be empty"));
            }
            return Ok(PathBuf::from(output));
        }

        if let Some(ref root) = input.root {
            if root.is_empty() {
                return Err(Error::invalid_argument("--root must not be empty"));
            }
            return Ok(under_root(Path::new(root)));
        }

        if let Ok(env_root) = env::var(ROOT_ENV) {
            if !env_root.is_empty() {
                return Ok(under_root(Path::new(&env_root)));
            }
        }

        Ok(under_root(&self.default_root()?))
    }
}
