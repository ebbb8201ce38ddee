//! ファイルシステム Outbound ポート
//!
//! usecase はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// ファイルメタデータ（種別と読み取り専用フラグ）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    is_file: bool,
    is_dir: bool,
    readonly: bool,
}

impl FileMetadata {
    pub fn new(is_file: bool, is_dir: bool, readonly: bool) -> Self {
        Self {
            is_file,
            is_dir,
            readonly,
        }
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// パーミッション上書き込み不可か
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のモックなど。
pub trait FileSystem: Send + Sync {
    /// 内容で上書きする（存在しなければ作成）。親ディレクトリは作らない。
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    fn remove_file(&self, path: &Path) -> Result<(), Error>;
    /// シンボリックリンクを解決した絶対パス
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// パスが存在するか（metadata が取れれば true。リンク切れは false）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
