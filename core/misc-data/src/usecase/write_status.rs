//! Timestamp Writer: 現在時刻の Status Record を JSON でターゲットパスに書き込む
//!
//! 書き込みは同じディレクトリの一時ファイルに書いてから rename する。
//! ターゲットのディレクトリは作らない（無ければ I/O エラー）。

use crate::domain::StatusRecord;
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct WriteStatusUseCase {
    clock: Arc<dyn Clock>,
    fs: Arc<dyn FileSystem>,
    logger: Arc<dyn Log>,
}

impl WriteStatusUseCase {
    pub fn new(clock: Arc<dyn Clock>, fs: Arc<dyn FileSystem>, logger: Arc<dyn Log>) -> Self {
        Self { clock, fs, logger }
    }

    /// 現在時刻から Status Record とその JSON 表現を作る（副作用なし）
    pub fn render(&self) -> Result<(StatusRecord, String), Error> {
        let record = StatusRecord::at(&self.clock.now());
        let json = record.to_pretty_json()?;
        Ok((record, json))
    }

    /// Status Record を target に書き込み、書いたレコードを返す。既存の内容は上書き。
    ///
    /// 既存の target がシンボリックリンクならリンク先を更新する。
    pub fn write(&self, target: &Path) -> Result<StatusRecord, Error> {
        let record = match self.write_to(target) {
            Ok(record) => record,
            Err(e) => {
                self.log_failure(target, &e);
                return Err(e);
            }
        };
        self.log(
            LogRecord::new(LogLevel::Info, "usecase", "write", "status written")
                .with_field("path", target.display().to_string())
                .with_field("updated", record.updated.clone()),
        );
        Ok(record)
    }

    fn write_to(&self, target: &Path) -> Result<StatusRecord, Error> {
        let dir = parent_dir(target);
        let dir_ok = self
            .fs
            .metadata(dir)
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !dir_ok {
            return Err(Error::io_msg(format!(
                "Target directory does not exist: '{}'",
                dir.display()
            )));
        }

        let dest = self.resolve_existing(target)?;
        let (record, json) = self.render()?;
        let tmp = temp_path_for(&dest)?;

        if let Err(e) = self.fs.write(&tmp, &json) {
            // 書き込み途中で失敗した一時ファイルは残さない
            let _ = self.fs.remove_file(&tmp);
            return Err(e);
        }
        if let Err(e) = self.fs.rename(&tmp, &dest) {
            let _ = self.fs.remove_file(&tmp);
            return Err(e);
        }
        Ok(record)
    }

    /// 既存の target はリンクを解決した実体を書き込み先にする。
    /// 通常ファイルでない・書き込み不可の場合はエラー。
    fn resolve_existing(&self, target: &Path) -> Result<PathBuf, Error> {
        if !self.fs.exists(target) {
            return Ok(target.to_path_buf());
        }
        let meta = self.fs.metadata(target)?;
        if !meta.is_file() {
            return Err(Error::io_msg(format!(
                "Target is not a regular file: '{}'",
                target.display()
            )));
        }
        if meta.is_readonly() {
            return Err(Error::io_msg(format!(
                "Failed to write '{}': Permission denied",
                target.display()
            )));
        }
        self.fs.canonicalize(target)
    }

    fn log_failure(&self, target: &Path, err: &Error) {
        self.log(
            LogRecord::new(LogLevel::Error, "usecase", "error", err.to_string())
                .with_field("path", target.display().to_string()),
        );
    }

    /// ログの失敗は書き込み結果に影響させない
    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record);
    }
}

/// target の親ディレクトリ（相対のファイル名だけなら ".")
fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// target と同じディレクトリの一時ファイル名（.<name>.<pid>.tmp）
fn temp_path_for(target: &Path) -> Result<PathBuf, Error> {
    let name = target.file_name().ok_or_else(|| {
        Error::invalid_argument(format!(
            "Target path has no file name: '{}'",
            target.display()
        ))
    })?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(match target.parent() {
        Some(p) => p.join(tmp_name),
        None => PathBuf::from(tmp_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dir_of_bare_file_name_is_cwd() {
        assert_eq!(parent_dir(Path::new("auto.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("/srv/data/auto.json")), Path::new("/srv/data"));
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let tmp = temp_path_for(Path::new("/srv/data/auto.json")).unwrap();
        assert_eq!(tmp.parent(), Some(Path::new("/srv/data")));
        let name = tmp.file_name().unwrap().to_str().unwrap();
        assert_eq!(name, format!(".auto.json.{}.tmp", std::process::id()));
    }

    #[cfg(unix)]
    #[test]
    fn test_temp_path_keeps_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"st\xffatus.json");
        let tmp = temp_path_for(&Path::new("/srv/data").join(name)).unwrap();
        let expected = format!(".st\u{FFFD}atus.json.{}.tmp", std::process::id());
        assert_eq!(tmp.file_name().unwrap().to_string_lossy(), expected);
        assert_eq!(
            &tmp.file_name().unwrap().as_bytes()[..4],
            b".st\xff"
        );
    }

    #[test]
    fn test_temp_path_requires_file_name() {
        let err = temp_path_for(Path::new("/")).unwrap_err();
        assert!(err.is_usage());
    }
}
