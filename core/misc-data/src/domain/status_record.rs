//! Status Record: `"updated"` キーだけを持つ JSON オブジェクト
//!
//! 例:
//! ```json
//! {
//!     "updated": "2024-01-01 12:00:00"
//! }
//! ```

use chrono::{DateTime, TimeZone};
use common::error::Error;
use serde::{Deserialize, Serialize};

/// `updated` の書式（ゼロ埋め・24 時間制）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// JSON のインデント（ネスト 1 段あたり 4 スペース）
const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusRecord {
    pub updated: String,
}

impl StatusRecord {
    /// 指定時刻（そのタイムゾーンの壁時計）から生成する
    pub fn at<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            updated: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// キー昇順・4 スペースインデントの JSON。末尾改行なし。
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        // Value の Map は BTreeMap なのでキーは辞書順になる
        let value = serde_json::to_value(self)?;
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| Error::system(e.to_string()))
    }
}
