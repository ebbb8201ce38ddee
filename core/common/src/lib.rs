//! make-misc-data 共通ライブラリ
//!
//! エラー型・Outbound ポート（時刻・ファイル・ログ）とその標準実装を提供します。

/// エラーハンドリング
pub mod error;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
