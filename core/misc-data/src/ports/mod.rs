//! Ports & Adapters のポート定義
//!
//! - inbound: CLI（main）がアプリを呼び出す入口
//! - outbound: このバイナリ固有の外界依存（ターゲットパス解決）

pub mod inbound;
pub mod outbound;
