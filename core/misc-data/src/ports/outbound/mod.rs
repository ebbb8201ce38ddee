//! Outbound ポート（make-misc-data 固有）

pub mod target_path_resolver;

pub use target_path_resolver::{TargetPathInput, TargetPathResolver};
