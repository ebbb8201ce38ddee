pub mod command;
pub mod status_record;

pub use command::Command;
pub use status_record::StatusRecord;
