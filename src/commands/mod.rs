//! CLI commands for rulekit

pub mod active;
pub mod dispatch;
pub mod exchange;
pub mod format;
pub mod helpers;
pub mod init;
pub mod list;
pub mod memory;
pub mod personal;
pub mod save;
pub mod status;
pub mod suggest;
pub mod template;
pub mod toggle;
