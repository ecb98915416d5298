pub mod support;

mod errors;
mod exchange;
mod init;
mod list;
mod logging;
mod memory;
mod personal;
mod save;
mod status;
mod suggest;
mod template;
