pub mod banner;
pub mod classify;
pub mod config;
pub mod git;
pub mod init;
pub mod probe;
pub mod prompt;
pub mod runtime;
pub mod timer;
