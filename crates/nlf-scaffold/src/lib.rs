//! Command-line front end for generating NSIS language files.

pub mod atomic;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod i18n;
pub mod prompt;
pub mod store;
