//! # devcli-core
//!
//! Core library for the dev-cli tool providing:
//! - The user configuration store (`~/.dev-cli-tool/config.json`)
//! - A shell process runner that captures combined stdout/stderr
//! - Shared error types and home directory resolution

pub mod config;
pub mod error;
pub mod process;
pub mod utils;

pub use config::{ConfigStore, UserConfig};
pub use error::{Error, Result};
pub use process::{quote, CommandRunner, ShellRunner};
pub use utils::get_home_dir;
