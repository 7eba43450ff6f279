//! User configuration persisted between invocations

mod store;

pub use store::{ConfigStore, UserConfig, CONFIG_FILE_NAME};
