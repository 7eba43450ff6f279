//! Git operations
//!
//! Git is driven through the shared [`devcli_core::CommandRunner`] so clone
//! output lands in the same combined buffer as every other external step.

mod clone;

pub use clone::{clone_repository, repository_dir_name};
