//! CLI command implementations
//!
//! Every command runs the same three stages:
//! - `collect`: take flags, prompt for whatever is missing
//! - `validate`: pure check turning raw answers into a typed request
//! - `execute`: exactly one action (scaffold, generate, create repo, save config)

pub mod config;
pub mod create_repo;
pub mod generate;
pub mod new;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::Result;
use camino::Utf8PathBuf;
use devcli_core::{CommandRunner, ConfigStore, UserConfig};
use devcli_projects::github::GitHubClient;
use std::sync::Arc;

use crate::cli::Commands;
use crate::output;
use crate::prompt::Prompter;

/// Everything a command needs, passed explicitly instead of living in globals
pub struct Context<'a> {
    /// Directory new projects, files and clones are created in
    pub cwd: Utf8PathBuf,
    /// Config loaded at startup
    pub config: UserConfig,
    /// Where `config` is persisted
    pub store: ConfigStore,
    pub prompter: &'a mut dyn Prompter,
    pub runner: Arc<dyn CommandRunner>,
    pub github: GitHubClient,
}

/// Dispatch to the command handler
pub async fn run(command: Commands, ctx: &mut Context<'_>) -> Result<()> {
    match command {
        Commands::New(args) => new::run(args, ctx).await,
        Commands::Generate(args) => generate::run(args, ctx).await,
        Commands::CreateRepo(args) => create_repo::run(args, ctx).await,
        Commands::Config(args) => config::run(args, ctx).await,
    }
}

/// Report an already-present target as a warning and carry on
///
/// Returns `Ok(None)` in that case; every other error is passed up.
fn skip_if_exists<T>(result: devcli_projects::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_already_exists() => {
            output::warning(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
