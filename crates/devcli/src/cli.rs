//! CLI argument parsing with clap

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use crate::output;

/// Names accepted as the first positional argument
pub const KNOWN_COMMANDS: &[&str] = &["new", "generate", "create-repo", "config"];

/// dev-cli - scaffold projects, generate boilerplate, create GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "dev-cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new project in the current directory
    New(NewArgs),

    /// Generate a boilerplate source file
    Generate(GenerateArgs),

    /// Create a GitHub repository and clone it
    CreateRepo(CreateRepoArgs),

    /// Show or change saved defaults
    Config(ConfigArgs),
}

// New command
#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Project name (prompted if omitted)
    pub name: Option<String>,

    /// Project type: react, express, vite (prompted if omitted)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Use the TypeScript Vite template
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub typescript: Option<bool>,

    /// Add Tailwind CSS
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub tailwind: Option<bool>,

    /// Add Framer Motion
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub framer_motion: Option<bool>,

    /// Add React Router
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub react_router: Option<bool>,
}

// Generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// File type: component, service (prompted if omitted)
    #[arg(value_name = "TYPE")]
    pub file_type: Option<String>,

    /// File name, e.g. Button.jsx (prompted if omitted)
    pub name: Option<String>,
}

// Create-repo command
#[derive(Args, Debug, Default)]
pub struct CreateRepoArgs {
    /// Repository name (prompted if omitted)
    pub name: Option<String>,

    /// Repository description
    #[arg(long = "repo-description", visible_alias = "repoDescription", value_name = "TEXT")]
    pub description: Option<String>,

    /// Make the repository private
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub private: Option<bool>,

    /// GitHub token (defaults to the saved token)
    #[arg(long)]
    pub token: Option<String>,

    /// Skip cloning the new repository
    #[arg(long)]
    pub no_clone: bool,
}

// Config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Print the saved configuration and exit
    #[arg(long, conflicts_with_all = ["default_type", "token"])]
    pub show: bool,

    /// Print as JSON (with --show)
    #[arg(long, requires = "show")]
    pub json: bool,

    /// Default project type for `new`
    #[arg(long, value_name = "TYPE")]
    pub default_type: Option<String>,

    /// GitHub token to save
    #[arg(long)]
    pub token: Option<String>,
}

/// Whether a parse failure means no recognised command was given
pub fn is_unknown_command(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::InvalidSubcommand
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// Exit code for a parse failure: 0 for --help/--version, 1 otherwise
pub fn parse_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Print a parse failure and choose the process exit code
pub fn report_parse_error(err: &clap::Error) -> ExitCode {
    if is_unknown_command(err) {
        output::error("Unknown command");
        eprintln!("Available commands: {}", KNOWN_COMMANDS.join(", "));
        eprintln!("Run 'dev-cli --help' for usage.");
    } else {
        let _ = err.print();
    }
    ExitCode::from(parse_exit_code(err))
}
