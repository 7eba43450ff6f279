//! # devcli-projects
//!
//! The actions behind dev-cli's commands:
//! - Project scaffolding (minimal placeholder layouts and Vite-based React apps)
//! - Boilerplate file generation from fixed templates
//! - Remote repository creation through the GitHub REST API
//! - Cloning the created repository
//!
//! # Examples
//!
//! ## Scaffold a minimal Express project
//!
//! ```no_run
//! use std::sync::Arc;
//! use camino::Utf8Path;
//! use devcli_core::ShellRunner;
//! use devcli_projects::{ProjectOptions, ProjectType, Scaffolder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scaffolder = Scaffolder::new(Utf8Path::new("/tmp"), Arc::new(ShellRunner::new()));
//! let report = scaffolder
//!     .create_project("demo", ProjectType::Express, &ProjectOptions::default())
//!     .await?;
//! println!("created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```
//!
//! ## Create a GitHub repository
//!
//! ```no_run
//! use devcli_projects::github::{GitHubClient, RepositoryDescriptor};
//!
//! # async fn example() {
//! let client = GitHubClient::new();
//! let descriptor = RepositoryDescriptor {
//!     name: "my-repo".to_string(),
//!     description: String::new(),
//!     private: true,
//!     token: "ghp_...".to_string(),
//! };
//! if let Some(repo) = client.create_repository(&descriptor).await {
//!     println!("clone with {}", repo.clone_url);
//! }
//! # }
//! ```

pub mod boilerplate;
pub mod error;
pub mod git;
pub mod github;
pub mod scaffold;
pub mod templates;
pub mod types;

pub use boilerplate::BoilerplateGenerator;
pub use error::{Error, Result};
pub use scaffold::{ScaffoldReport, Scaffolder};
pub use types::{FileType, ProjectOptions, ProjectType};
