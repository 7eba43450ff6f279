//! Project scaffolding
//!
//! Minimal project types are written directly: a directory plus a couple of
//! placeholder files. The Vite type is delegated to external tools run one
//! after another:
//!
//! 1. `npm create vite@latest <name> -- --template react[-ts]`
//! 2. `npm install`
//! 3. one combined `npm install <extras…>` when any toggle asks for packages
//! 4. `npx tailwindcss init -p` plus two overwritten files when Tailwind is on
//!
//! A failing step aborts the remaining ones. Nothing already created is
//! rolled back.

use crate::error::{Error, Result};
use crate::templates::{
    minimal_project_files, TAILWIND_CONFIG, TAILWIND_CONFIG_FILE, TAILWIND_INDEX_CSS,
    TAILWIND_INDEX_CSS_FILE,
};
use crate::types::{validate_name, ProjectOptions, ProjectType};
use camino::{Utf8Path, Utf8PathBuf};
use devcli_core::process::quote;
use devcli_core::CommandRunner;
use std::sync::Arc;
use tracing::{debug, info};

/// Package manager used for Vite projects
const PACKAGE_MANAGER: &str = "npm";

/// What a successful scaffold produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Root of the new project
    pub project_dir: Utf8PathBuf,
    /// Type that was scaffolded
    pub project_type: ProjectType,
    /// Files written directly by the scaffolder
    pub files: Vec<Utf8PathBuf>,
    /// External command lines run, in order
    pub commands: Vec<String>,
}

impl ScaffoldReport {
    fn new(project_dir: Utf8PathBuf, project_type: ProjectType) -> Self {
        Self {
            project_dir,
            project_type,
            files: Vec::new(),
            commands: Vec::new(),
        }
    }
}

/// Creates new projects below a base directory
pub struct Scaffolder {
    base_dir: Utf8PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl Scaffolder {
    /// Create a scaffolder writing into `base_dir`, running tools through `runner`
    pub fn new(base_dir: impl Into<Utf8PathBuf>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            base_dir: base_dir.into(),
            runner,
        }
    }

    /// Create project `name` of `project_type`
    ///
    /// `options` only matter for [`ProjectType::Vite`].
    ///
    /// # Errors
    /// - [`Error::InvalidName`] if `name` is not a single path component
    /// - [`Error::DirectoryExists`] if the target already exists (nothing is touched)
    /// - [`Error::CommandNotFound`] if npm is missing for a Vite project
    /// - [`Error::Process`] if any external step fails
    pub async fn create_project(
        &self,
        name: &str,
        project_type: ProjectType,
        options: &ProjectOptions,
    ) -> Result<ScaffoldReport> {
        validate_name(name)?;
        let name = name.trim();
        let project_dir = self.base_dir.join(name);

        if project_dir.exists() {
            return Err(Error::directory_exists(name));
        }

        info!("Creating {} project '{}' in {}", project_type, name, self.base_dir);

        if project_type.is_minimal() {
            self.create_minimal(&project_dir, project_type)
        } else {
            self.create_vite(name, &project_dir, options).await
        }
    }

    fn create_minimal(
        &self,
        project_dir: &Utf8Path,
        project_type: ProjectType,
    ) -> Result<ScaffoldReport> {
        std::fs::create_dir(project_dir)?;
        debug!("Created directory {}", project_dir);

        let mut report = ScaffoldReport::new(project_dir.to_path_buf(), project_type);
        for (relative, content) in minimal_project_files(project_type) {
            let path = project_dir.join(relative);
            write_file(&path, content)?;
            report.files.push(path);
        }

        info!("Created {} project structure", project_type);
        Ok(report)
    }

    async fn create_vite(
        &self,
        name: &str,
        project_dir: &Utf8Path,
        options: &ProjectOptions,
    ) -> Result<ScaffoldReport> {
        if !self.runner.is_available(PACKAGE_MANAGER) {
            return Err(Error::command_not_found(PACKAGE_MANAGER));
        }

        let mut report = ScaffoldReport::new(project_dir.to_path_buf(), ProjectType::Vite);

        let template = if options.use_typescript {
            "react-ts"
        } else {
            "react"
        };
        let create = format!(
            "{} create vite@latest {} -- --template {}",
            PACKAGE_MANAGER,
            quote(name),
            template
        );
        self.step(&mut report, create, &self.base_dir).await?;

        let install = format!("{} install", PACKAGE_MANAGER);
        self.step(&mut report, install, project_dir).await?;

        let extras = options.extra_packages();
        if !extras.is_empty() {
            let install_extras = format!("{} install {}", PACKAGE_MANAGER, extras.join(" "));
            self.step(&mut report, install_extras, project_dir).await?;
        }

        if options.use_tailwind {
            self.step(&mut report, "npx tailwindcss init -p".to_string(), project_dir)
                .await?;

            for (relative, content) in [
                (TAILWIND_CONFIG_FILE, TAILWIND_CONFIG),
                (TAILWIND_INDEX_CSS_FILE, TAILWIND_INDEX_CSS),
            ] {
                let path = project_dir.join(relative);
                write_file(&path, content)?;
                report.files.push(path);
            }
        }

        info!("Vite project '{}' ready", name);
        Ok(report)
    }

    async fn step(
        &self,
        report: &mut ScaffoldReport,
        command_line: String,
        cwd: &Utf8Path,
    ) -> Result<()> {
        self.runner.run(&command_line, Some(cwd)).await?;
        report.commands.push(command_line);
        Ok(())
    }
}

fn write_file(path: &Utf8Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    debug!("Wrote {}", path);
    Ok(())
}
