//! `dev-cli new` command handler

use anyhow::{Context as _, Result};
use devcli_core::UserConfig;
use devcli_projects::types::validate_name;
use devcli_projects::{ProjectOptions, ProjectType, Scaffolder};
use tracing::debug;

use super::{skip_if_exists, Context};
use crate::cli::NewArgs;
use crate::output;

/// Answers gathered from flags and prompts, not yet checked
#[derive(Debug, Clone, PartialEq, Eq)]
struct NewInput {
    name: String,
    project_type: String,
    options: ProjectOptions,
}

/// A project request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
struct NewRequest {
    name: String,
    project_type: ProjectType,
    options: ProjectOptions,
}

/// Create a new project in the current directory
pub(super) async fn run(args: NewArgs, ctx: &mut Context<'_>) -> Result<()> {
    output::header("Create New Project");

    let input = collect(args, ctx)?;
    let request = validate(input)?;
    execute(request, ctx).await
}

fn collect(args: NewArgs, ctx: &mut Context<'_>) -> Result<NewInput> {
    let NewArgs {
        name,
        project_type,
        typescript,
        tailwind,
        framer_motion,
        react_router,
    } = args;

    let name = match name {
        Some(name) => name,
        None => ctx.prompter.input("Project name", None, true)?,
    };

    let project_type = match project_type {
        Some(project_type) => project_type,
        None => select_project_type(ctx)?,
    };

    let parsed = project_type.parse::<ProjectType>().ok();
    let wants_options = parsed.is_some_and(|t| t.supports_options());

    let options = if wants_options {
        ProjectOptions {
            use_typescript: toggle(ctx, typescript, "Use TypeScript?")?,
            use_tailwind: toggle(ctx, tailwind, "Add Tailwind CSS?")?,
            use_framer_motion: toggle(ctx, framer_motion, "Add Framer Motion?")?,
            use_react_router: toggle(ctx, react_router, "Add React Router?")?,
        }
    } else {
        let ignored = given_toggles(typescript, tailwind, framer_motion, react_router);
        if let (Some(parsed), false) = (parsed, ignored.is_empty()) {
            output::warning(&format!(
                "{} only apply to vite projects; ignored for {}",
                ignored.join(", "),
                parsed
            ));
        }
        ProjectOptions::default()
    };

    Ok(NewInput {
        name,
        project_type,
        options,
    })
}

/// Select among known types, preselecting the saved default
fn select_project_type(ctx: &mut Context<'_>) -> Result<String> {
    let types = ProjectType::all();
    let items: Vec<String> = types
        .iter()
        .map(|t| format!("{:8} - {}", t.as_str(), t.description()))
        .collect();

    let default = saved_type_index(&ctx.config, &types);
    let selection = ctx.prompter.select("Project type", &items, default)?;
    Ok(types[selection].as_str().to_string())
}

/// Position of the saved default type, or the first entry
fn saved_type_index(config: &UserConfig, types: &[ProjectType]) -> usize {
    config
        .default_project_type
        .as_deref()
        .and_then(|saved| saved.parse::<ProjectType>().ok())
        .and_then(|saved| types.iter().position(|t| *t == saved))
        .unwrap_or(0)
}

/// Flag names of the toggles given on the command line
fn given_toggles(
    typescript: Option<bool>,
    tailwind: Option<bool>,
    framer_motion: Option<bool>,
    react_router: Option<bool>,
) -> Vec<&'static str> {
    [
        ("--typescript", typescript),
        ("--tailwind", tailwind),
        ("--framer-motion", framer_motion),
        ("--react-router", react_router),
    ]
    .into_iter()
    .filter_map(|(flag, value)| value.map(|_| flag))
    .collect()
}

fn toggle(ctx: &mut Context<'_>, flag: Option<bool>, prompt: &str) -> Result<bool> {
    match flag {
        Some(value) => Ok(value),
        None => ctx.prompter.confirm(prompt, false),
    }
}

fn validate(input: NewInput) -> Result<NewRequest> {
    validate_name(&input.name)?;
    let project_type: ProjectType = input.project_type.parse()?;

    Ok(NewRequest {
        name: input.name.trim().to_string(),
        project_type,
        options: if project_type.supports_options() {
            input.options
        } else {
            ProjectOptions::default()
        },
    })
}

async fn execute(request: NewRequest, ctx: &mut Context<'_>) -> Result<()> {
    let project_dir = ctx.cwd.join(&request.name);

    output::kv("Project name", &request.name);
    output::kv("Project type", request.project_type.as_str());
    output::kv("Location", project_dir.as_str());
    println!();

    debug!("Scaffold request: {:?}", request);
    let scaffolder = Scaffolder::new(ctx.cwd.clone(), ctx.runner.clone());
    let spinner = output::spinner(&format!("Scaffolding {}...", request.name));
    let result = scaffolder
        .create_project(&request.name, request.project_type, &request.options)
        .await;
    spinner.finish_and_clear();

    let Some(report) = skip_if_exists(result)
        .with_context(|| format!("Failed to create project '{}'", request.name))?
    else {
        return Ok(());
    };

    output::success(&format!("Project '{}' created successfully", request.name));
    for file in &report.files {
        output::kv("Wrote", file.as_str());
    }
    for command in &report.commands {
        output::kv("Ran", command);
    }

    println!();
    output::info("Next steps:");
    println!("   1. cd {}", request.name);
    if report.project_type == ProjectType::Vite {
        println!("   2. npm run dev");
    } else {
        println!("   2. npm init -y && npm install");
    }

    Ok(())
}
