//! `dev-cli generate` command handler

use anyhow::{Context as _, Result};
use devcli_projects::{BoilerplateGenerator, FileType};
use tracing::debug;

use super::{skip_if_exists, Context};
use crate::cli::GenerateArgs;
use crate::output;

struct GenerateRequest {
    file_type: FileType,
    name: String,
}

/// Write a boilerplate file into the current directory
pub(super) async fn run(args: GenerateArgs, ctx: &mut Context<'_>) -> Result<()> {
    let (file_type, name) = collect(args, ctx)?;
    let request = validate(&file_type, name)?;
    execute(request, ctx)
}

fn collect(args: GenerateArgs, ctx: &mut Context<'_>) -> Result<(String, String)> {
    let file_type = match args.file_type {
        Some(file_type) => file_type,
        None => {
            let types = FileType::all();
            let items: Vec<String> = types
                .iter()
                .map(|t| format!("{:10} - {}", t.as_str(), t.description()))
                .collect();
            let selection = ctx.prompter.select("File type", &items, 0)?;
            types[selection].as_str().to_string()
        }
    };

    let name = match args.name {
        Some(name) => name,
        None => ctx.prompter.input("File name", None, true)?,
    };

    Ok((file_type, name))
}

fn validate(file_type: &str, name: String) -> Result<GenerateRequest> {
    let file_type: FileType = file_type.parse()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("File name cannot be empty");
    }
    Ok(GenerateRequest { file_type, name })
}

fn execute(request: GenerateRequest, ctx: &mut Context<'_>) -> Result<()> {
    debug!("Generating {} '{}' in {}", request.file_type, request.name, ctx.cwd);
    let generator = BoilerplateGenerator::new(ctx.cwd.clone());
    let result = generator.generate(request.file_type, &request.name);

    let Some(path) = skip_if_exists(result)
        .with_context(|| format!("Failed to generate '{}'", request.name))?
    else {
        return Ok(());
    };

    output::success(&format!(
        "Generated {} file '{}'",
        request.file_type, request.name
    ));
    output::kv("Path", path.as_str());
    Ok(())
}
