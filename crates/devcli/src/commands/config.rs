//! `dev-cli config` command handler

use anyhow::{Context as _, Result};
use devcli_core::UserConfig;
use devcli_projects::ProjectType;
use tracing::debug;

use super::Context;
use crate::cli::ConfigArgs;
use crate::output;

/// Show the saved configuration, or change it from flags or prompts
pub(super) async fn run(args: ConfigArgs, ctx: &mut Context<'_>) -> Result<()> {
    if args.show {
        return show(ctx, args.json);
    }

    let updated = collect(args, ctx)?;
    let updated = validate(updated)?;
    execute(updated, ctx)
}

fn show(ctx: &Context<'_>, json: bool) -> Result<()> {
    let displayed = UserConfig {
        default_project_type: ctx.config.default_project_type.clone(),
        auth_token: ctx.config.masked_token(),
        ..Default::default()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&displayed)?);
        return Ok(());
    }

    output::header("Configuration");
    output::kv("File", &ctx.store.path().display().to_string());
    output::kv(
        "Default project type",
        displayed.default_project_type.as_deref().unwrap_or("(not set)"),
    );
    output::kv(
        "GitHub token",
        displayed.auth_token.as_deref().unwrap_or("(not set)"),
    );
    Ok(())
}

fn collect(args: ConfigArgs, ctx: &mut Context<'_>) -> Result<UserConfig> {
    let mut config = ctx.config.clone();

    if args.default_type.is_none() && args.token.is_none() {
        output::header("Configure dev-cli");

        let types = ProjectType::all();
        let items: Vec<String> = types.iter().map(|t| t.as_str().to_string()).collect();
        let current = config
            .default_project_type
            .as_deref()
            .and_then(|saved| items.iter().position(|item| item == saved))
            .unwrap_or(0);
        let selection = ctx
            .prompter
            .select("Default project type", &items, current)?;
        config.default_project_type = Some(items[selection].clone());

        let token = ctx
            .prompter
            .password("GitHub token (leave empty to keep the current one)", true)?;
        if !token.is_empty() {
            config.auth_token = Some(token);
        }
        return Ok(config);
    }

    if let Some(default_type) = args.default_type {
        config.default_project_type = Some(default_type);
    }
    if let Some(token) = args.token {
        let token = token.trim().to_string();
        config.auth_token = (!token.is_empty()).then_some(token);
    }
    Ok(config)
}

/// Normalise the default type to its canonical name
fn validate(mut config: UserConfig) -> Result<UserConfig> {
    if let Some(default_type) = config.default_project_type.as_deref() {
        let parsed: ProjectType = default_type.parse()?;
        config.default_project_type = Some(parsed.as_str().to_string());
    }
    Ok(config)
}

fn execute(config: UserConfig, ctx: &mut Context<'_>) -> Result<()> {
    debug!(
        "Saving configuration (default type: {:?}, token set: {})",
        config.default_project_type,
        config.token().is_some()
    );
    ctx.store
        .save(&config)
        .context("Failed to save configuration")?;
    ctx.config = config;

    output::success(&format!(
        "Configuration saved to {}",
        ctx.store.path().display()
    ));
    Ok(())
}
