//! `dev-cli create-repo` command handler

use anyhow::{bail, Context as _, Result};
use devcli_projects::git::clone_repository;
use devcli_projects::github::RepositoryDescriptor;
use devcli_projects::types::validate_name;
use tracing::debug;

use super::{skip_if_exists, Context};
use crate::cli::CreateRepoArgs;
use crate::output;

/// Create a GitHub repository, then clone it into the current directory
pub(super) async fn run(args: CreateRepoArgs, ctx: &mut Context<'_>) -> Result<()> {
    output::header("Create GitHub Repository");

    let clone = !args.no_clone;
    let descriptor = collect(args, ctx)?;
    validate(&descriptor)?;
    execute(descriptor, clone, ctx).await
}

fn collect(args: CreateRepoArgs, ctx: &mut Context<'_>) -> Result<RepositoryDescriptor> {
    let name = match args.name {
        Some(name) => name,
        None => ctx.prompter.input("Repository name", None, true)?,
    };

    let description = match args.description {
        Some(description) => description,
        None => ctx
            .prompter
            .input("Repository description", Some(""), false)?,
    };

    let private = match args.private {
        Some(private) => private,
        None => ctx.prompter.confirm("Make the repository private?", false)?,
    };

    let token = match args.token {
        Some(token) => token,
        None => {
            let saved = ctx.config.token().map(str::to_string);
            let prompt = if saved.is_some() {
                "GitHub token (leave empty to use the saved token)"
            } else {
                "GitHub token"
            };
            let answer = ctx.prompter.password(prompt, saved.is_some())?;
            match saved {
                Some(saved) if answer.is_empty() => saved,
                _ => answer,
            }
        }
    };

    Ok(RepositoryDescriptor {
        name: name.trim().to_string(),
        description: description.trim().to_string(),
        private,
        token: token.trim().to_string(),
    })
}

fn validate(descriptor: &RepositoryDescriptor) -> Result<()> {
    validate_name(&descriptor.name)?;
    if descriptor.token.is_empty() {
        bail!("A GitHub token is required (pass --token or save one with 'dev-cli config')");
    }
    Ok(())
}

async fn execute(
    descriptor: RepositoryDescriptor,
    clone: bool,
    ctx: &mut Context<'_>,
) -> Result<()> {
    output::kv("Repository", &descriptor.name);
    output::kv(
        "Visibility",
        if descriptor.private { "private" } else { "public" },
    );

    // No spinner here: the client reports provider failures on stderr itself
    output::info(&format!("Creating repository {}...", descriptor.name));
    debug!("Repository request: {:?}", descriptor);
    let created = ctx.github.create_repository(&descriptor).await;

    let Some(repo) = created else {
        bail!(
            "Repository '{}' was not created; nothing to clone",
            descriptor.name
        );
    };

    output::success(&format!(
        "Repository '{}' created successfully",
        descriptor.name
    ));
    output::kv("Clone URL", &repo.clone_url);
    if !repo.html_url.is_empty() {
        output::kv("Web URL", &repo.html_url);
    }

    if !clone {
        return Ok(());
    }

    let spinner = output::spinner("Cloning repository...");
    let result = clone_repository(ctx.runner.as_ref(), &repo.clone_url, &ctx.cwd).await;
    spinner.finish_and_clear();

    if let Some(path) = skip_if_exists(result)
        .with_context(|| format!("Failed to clone {}", repo.clone_url))?
    {
        output::success(&format!("Cloned into {}", path));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{offline_github, RecordingRunner, Sandbox};
    use crate::prompt::scripted::{Answer, ScriptedPrompter};
    use devcli_core::UserConfig;
    use devcli_projects::github::GitHubClient;
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CLONE_URL: &str = "https://github.com/octo/demo.git";

    async fn github_accepting(token: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "clone_url": CLONE_URL,
                "html_url": "https://github.com/octo/demo"
            })))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    fn args(name: &str, token: Option<&str>) -> CreateRepoArgs {
        CreateRepoArgs {
            name: Some(name.to_string()),
            description: Some("A demo".to_string()),
            private: Some(false),
            token: token.map(str::to_string),
            no_clone: false,
        }
    }

    #[tokio::test]
    async fn test_creates_and_clones() {
        let server = github_accepting("ghp_flag").await;
        let sandbox = Sandbox::new();
        let mut prompter = ScriptedPrompter::new([]);
        let runner = Arc::new(RecordingRunner::default());
        let mut ctx = sandbox.context(
            &mut prompter,
            runner.clone(),
            GitHubClient::with_base_url(server.uri()),
        );

        run(args("demo", Some("ghp_flag")), &mut ctx).await.unwrap();

        assert_eq!(runner.commands(), vec![format!("git clone {}", CLONE_URL)]);
    }

    #[tokio::test]
    async fn test_no_clone_skips_git() {
        let server = github_accepting("ghp_flag").await;
        let sandbox = Sandbox::new();
        let mut prompter = ScriptedPrompter::new([]);
        let runner = Arc::new(RecordingRunner::default());
        let mut ctx = sandbox.context(
            &mut prompter,
            runner.clone(),
            GitHubClient::with_base_url(server.uri()),
        );

        let mut args = args("demo", Some("ghp_flag"));
        args.no_clone = true;
        run(args, &mut ctx).await.unwrap();

        assert!(runner.commands().is_empty());
    }

    #[tokio::test]
    async fn test_api_failure_aborts_before_clone() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Repository creation failed.",
                "errors": [{ "message": "name already exists on this account" }]
            })))
            .mount(&server)
            .await;

        let sandbox = Sandbox::new();
        let mut prompter = ScriptedPrompter::new([]);
        let runner = Arc::new(RecordingRunner::default());
        let mut ctx = sandbox.context(
            &mut prompter,
            runner.clone(),
            GitHubClient::with_base_url(server.uri()),
        );

        let err = run(args("demo", Some("ghp_flag")), &mut ctx)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("was not created"));
        assert!(runner.commands().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_aborts() {
        let sandbox = Sandbox::new();
        let mut prompter = ScriptedPrompter::new([]);
        let runner = Arc::new(RecordingRunner::default());
        let mut ctx = sandbox.context(&mut prompter, runner.clone(), offline_github());

        assert!(run(args("demo", Some("ghp_flag")), &mut ctx).await.is_err());
        assert!(runner.commands().is_empty());
    }

    #[tokio::test]
    async fn test_empty_token_answer_uses_saved_token() {
        let server = github_accepting("ghp_saved").await;
        let sandbox = Sandbox::new();
        sandbox.save_config(&UserConfig {
            default_project_type: None,
            auth_token: Some("ghp_saved".to_string()),
            ..Default::default()
        });
        let mut prompter = ScriptedPrompter::new([Answer::Text("")]);
        let runner = Arc::new(RecordingRunner::default());
        let mut ctx = sandbox.context(
            &mut prompter,
            runner.clone(),
            GitHubClient::with_base_url(server.uri()),
        );

        run(args("demo", None), &mut ctx).await.unwrap();

        assert_eq!(prompter.remaining(), 0);
        assert_eq!(runner.commands().len(), 1);
    }

    #[tokio::test]
    async fn test_prompts_for_missing_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .and(body_partial_json(serde_json::json!({
                "name": "demo",
                "description": "",
                "private": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "clone_url": CLONE_URL
            })))
            .expect(1)
            .mount(&server)
            .await;

        let sandbox = Sandbox::new();
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("demo"),
            Answer::Text(""),
            Answer::Yes,
            Answer::Text(""),
            Answer::Text("ghp_typed"),
        ]);
        let mut ctx = sandbox.context(
            &mut prompter,
            Arc::new(RecordingRunner::default()),
            GitHubClient::with_base_url(server.uri()),
        );

        run(CreateRepoArgs::default(), &mut ctx).await.unwrap();

        assert_eq!(
            prompter.asked,
            vec![
                "Repository name",
                "Repository description",
                "Make the repository private?",
                "GitHub token",
                "GitHub token",
            ]
        );
    }

    #[tokio::test]
    async fn test_existing_checkout_is_a_warning() {
        let server = github_accepting("ghp_flag").await;
        let sandbox = Sandbox::new();
        std::fs::create_dir(sandbox.cwd.join("demo")).unwrap();
        let mut prompter = ScriptedPrompter::new([]);
        let runner = Arc::new(RecordingRunner::default());
        let mut ctx = sandbox.context(
            &mut prompter,
            runner.clone(),
            GitHubClient::with_base_url(server.uri()),
        );

        run(args("demo", Some("ghp_flag")), &mut ctx).await.unwrap();

        assert!(runner.commands().is_empty());
    }

    #[test]
    fn test_validate_requires_token() {
        let descriptor = RepositoryDescriptor {
            name: "demo".to_string(),
            description: String::new(),
            private: false,
            token: String::new(),
        };
        assert!(validate(&descriptor).is_err());
    }
}
