//! Integration tests for cloning the created repository

mod common;

use common::{utf8_temp_dir, RecordingRunner};
use devcli_projects::git::clone_repository;
use devcli_projects::Error;

#[tokio::test]
async fn test_clone_runs_git_in_cwd() {
    let (_guard, base) = utf8_temp_dir();
    let runner = RecordingRunner::new();

    let dest = clone_repository(&runner, "https://github.com/octo/demo.git", &base)
        .await
        .unwrap();

    assert_eq!(dest, base.join("demo"));
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "git clone https://github.com/octo/demo.git");
    assert_eq!(calls[0].1.as_deref(), Some(base.as_path()));
}

#[tokio::test]
async fn test_blank_url_never_reaches_git() {
    let (_guard, base) = utf8_temp_dir();
    let runner = RecordingRunner::new();

    let err = clone_repository(&runner, "  ", &base).await.unwrap_err();

    assert!(matches!(err, Error::MissingCloneUrl { .. }));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_existing_checkout_is_not_cloned_over() {
    let (_guard, base) = utf8_temp_dir();
    std::fs::create_dir(base.join("demo")).unwrap();
    let runner = RecordingRunner::new();

    let err = clone_repository(&runner, "https://github.com/octo/demo.git", &base)
        .await
        .unwrap_err();

    assert!(err.is_already_exists());
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_clone_failure_surfaces_output() {
    let (_guard, base) = utf8_temp_dir();
    let runner = RecordingRunner::failing_on("git clone");

    let err = clone_repository(&runner, "https://github.com/octo/demo.git", &base)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Process(_)));
    assert!(err.to_string().contains("simulated failure"));
}

#[tokio::test]
async fn test_clone_requires_git() {
    let (_guard, base) = utf8_temp_dir();
    let runner = RecordingRunner::without("git");

    let err = clone_repository(&runner, "https://github.com/octo/demo.git", &base)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::CommandNotFound { .. }));
}
