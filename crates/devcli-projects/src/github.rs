//! GitHub repository creation
//!
//! One authenticated `POST /user/repos`. Failures never propagate as errors:
//! the provider's message, status and details are logged and the caller gets
//! `None`, which it must treat as "no repository to clone".

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

/// Public GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Input to [`GitHubClient::create_repository`]
#[derive(Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub token: String,
}

// Keep the token out of debug logs
impl std::fmt::Debug for RepositoryDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("private", &self.private)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Request body for repository creation
#[derive(Debug, Serialize)]
struct CreateRepositoryRequest<'a> {
    name: &'a str,
    description: &'a str,
    private: bool,
    auto_init: bool,
    gitignore_template: &'a str,
    license_template: &'a str,
}

impl<'a> CreateRepositoryRequest<'a> {
    fn from_descriptor(descriptor: &'a RepositoryDescriptor) -> Self {
        Self {
            name: &descriptor.name,
            description: &descriptor.description,
            private: descriptor.private,
            auto_init: true,
            gitignore_template: "Node",
            license_template: "mit",
        }
    }
}

/// Fields of a successful response that we use
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRepository {
    pub clone_url: String,
    #[serde(default)]
    pub html_url: String,
}

/// Minimal GitHub REST client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubClient {
    /// Client for api.github.com
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client for another API root (GitHub Enterprise, test servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a repository for the authenticated user
    ///
    /// # Returns
    /// The created repository on a 2xx response, `None` on any API or
    /// transport failure (already logged).
    pub async fn create_repository(
        &self,
        descriptor: &RepositoryDescriptor,
    ) -> Option<CreatedRepository> {
        let url = format!("{}/user/repos", self.base_url);
        debug!("POST {} for {:?}", url, descriptor);

        let response = match self
            .http
            .post(&url)
            .bearer_auth(&descriptor.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(
                reqwest::header::USER_AGENT,
                concat!("dev-cli/", env!("CARGO_PKG_VERSION")),
            )
            .json(&CreateRepositoryRequest::from_descriptor(descriptor))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Error creating repository: {}", e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            log_api_failure(status, &body);
            return None;
        }

        match response.json::<CreatedRepository>().await {
            Ok(repo) => {
                info!("Repository {} created successfully", descriptor.name);
                info!("Clone URL: {}", repo.clone_url);
                Some(repo)
            }
            Err(e) => {
                error!("Repository created but the response could not be read: {}", e);
                None
            }
        }
    }
}

fn log_api_failure(status: StatusCode, body: &Value) {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message from provider");
    error!("Error creating repository: {}", message);
    error!("Status code: {}", status.as_u16());

    if let Some(details) = body.get("errors").and_then(Value::as_array) {
        for detail in details {
            let text = detail
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| detail.to_string());
            error!("  - {}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let descriptor = RepositoryDescriptor {
            name: "demo".to_string(),
            description: "A demo".to_string(),
            private: true,
            token: "t".to_string(),
        };
        let body =
            serde_json::to_value(CreateRepositoryRequest::from_descriptor(&descriptor)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "name": "demo",
                "description": "A demo",
                "private": true,
                "auto_init": true,
                "gitignore_template": "Node",
                "license_template": "mit"
            })
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let descriptor = RepositoryDescriptor {
            name: "demo".to_string(),
            description: String::new(),
            private: false,
            token: "ghp_supersecret".to_string(),
        };
        let rendered = format!("{:?}", descriptor);
        assert!(!rendered.contains("ghp_supersecret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GitHubClient::with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url, "http://localhost:1234");
    }
}
