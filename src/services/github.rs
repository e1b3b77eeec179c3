use reqwest::header::USER_AGENT;
use serde_json::Value;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("no github profile found for '{0}'")]
    ProfileNotFound(String),
    #[error("github request failed: {0}")]
    Transport(String),
}

/// Fetch the five most recently created public repos for a GitHub user.
///
/// Client credentials from configuration are attached when present; they
/// raise the rate limit but are not required.
pub async fn recent_repos(username: &str) -> Result<Value, GithubError> {
    let github = &config::config().github;

    let mut url = format!(
        "https://api.github.com/users/{}/repos?per_page=5&sort=created:asc",
        username
    );
    if let (Some(id), Some(secret)) = (&github.client_id, &github.client_secret) {
        url.push_str(&format!("&client_id={}&client_secret={}", id, secret));
    }

    let response = reqwest::Client::new()
        .get(&url)
        .header(USER_AGENT, "devlink-api")
        .send()
        .await
        .map_err(|e| GithubError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(GithubError::ProfileNotFound(username.to_string()));
    }

    response
        .json()
        .await
        .map_err(|e| GithubError::Transport(e.to_string()))
}
