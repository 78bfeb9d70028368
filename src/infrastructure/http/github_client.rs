//! GitHub issues client.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use super::response::{endpoint, send_json};
use crate::domain::entities::{CreatedIssue, NewIssue, RepositoryTarget};
use crate::domain::gateways::{GatewayError, IssueTracker};

/// GitHub REST API client authenticated with a token.
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: Url,
}

impl GitHubClient {
    /// Creates a client for `api_base` (`https://api.github.com`, or a GitHub
    /// Enterprise `/api/v3` root).
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base` is not an absolute URL, the token is not
    /// a valid header value, or the HTTP client cannot be built.
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        let base = Url::parse(api_base).context("invalid GitHub API URL")?;
        if base.cannot_be_a_base() {
            return Err(anyhow!("GitHub API URL '{api_base}' cannot be a base URL"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("docup/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .context("invalid GitHub authorization header")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create GitHub API client")?;

        Ok(Self {
            http,
            api_base: base,
        })
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn create_issue(
        &self,
        repository: &RepositoryTarget,
        issue: NewIssue,
    ) -> Result<CreatedIssue, GatewayError> {
        let url = endpoint(
            "create issue",
            &self.api_base,
            &["repos", repository.owner.as_str(), repository.name.as_str(), "issues"],
        )?;
        send_json("create issue", self.http.post(url).json(&issue)).await
    }
}
