//! Mattermost REST API v4 client.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use url::Url;

use super::response::{endpoint, send_json};
use crate::domain::entities::{ChatUser, NewPost, SourcePost};
use crate::domain::gateways::{ChatPlatform, GatewayError};

/// Mattermost client authenticated with a bot or personal access token.
///
/// `server_url` is where the API is reached; `site_url` is the public address
/// users see, used for permalinks. They differ when the service talks to the
/// chat server over an internal network.
pub struct MattermostClient {
    http: reqwest::Client,
    api_base: Url,
    site_url: String,
}

#[derive(Deserialize)]
struct CreatedPost {
    id: String,
}

#[derive(Deserialize)]
struct PingStatus {
    status: String,
}

impl MattermostClient {
    /// # Errors
    ///
    /// Returns an error if `server_url` is not an absolute URL, the token is
    /// not a valid header value, or the HTTP client cannot be built.
    pub fn new(server_url: &str, site_url: &str, token: &str) -> Result<Self> {
        let mut api_base = Url::parse(server_url).context("invalid Mattermost URL")?;
        api_base
            .path_segments_mut()
            .map_err(|()| anyhow!("Mattermost URL '{server_url}' cannot be a base URL"))?
            .pop_if_empty()
            .extend(["api", "v4"]);

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("docup/", env!("CARGO_PKG_VERSION"))),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .context("invalid Mattermost authorization header")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create Mattermost API client")?;

        Ok(Self {
            http,
            api_base,
            site_url: site_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ChatPlatform for MattermostClient {
    async fn get_user(&self, user_id: &str) -> Result<ChatUser, GatewayError> {
        let url = endpoint("get user", &self.api_base, &["users", user_id])?;
        send_json("get user", self.http.get(url)).await
    }

    async fn get_post(&self, post_id: &str) -> Result<SourcePost, GatewayError> {
        let url = endpoint("get post", &self.api_base, &["posts", post_id])?;
        send_json("get post", self.http.get(url)).await
    }

    async fn create_post(&self, post: NewPost) -> Result<String, GatewayError> {
        let url = endpoint("create post", &self.api_base, &["posts"])?;
        let created: CreatedPost = send_json("create post", self.http.post(url).json(&post)).await?;
        Ok(created.id)
    }

    fn site_url(&self) -> String {
        self.site_url.clone()
    }

    async fn ping(&self) -> bool {
        let result: Result<PingStatus, GatewayError> = async {
            let url = endpoint("ping", &self.api_base, &["system", "ping"])?;
            send_json("ping", self.http.get(url)).await
        }
        .await;
        match result {
            Ok(ping) => ping.status.eq_ignore_ascii_case("ok"),
            Err(e) => {
                tracing::warn!("Mattermost ping failed: {}", e);
                false
            }
        }
    }
}
