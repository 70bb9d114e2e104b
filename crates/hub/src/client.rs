use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use slotcast_core::{errors::BookingError, models::UserId};
use thiserror::Error;

use crate::config::HubConfig;
use crate::models::{CastRequest, Envelope, Profile, UserResult, UsersResult};

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Hub request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Hub returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<HubError> for BookingError {
    fn from(err: HubError) -> Self {
        BookingError::Fetch(eyre::Report::new(err))
    }
}

/// HTTP client for the social hub API.
#[derive(Debug, Clone)]
pub struct HubClient {
    http: Client,
    config: HubConfig,
}

impl HubClient {
    pub fn new(config: HubConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn user_by_fid(&self, fid: UserId) -> Result<Profile, HubError> {
        let envelope: Envelope<UserResult> = self
            .get("user", &[("fid", fid.to_string())])
            .await?;
        Ok(envelope.result.user)
    }

    pub async fn search_users(&self, query: &str) -> Result<Vec<Profile>, HubError> {
        let envelope: Envelope<UsersResult> = self
            .get("user-search", &[("q", query.to_string())])
            .await?;
        Ok(envelope.result.users)
    }

    /// The hub has no trending endpoint; an empty search ranked by the hub
    /// stands in for it.
    pub async fn trending_users(&self, limit: usize) -> Result<Vec<Profile>, HubError> {
        let envelope: Envelope<UsersResult> = self
            .get(
                "user-search",
                &[("q", String::new()), ("limit", limit.to_string())],
            )
            .await?;
        Ok(envelope.result.users)
    }

    /// Publish `text` as a cast, optionally as a reply to `parent_url`.
    pub async fn send_cast(
        &self,
        text: &str,
        parent_url: Option<&str>,
    ) -> Result<serde_json::Value, HubError> {
        let payload = CastRequest {
            text,
            embeds: Vec::new(),
            parent: parent_url,
        };
        let request = self.authorize(self.http.post(self.config.endpoint("casts")).json(&payload));
        Self::read_json(request).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HubError> {
        tracing::debug!("GET {} {:?}", self.config.endpoint(path), query);
        let request = self.authorize(self.http.get(self.config.endpoint(path)).query(query));
        Self::read_json(request).await
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, HubError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HubError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
