//! # Folio Client
//!
//! Typed gateway to the folio API: one method per server operation, a
//! bounded request timeout, and retry-with-backoff on transient server
//! failures for the idempotent read calls. Mutations are single-attempt so
//! a client retry can never double-fire a create or a submission.

mod error;
mod retry;

pub use error::ApiClientError;
pub use retry::RetryPolicy;

use std::time::Duration;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use folio_shared::ErrorBody;
use folio_shared::dto::{
    BlogByTagResponse, BlogListResponse, BlogPostDto, ClearPostsResponse, ContactListResponse,
    ContactRequest, CreateBlogPostRequest, DeletePostResponse, HealthResponse,
    SubmitContactResponse,
};

use crate::retry::with_retry;

/// Bound on any single request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the admin credential.
const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Typed API gateway.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    admin_key: Option<String>,
    retry: RetryPolicy,
}

impl ApiClient {
    /// `base_url` is the API prefix, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_key: None,
            retry: RetryPolicy::default(),
        })
    }

    /// Attach the admin credential sent with admin-only calls.
    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        self.admin_key = Some(key.into());
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    // Reads - retried on transient server failures.

    pub async fn list_posts(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<BlogListResponse, ApiClientError> {
        let url = format!("{}/blog?page={page}&limit={limit}", self.base_url);
        with_retry(self.retry, || self.get_json(&url)).await
    }

    pub async fn get_post(&self, slug: &str) -> Result<BlogPostDto, ApiClientError> {
        let url = format!("{}/blog/{slug}", self.base_url);
        with_retry(self.retry, || self.get_json(&url)).await
    }

    pub async fn list_tags(&self) -> Result<Vec<String>, ApiClientError> {
        let url = format!("{}/blog/tags/all", self.base_url);
        with_retry(self.retry, || self.get_json(&url)).await
    }

    pub async fn list_posts_by_tag(
        &self,
        tag: &str,
        page: u64,
        limit: u64,
    ) -> Result<BlogByTagResponse, ApiClientError> {
        let url = format!("{}/blog/tag/{tag}?page={page}&limit={limit}", self.base_url);
        with_retry(self.retry, || self.get_json(&url)).await
    }

    /// Admin-only.
    pub async fn list_contacts(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<ContactListResponse, ApiClientError> {
        let url = format!("{}/contact?page={page}&limit={limit}", self.base_url);
        with_retry(self.retry, || async {
            let resp = self.admin(self.http.get(&url)).send().await?;
            Self::decode(resp).await
        })
        .await
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiClientError> {
        let url = format!("{}/health", self.base_url);
        with_retry(self.retry, || self.get_json(&url)).await
    }

    // Mutations - single attempt.

    /// Admin-only.
    pub async fn create_post(
        &self,
        post: &CreateBlogPostRequest,
    ) -> Result<BlogPostDto, ApiClientError> {
        let url = format!("{}/blog", self.base_url);
        let resp = self.admin(self.http.post(&url)).json(post).send().await?;
        Self::decode(resp).await
    }

    /// Admin-only.
    pub async fn delete_post(&self, id: Uuid) -> Result<DeletePostResponse, ApiClientError> {
        let url = format!("{}/blog/{id}", self.base_url);
        let resp = self.admin(self.http.delete(&url)).send().await?;
        Self::decode(resp).await
    }

    /// Admin-only. Removes every post.
    pub async fn clear_posts(&self) -> Result<ClearPostsResponse, ApiClientError> {
        let url = format!("{}/blog/clear/all", self.base_url);
        let resp = self.admin(self.http.delete(&url)).send().await?;
        Self::decode(resp).await
    }

    pub async fn submit_contact(
        &self,
        contact: &ContactRequest,
    ) -> Result<SubmitContactResponse, ApiClientError> {
        let url = format!("{}/contact", self.base_url);
        let resp = self.http.post(&url).json(contact).send().await?;
        Self::decode(resp).await
    }

    // Plumbing.

    fn admin(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.admin_key {
            Some(key) => builder.header(ADMIN_KEY_HEADER, key),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiClientError> {
        let resp = self.http.get(url).send().await?;
        Self::decode(resp).await
    }

    /// Non-2xx responses become [`ApiClientError::Api`] carrying the
    /// server's `{ message }` when it sent one.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let message = resp
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));

        Err(ApiClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/api");
    }

    #[test]
    fn admin_key_is_attached_when_configured() {
        let client = ApiClient::new("http://localhost:8080/api")
            .unwrap()
            .with_admin_key("secret");

        let request = client
            .admin(client.http.get("http://localhost:8080/api/contact"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(ADMIN_KEY_HEADER).unwrap(),
            "secret"
        );
    }
}
