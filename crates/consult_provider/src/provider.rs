use std::sync::Arc;

use anyhow::Context as _;
use consult_domain::{CompletionClient, Context, CredentialProvider, ModelId, Reply};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::dto::{Request, Response};
use crate::error::Error;
use crate::utils::{format_http_context, sanitize_headers};

/// Chat-completion client for OpenAI-compatible endpoints.
///
/// The credential is resolved on every call. No timeout or retry is applied:
/// a call either returns the model's reply or the upstream failure.
#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client,
    base_url: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl OpenAIProvider {
    pub fn new(base_url: Url, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { client: Client::new(), base_url, credentials }
    }

    fn url(&self) -> anyhow::Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join("chat/completions")
            .with_context(|| format!("Failed to append chat/completions to base URL: {base}"))
    }

    fn headers(&self) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = self.credentials.api_key() {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
                .context("API key contains characters not allowed in a header")?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    async fn inner_complete(&self, model: &ModelId, context: Context) -> anyhow::Result<Reply> {
        let request = Request::new(model, context);
        let url = self.url()?;
        let headers = self.headers()?;

        info!(
            url = %url,
            model = %model,
            headers = ?sanitize_headers(&headers),
            message_count = %request.message_count(),
            "Connecting Upstream"
        );

        let response = self
            .client
            .post(url.clone())
            .headers(headers)
            .json(&request)
            .send()
            .await
            .with_context(|| format_http_context("POST", &url))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    debug!(error = %error, %status, "Failed to read upstream error body");
                    String::new()
                }
            };
            return Err(Error::InvalidStatusCode { status, body })
                .with_context(|| format_http_context("POST", &url));
        }

        let response: Response = response
            .json()
            .await
            .with_context(|| format_http_context("POST", &url))
            .context("Failed to parse chat completion response")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(Error::EmptyChoices)
            .with_context(|| format_http_context("POST", &url))?;

        let content = choice.message.content.unwrap_or_default();
        debug!(length = content.len(), "Received completion");
        Ok(Reply::new(content))
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenAIProvider {
    async fn complete(&self, model: &ModelId, context: Context) -> anyhow::Result<Reply> {
        self.inner_complete(model, context).await
    }
}
