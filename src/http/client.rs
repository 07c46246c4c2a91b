// SPDX-License-Identifier: MPL-2.0
//! Thin GET/POST client for the panel backend.
//!
//! Every request URL is `base_url + path`, concatenated verbatim. Responses
//! are decoded with [`default_parser`] unless the caller supplies a parser.
//!
//! There is no retry, timeout, or cancellation, and the status code is not
//! inspected: a 500 response is parsed and returned like a 200. Callers that
//! care about the status must pass their own parser.

use super::body::{parse_body, Payload, ResponseBody};
use super::params::{serialize, Params};
use crate::app::config::HttpConfig;
use crate::error::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use std::future::Future;

/// Content type browsers attach to string bodies.
const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";

/// HTTP client with a mutable base URL.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    inner: reqwest::Client,
}

impl Client {
    /// Creates a client that prefixes every path with `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("panel-kit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            inner,
        })
    }

    /// Creates a client from the `[http]` settings section.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::new(config.base_url.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Changes the prefix used by subsequent requests.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// URL a GET for `path` with `params` is sent to.
    ///
    /// The `?` separator is always present, even with no parameters.
    #[must_use]
    pub fn get_url(&self, path: &str, params: &Params) -> String {
        format!("{}{}?{}", self.base_url, path, serialize(params))
    }

    /// Sends a GET request and decodes the body with [`default_parser`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the request cannot be sent or the body
    /// cannot be read.
    pub async fn get(&self, path: &str, params: &Params) -> Result<ResponseBody> {
        self.get_with(path, params, default_parser).await
    }

    /// Sends a GET request and hands the response to `parser`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the request cannot be sent, or whatever
    /// `parser` returns.
    pub async fn get_with<T, P, F>(&self, path: &str, params: &Params, parser: P) -> Result<T>
    where
        P: FnOnce(reqwest::Response) -> F,
        F: Future<Output = Result<T>>,
    {
        let url = self.get_url(path, params);
        tracing::debug!(%url, "GET");
        let response = self.inner.get(&url).send().await?;
        log_status(&response);
        parser(response).await
    }

    /// Sends a POST request and decodes the body with [`default_parser`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the request cannot be sent or the body
    /// cannot be read, and [`Error::Json`] if a JSON payload cannot be
    /// serialized.
    pub async fn post(&self, path: &str, body: impl Into<Payload>) -> Result<ResponseBody> {
        self.post_with(path, body, default_parser).await
    }

    /// Sends a POST request and hands the response to `parser`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the request cannot be sent,
    /// [`Error::Json`] if a JSON payload cannot be serialized, or whatever
    /// `parser` returns.
    pub async fn post_with<T, P, F>(
        &self,
        path: &str,
        body: impl Into<Payload>,
        parser: P,
    ) -> Result<T>
    where
        P: FnOnce(reqwest::Response) -> F,
        F: Future<Output = Result<T>>,
    {
        let url = format!("{}{}", self.base_url, path);
        let text = body.into().into_text()?;
        tracing::debug!(%url, bytes = text.len(), "POST");
        let response = self
            .inner
            .post(&url)
            .header(CONTENT_TYPE, TEXT_CONTENT_TYPE)
            .body(text)
            .send()
            .await?;
        log_status(&response);
        parser(response).await
    }
}

/// Reads the whole body as text and decodes it with [`parse_body`].
///
/// # Errors
///
/// Returns [`Error::Http`] only if the body cannot be read. Malformed JSON is
/// not an error.
pub async fn default_parser(response: reqwest::Response) -> Result<ResponseBody> {
    let text = response.text().await.map_err(Error::from)?;
    Ok(parse_body(text))
}

fn log_status(response: &reqwest::Response) {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, url = %response.url(), "non-success status passed to parser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_url_joins_base_path_and_query() {
        let client = Client::new("http://127.0.0.1:9876/").unwrap();
        let params = Params::new().with("a", "1").with("b", "");
        assert_eq!(
            client.get_url("logs", &params),
            "http://127.0.0.1:9876/logs?a=1"
        );
    }

    #[test]
    fn get_url_keeps_separator_without_params() {
        let client = Client::new("http://localhost/api/").unwrap();
        assert_eq!(
            client.get_url("status", &Params::new()),
            "http://localhost/api/status?"
        );
    }

    #[test]
    fn base_url_is_mutable() {
        let mut client = Client::new("http://a/").unwrap();
        client.set_base_url("http://b/");
        assert_eq!(client.base_url(), "http://b/");
        assert!(client.get_url("x", &Params::new()).starts_with("http://b/x"));
    }

    #[tokio::test]
    async fn unreachable_host_surfaces_http_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = Client::new("http://127.0.0.1:9/").unwrap();
        let result = client.get("status", &Params::new()).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn malformed_base_url_surfaces_http_error() {
        let client = Client::new("not a url").unwrap();
        let result = client.post("x", "raw").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
