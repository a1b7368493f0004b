//! Authenticated HTTP client for the backend API.
//!
//! Every outbound request gains `Content-Type: application/json` unless
//! the caller already set a content type, and `Authorization: Bearer
//! <token>` whenever the store holds a credential. The bearer header is
//! attached without consulting the session evaluator: an expired but
//! still-stored token goes out as-is and the server rejects it. The two
//! paths can disagree on the same tick; the evaluator owns eviction
//! timing and the authenticator trusts the store alone.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side: stubs returning errors, since these calls are only
//! meaningful in the browser.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::session::store::CredentialStore;

/// Default backend address when no `API_BASE_URL` was set at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP header name/value pair.
pub type Header = (String, String);

/// Client for the backend REST API.
///
/// The base endpoint address is resolved once at construction and never
/// re-read per request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client pointed at an explicit base address.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client configured from the `API_BASE_URL` compile-time variable,
    /// falling back to the local development server.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Base address this client was constructed with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// GET a path with authentication headers applied, returning the
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns an error string when the request fails to send, the
    /// server responds with a non-success status, or the body cannot be
    /// read. On the server this always errors.
    #[allow(clippy::unused_async)]
    pub async fn get_text(
        &self,
        store: &dyn CredentialStore,
        path: &str,
    ) -> Result<String, String> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.url(path));
            for (name, value) in prepare_headers(&[], store.get().as_deref()) {
                request = request.header(&name, &value);
            }
            let resp = request.send().await.map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(format!("request failed: {}", resp.status()));
            }
            resp.text().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store, path);
            Err("not available on server".to_owned())
        }
    }

    /// POST a JSON body to a path with authentication headers applied,
    /// returning the response body.
    ///
    /// # Errors
    ///
    /// Returns an error string when serialization or the request fails,
    /// or the server responds with a non-success status. On the server
    /// this always errors.
    #[allow(clippy::unused_async)]
    pub async fn post_json(
        &self,
        store: &dyn CredentialStore,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<String, String> {
        #[cfg(feature = "hydrate")]
        {
            let json = serde_json::to_string(body).map_err(|e| e.to_string())?;
            let mut request = gloo_net::http::Request::post(&self.url(path));
            for (name, value) in prepare_headers(&[], store.get().as_deref()) {
                request = request.header(&name, &value);
            }
            let resp = request
                .body(json)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(format!("request failed: {}", resp.status()));
            }
            resp.text().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (store, path);
            let _ = serde_json::to_string(body);
            Err("not available on server".to_owned())
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Assemble the outbound header set for one request.
///
/// Caller-provided headers win on every conflict except the bearer
/// header, which is always attached when a credential is stored — even
/// an expired one. When storage access failed upstream (`token` is
/// `None`), the request goes out without authentication rather than not
/// at all.
#[must_use]
pub fn prepare_headers(caller: &[Header], token: Option<&str>) -> Vec<Header> {
    let mut headers: Vec<Header> = caller.to_vec();

    if !headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
    {
        headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
    }

    if let Some(token) = token {
        headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }

    headers
}
