use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
    USER_AGENT,
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::*;
use crate::Credentials;

const USER_AGENT_VALUE: &str = concat!("kraken-client/", env!("CARGO_PKG_VERSION"));

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Body metadata attached to upload requests.
#[derive(Debug, Clone, Copy)]
struct UploadContent<'a> {
    content_type: Option<&'a str>,
    length: usize,
}

impl KrakenClient {
    /// Create a client for the public kraken endpoints.
    ///
    /// `http` is used as-is; timeouts and proxies belong on it.
    pub fn new(credentials: Credentials, http: reqwest::Client) -> Self {
        Self::with_config(ClientConfig::new(credentials), http)
    }

    pub fn with_config(config: ClientConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request against the API base URL.
    ///
    /// GET parameters are encoded into the query string; for any other verb
    /// they become an `application/x-www-form-urlencoded` body.
    pub fn api_request(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<Request, ApiError> {
        let (mut url, headers) = self.prepare(
            self.config.api_url(),
            self.config.api_version(),
            path,
            None,
        )?;

        let builder = if method == Method::GET {
            if !params.is_empty() {
                url.query_pairs_mut().extend_pairs(params.iter());
            }
            self.http.request(method, url).headers(headers)
        } else if params.is_empty() {
            self.http.request(method, url).headers(headers)
        } else {
            self.http.request(method, url).headers(headers).form(params)
        };

        Ok(builder.build()?)
    }

    /// Build a request against the upload host with a raw byte body.
    ///
    /// `query` always goes to the query string, whatever the verb.
    pub fn upload_request(
        &self,
        method: Method,
        path: &str,
        query: &Params,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<Request, ApiError> {
        let content = UploadContent {
            content_type,
            length: body.len(),
        };
        let (mut url, headers) = self.prepare(
            self.config.upload_url(),
            self.config.upload_version(),
            path,
            Some(content),
        )?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(self
            .http
            .request(method, url)
            .headers(headers)
            .body(body)
            .build()?)
    }

    /// Send a built request and decode the response.
    ///
    /// - 204, or 2xx with `Content-Length: 0`: `T::default()`, nothing is
    ///   decoded.
    /// - other 2xx: the body decoded as `T`.
    /// - anything else: the body decoded as an [`ApiError`], best effort. A
    ///   bodiless error status is still an error.
    ///
    /// Transport and decode failures become local errors. Exactly one HTTP
    /// round-trip is made; nothing is retried.
    pub async fn send<T>(&self, request: Request) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, path = %path, "Sending kraken request");

        let resp = self.http.execute(request).await?;
        let status = resp.status();

        if status == StatusCode::NO_CONTENT
            || (status.is_success() && declares_empty_body(resp.headers()))
        {
            return Ok(T::default());
        }

        let body = resp.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        tracing::warn!(
            %method,
            path = %path,
            status = status.as_u16(),
            "Kraken API returned an error"
        );
        Err(decode_error_body(&body))
    }

    /// Build and send an API request in one step.
    pub async fn call<T>(&self, method: Method, path: &str, params: &Params) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.api_request(method, path, params)?;
        self.send(request).await
    }

    /// Build and send an upload request in one step.
    pub(super) async fn call_upload<T>(
        &self,
        method: Method,
        path: &str,
        query: &Params,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.upload_request(method, path, query, content_type, body)?;
        self.send(request).await
    }

    /// Resolve the target URL and assemble the headers every request carries.
    fn prepare(
        &self,
        base_url: &str,
        version: u32,
        path: &str,
        upload: Option<UploadContent<'_>>,
    ) -> Result<(Url, HeaderMap), ApiError> {
        let url = resolve_url(base_url, path)?;
        let credentials = self.config.credentials();

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_str(&accept_header(version))?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("OAuth {}", credentials.access_token))?,
        );
        headers.insert(
            HeaderName::from_static("client-id"),
            HeaderValue::from_str(&credentials.client_id)?,
        );

        if let Some(content) = upload {
            if let Some(content_type) = content.content_type.filter(|v| !v.is_empty()) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type)?);
            }
            headers.insert(CONTENT_LENGTH, HeaderValue::from(content.length));
        }

        Ok((url, headers))
    }
}

fn accept_header(version: u32) -> String {
    format!("application/vnd.twitchtv.v{version}+json")
}

/// Join `path` onto `base_url`. Absolute paths and full URLs are rejected so
/// a request can never leave the configured host or its path prefix.
fn resolve_url(base_url: &str, path: &str) -> Result<Url, ApiError> {
    if path.starts_with('/') || Url::parse(path).is_ok() {
        return Err(ApiError::local(format!(
            "request path must be relative to the base URL: {path}"
        )));
    }
    let base = Url::parse(base_url)?;
    Ok(base.join(path)?)
}

/// Escape a caller-supplied id for use as one path segment.
///
/// Empty and dot segments are rejected: joining would resolve them onto a
/// different resource.
pub(super) fn path_segment(value: &str) -> Result<String, ApiError> {
    if matches!(value, "" | "." | "..") {
        return Err(ApiError::local(format!(
            "invalid path segment: {value:?}"
        )));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

fn declares_empty_body(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

fn decode_error_body(body: &[u8]) -> ApiError {
    serde_json::from_slice(body).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "Error response is not a kraken error envelope");
        ApiError::default()
    })
}
