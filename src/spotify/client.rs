use std::future::Future;

use reqwest::{Client, Method, header::HeaderName};

use crate::error::TransportError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A fully built outbound request.
///
/// Request builders in [`crate::spotify::requests`] produce these; an
/// [`ApiClient`] sends them. Keeping the request a plain value lets tests
/// inspect exactly what would go over the wire.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(HeaderName, String)>,
    /// Fields sent as an `application/x-www-form-urlencoded` body. Values are
    /// kept decoded; encoding happens when the request is built.
    pub form: Option<Vec<(String, String)>>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            form: None,
        }
    }

    pub fn post_form(url: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: Vec::new(),
            form: Some(
                fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    pub fn header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Looks up a header value by its (case-insensitive) name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .as_ref()?
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Sends requests and hands back the raw response body.
///
/// The HTTP status is deliberately not part of the contract: the API reports
/// failures through an `error` object in the body, which callers inspect.
pub trait ApiClient {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// [`ApiClient`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, TransportError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// Turns an [`ApiRequest`] into a `reqwest` request, url-encoding the form
    /// fields.
    pub fn build(&self, request: &ApiRequest) -> Result<reqwest::Request, TransportError> {
        let mut builder = self.http.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.clone(), value.as_str());
        }
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }
        Ok(builder.build()?)
    }
}

impl ApiClient for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<String, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.http.execute(self.build(&request)?).await?;
        tracing::debug!(status = %response.status(), url = %request.url, "response received");

        Ok(response.text().await?)
    }
}
