use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::error::{OdpsError, Result};

pub const CONTENT_TYPE: &str = "Content-Type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// Blocking request/response access to the ODPS REST API.
///
/// `resource` is a path relative to the service endpoint, e.g.
/// `/projects/prj/onlinemodels/iris`. Non-success statuses surface as
/// [`OdpsError::Remote`]; implementations never retry.
pub trait RestTransport: Send + Sync {
    /// GET `resource` and return the response body.
    fn get(&self, resource: &str) -> Result<String>;

    /// Issue `method` on `resource` with a raw string body.
    fn request(
        &self,
        resource: &str,
        method: Method,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL, e.g. `http://service.odps.example.com/api`.
    pub endpoint: String,

    /// Sent as `Authorization: Bearer <token>` when set.
    pub token: Option<String>,

    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/api".to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// [`RestTransport`] over a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    endpoint: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint,
            token: config.token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, resource: &str) -> String {
        join_url(&self.endpoint, resource)
    }

    fn auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => builder.bearer_auth(t),
            None => builder,
        }
    }

    fn check(resource: &str, method: Method, resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().unwrap_or_else(|err| {
            tracing::debug!(resource, error = %err, "failed to read error body");
            String::new()
        });
        tracing::warn!(
            resource,
            method = method.as_str(),
            status = status.as_u16(),
            "request failed"
        );
        Err(OdpsError::Remote {
            status: status.as_u16(),
            resource: resource.to_string(),
            message,
        })
    }
}

impl RestTransport for RestClient {
    fn get(&self, resource: &str) -> Result<String> {
        let resp = self.auth(self.http.get(self.url(resource))).send()?;
        let resp = Self::check(resource, Method::Get, resp)?;
        Ok(resp.text()?)
    }

    fn request(
        &self,
        resource: &str,
        method: Method,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<()> {
        let mut builder = self.auth(self.http.request(method.into(), self.url(resource)));
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let resp = builder.body(body).send()?;
        Self::check(resource, method, resp)?;
        Ok(())
    }
}

fn join_url(endpoint: &str, resource: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        resource.trim_start_matches('/')
    )
}
