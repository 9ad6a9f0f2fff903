//! Blocking `ureq` agent behind the async `Transport` seam.

use async_trait::async_trait;
use posts_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Runs each request on tokio's blocking pool so the event loop keeps going
/// while a call is in flight.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // Status codes are data here; `PostClient` decides what an error is.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send(&agent, request))
            .await
            .map_err(|e| ApiError::TransportError(e.to_string()))?
    }
}

fn send(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let headers = &request.headers;
    let path = request.path.as_str();
    let body = request.body.as_deref();

    let result = match request.method {
        HttpMethod::Get => with_headers(agent.get(path), headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(path), headers).call(),
        HttpMethod::Post => send_body(with_headers(agent.post(path), headers), body),
        HttpMethod::Put => send_body(with_headers(agent.put(path), headers), body),
        HttpMethod::Patch => send_body(with_headers(agent.patch(path), headers), body),
    };
    let mut response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::TransportError(e.to_string()))?;

    Ok(HttpResponse { status, headers, body })
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_body(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    body: Option<&str>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
