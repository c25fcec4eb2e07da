//! Thin asynchronous client for the agent invocation service.
//!
//! One request per call: no retry, no timeout, no cancellation. Any
//! non-success status is surfaced with its code.

use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::util::config::{config, parse_base_url};

const USER_AGENT: &str = concat!("talentia-front/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum AgentClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("base URL {0} cannot carry a path")]
    CannotBeABase(String),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("agent service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("agent service returned no body (HTTP {status})")]
    MissingBody { status: u16 },
}

/// An agent as listed by `GET /agents`. Fields beyond the ones the UI reads
/// are kept untouched in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentDescriptor {
    pub id: String,
    pub name: String,
    /// Outer `None`: key absent. `Some(None)`: explicit `null`.
    #[serde(
        default,
        deserialize_with = "present_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AgentDescriptor {
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_ref().and_then(Option::as_deref)
    }
}

/// Marks a field as present even when its value is `null`.
fn present_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvokeRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl InvokeRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_thread(mut self, thread_id: Option<String>) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub content: String,
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub run_id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AgentClient {
    http: Client,
    base_url: Url,
}

impl AgentClient {
    /// Client for the configured agent service address.
    pub fn new() -> Result<Self, AgentClientError> {
        Self::from_url(config().agent_api_url.clone())
    }

    pub fn with_base_url(base: &str) -> Result<Self, AgentClientError> {
        Self::from_url(parse_base_url(base)?)
    }

    fn from_url(base_url: Url) -> Result<Self, AgentClientError> {
        if base_url.cannot_be_a_base() {
            return Err(AgentClientError::CannotBeABase(base_url.to_string()));
        }
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    /// `GET /agents`
    pub async fn list_agents(&self) -> Result<Vec<AgentDescriptor>, AgentClientError> {
        let url = self.endpoint(&["agents"])?;
        let response = self.send(self.http.get(url)).await?;
        let agents: Vec<AgentDescriptor> = response.json().await?;
        debug!("agent service listed {} agents", agents.len());
        Ok(agents)
    }

    /// `POST /{agent_id}/invoke`
    pub async fn invoke(
        &self,
        agent_id: &str,
        request: &InvokeRequest,
    ) -> Result<InvokeResponse, AgentClientError> {
        let url = self.endpoint(&[agent_id, "invoke"])?;
        let response = self.send(self.http.post(url).json(request)).await?;
        Ok(response.json().await?)
    }

    /// `POST /{agent_id}/stream`, handing back the body as it arrives.
    pub async fn stream(
        &self,
        agent_id: &str,
        request: &InvokeRequest,
    ) -> Result<impl Stream<Item = Result<Bytes, AgentClientError>>, AgentClientError> {
        let url = self.endpoint(&[agent_id, "stream"])?;
        let response = self.send(self.http.post(url).json(request)).await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            warn!("agent {agent_id} stream answered HTTP {status} without a body");
            return Err(AgentClientError::MissingBody {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes_stream().map_err(AgentClientError::from))
    }

    /// `GET /health`; the payload shape belongs to the service.
    pub async fn health(&self) -> Result<Value, AgentClientError> {
        let url = self.endpoint(&["health"])?;
        let response = self.send(self.http.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, AgentClientError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!("agent service {} -> {}", response.url(), status);

        if !status.is_success() {
            warn!("agent service call to {} failed with {}", response.url(), status);
            return Err(AgentClientError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response)
    }

    /// Appends percent-encoded path segments to the base address.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AgentClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AgentClientError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Incremental UTF-8 decoding for streamed chunks. A code point split across
/// chunk boundaries is held back until its remaining bytes arrive; invalid
/// sequences become U+FFFD.
#[derive(Debug, Default)]
pub struct TextDecoder {
    pending: Vec<u8>,
}

impl TextDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);
        let mut out = String::new();

        loop {
            let (valid, invalid) = match std::str::from_utf8(&self.pending) {
                Ok(_) => (self.pending.len(), None),
                Err(err) => (err.valid_up_to(), Some(err.error_len())),
            };
            out.push_str(&String::from_utf8_lossy(&self.pending[..valid]));

            match invalid {
                None => {
                    self.pending.clear();
                    break;
                }
                Some(Some(len)) => {
                    out.push(char::REPLACEMENT_CHARACTER);
                    self.pending.drain(..valid + len);
                }
                Some(None) => {
                    self.pending.drain(..valid);
                    break;
                }
            }
        }

        out
    }

    /// Flushes whatever is left, replacing an incomplete tail.
    pub fn finish(&mut self) -> String {
        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        rest
    }
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn client_for(server: &MockServer) -> AgentClient {
        AgentClient::with_base_url(&server.base_url()).expect("mock server URL is valid")
    }

    #[tokio::test]
    async fn list_agents_returns_payload_unchanged() {
        let server = MockServer::start_async().await;
        let payload = json!([
            { "id": "writer", "name": "RédacIA", "description": "Rédaction marketing" },
            { "id": "analyst", "name": "DataPilot", "capabilities": ["sql", "charts"] },
            { "id": "scribe", "name": "Scribe", "description": null }
        ]);
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/agents");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(payload.clone());
            })
            .await;

        let agents = client_for(&server).list_agents().await.expect("agents listed");

        mock.assert_async().await;
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0].description_text(), Some("Rédaction marketing"));
        assert_eq!(agents[1].description, None);
        assert_eq!(agents[2].description, Some(None));
        assert_eq!(agents[2].description_text(), None);
        assert_eq!(serde_json::to_value(&agents).expect("serializable"), payload);
    }

    #[tokio::test]
    async fn list_agents_surfaces_status_code() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/agents");
                then.status(503).body("maintenance");
            })
            .await;

        let err = client_for(&server)
            .list_agents()
            .await
            .expect_err("503 must fail");

        assert!(matches!(err, AgentClientError::Status { status: 503, .. }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn invoke_posts_request_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/writer/invoke").json_body(json!({
                    "message": "Bonjour",
                    "thread_id": "t-1",
                    "context": { "page": "dashboard" }
                }));
                then.status(200).json_body(json!({
                    "content": "Salut !",
                    "thread_id": "t-1",
                    "run_id": "r-42"
                }));
            })
            .await;

        let request = InvokeRequest::new("Bonjour")
            .with_thread(Some("t-1".into()))
            .with_context("page", json!("dashboard"));
        let response = client_for(&server)
            .invoke("writer", &request)
            .await
            .expect("invocation succeeds");

        mock.assert_async().await;
        assert_eq!(response.content, "Salut !");
        assert_eq!(response.run_id.as_deref(), Some("r-42"));
    }

    #[tokio::test]
    async fn invoke_failure_keeps_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/ghost/invoke");
                then.status(404);
            })
            .await;

        let err = client_for(&server)
            .invoke("ghost", &InvokeRequest::new("?"))
            .await
            .expect_err("404 must fail");
        assert!(matches!(err, AgentClientError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn stream_yields_body_chunks() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/writer/stream");
                then.status(200)
                    .header("content-type", "text/plain; charset=utf-8")
                    .body("Bonjour à tous");
            })
            .await;

        let stream = client_for(&server)
            .stream("writer", &InvokeRequest::new("Salut"))
            .await
            .expect("stream opens");
        let mut stream = Box::pin(stream);

        let mut decoder = TextDecoder::new();
        let mut text = String::new();
        while let Some(chunk) = stream.next().await {
            text.push_str(&decoder.push(&chunk.expect("chunk")));
        }
        text.push_str(&decoder.finish());

        assert_eq!(text, "Bonjour à tous");
    }

    #[tokio::test]
    async fn stream_without_body_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/writer/stream");
                then.status(204);
            })
            .await;

        let result = client_for(&server)
            .stream("writer", &InvokeRequest::new("Salut"))
            .await;

        match result {
            Err(AgentClientError::MissingBody { status }) => assert_eq!(status, 204),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("a bodiless stream must fail"),
        }
    }

    #[tokio::test]
    async fn stream_failure_keeps_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/writer/stream");
                then.status(500).body("boom");
            })
            .await;

        let result = client_for(&server)
            .stream("writer", &InvokeRequest::new("Salut"))
            .await;

        match result {
            Err(err) => assert!(matches!(err, AgentClientError::Status { status: 500, .. })),
            Ok(_) => panic!("a 500 stream must fail"),
        }
    }

    #[tokio::test]
    async fn health_failure_keeps_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(500);
            })
            .await;

        let err = client_for(&server)
            .health()
            .await
            .expect_err("500 must fail");
        assert!(matches!(err, AgentClientError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn health_returns_arbitrary_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(200)
                    .json_body(json!({ "status": "ok", "agents": 3 }));
            })
            .await;

        let health = client_for(&server).health().await.expect("healthy");
        assert_eq!(health["agents"], 3);
    }

    #[test]
    fn endpoints_keep_base_path_and_encode_ids() {
        let client = AgentClient::with_base_url("http://localhost:8000/api").expect("valid");
        let url = client.endpoint(&["my agent", "invoke"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8000/api/my%20agent/invoke");

        let client = AgentClient::with_base_url("http://localhost:8000").expect("valid");
        let url = client.endpoint(&["health"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:8000/health");
    }

    #[test]
    fn decoder_holds_split_code_points() {
        let bytes = "é".as_bytes();
        let mut decoder = TextDecoder::new();
        assert_eq!(decoder.push(&bytes[..1]), "");
        assert_eq!(decoder.push(&bytes[1..]), "é");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn decoder_replaces_invalid_bytes() {
        let mut decoder = TextDecoder::new();
        assert_eq!(decoder.push(b"ok\xFFgo"), "ok\u{FFFD}go");
        assert_eq!(decoder.push(&[0xE2, 0x82]), "");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }
}
