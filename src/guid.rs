//! Identifier generation for new rows.
//!
//! Ids come from the GUID allocation service when it answers with `{"status": "OK", "data": <guid>}`;
//! any other outcome falls back to a locally generated UUIDv4. Generation never fails.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Default address of the GUID allocation service.
pub const DEFAULT_GUID_SERVICE_URL: &str = "http://tmt-guid.byu.edu/guid";

/// Source of globally unique ids. Injected into every store so tests can substitute a fixed id.
#[async_trait]
pub trait IdGenerator: Send + Sync {
    async fn new_id(&self) -> String;
}

/// Random UUIDv4 in hyphenated text form.
pub fn new_v4_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Why the allocation service could not supply an id. Only logged; callers get a local id instead.
#[derive(Error, Debug)]
enum GuidError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("reading body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("parsing body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("status {0:?}")]
    Status(String),
    #[error("empty guid")]
    Empty,
}

#[derive(Deserialize)]
struct GuidResponse {
    #[serde(alias = "Status")]
    status: String,
    #[serde(alias = "Data", default)]
    data: String,
}

/// Asks the allocation service for each id; one GET per call, no retries, transport-default timeouts.
#[derive(Clone)]
pub struct RemoteIdGenerator {
    client: reqwest::Client,
    url: String,
}

impl RemoteIdGenerator {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        RemoteIdGenerator {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, GuidError> {
        let res = self.client.get(&self.url).send().await.map_err(GuidError::Request)?;
        let body = res.bytes().await.map_err(GuidError::Body)?;
        let parsed: GuidResponse = serde_json::from_slice(&body)?;
        if parsed.status != "OK" {
            return Err(GuidError::Status(parsed.status));
        }
        if parsed.data.is_empty() {
            return Err(GuidError::Empty);
        }
        Ok(parsed.data)
    }
}

#[async_trait]
impl IdGenerator for RemoteIdGenerator {
    async fn new_id(&self) -> String {
        match self.fetch().await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "guid service unavailable, generating locally");
                new_v4_id()
            }
        }
    }
}

/// Local UUIDv4 ids only. Used when no allocation service is configured.
#[derive(Clone, Copy, Default)]
pub struct LocalIdGenerator;

#[async_trait]
impl IdGenerator for LocalIdGenerator {
    async fn new_id(&self) -> String {
        new_v4_id()
    }
}

/// Always returns the same id.
#[derive(Clone)]
pub struct FixedIdGenerator(pub String);

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        FixedIdGenerator(id.into())
    }
}

#[async_trait]
impl IdGenerator for FixedIdGenerator {
    async fn new_id(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    /// Serve `body` with `status` at `/guid` on an ephemeral port and return its URL.
    async fn guid_server(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/guid", get(move || async move { (status, body) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/guid", addr)
    }

    fn assert_uuid(id: &str) {
        let parsed = uuid::Uuid::parse_str(id).expect("fallback id is a uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
    }

    #[tokio::test]
    async fn uses_service_guid_when_ok() {
        let url = guid_server(StatusCode::OK, r#"{"status":"OK","data":"123def"}"#).await;
        let id = RemoteIdGenerator::new(url).new_id().await;
        assert_eq!(id, "123def");
    }

    #[tokio::test]
    async fn accepts_capitalized_fields() {
        let url = guid_server(StatusCode::OK, r#"{"Status":"OK","Data":"abc-123"}"#).await;
        let id = RemoteIdGenerator::new(url).new_id().await;
        assert_eq!(id, "abc-123");
    }

    #[tokio::test]
    async fn falls_back_on_error_status() {
        let url = guid_server(StatusCode::OK, r#"{"status":"ERROR","data":"nope"}"#).await;
        let id = RemoteIdGenerator::new(url).new_id().await;
        assert_ne!(id, "nope");
        assert_uuid(&id);
    }

    #[tokio::test]
    async fn falls_back_on_lowercase_ok() {
        let url = guid_server(StatusCode::OK, r#"{"status":"ok","data":"nope"}"#).await;
        let id = RemoteIdGenerator::new(url).new_id().await;
        assert_uuid(&id);
    }

    #[tokio::test]
    async fn falls_back_on_unparseable_body() {
        let url = guid_server(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").await;
        let id = RemoteIdGenerator::new(url).new_id().await;
        assert_uuid(&id);
    }

    #[tokio::test]
    async fn falls_back_on_empty_guid() {
        let url = guid_server(StatusCode::OK, r#"{"status":"OK","data":""}"#).await;
        let id = RemoteIdGenerator::new(url).new_id().await;
        assert_uuid(&id);
    }

    #[tokio::test]
    async fn fetch_reports_why_it_failed() {
        let url = guid_server(StatusCode::OK, r#"{"status":"ERROR","data":"nope"}"#).await;
        let err = RemoteIdGenerator::new(url).fetch().await.unwrap_err();
        assert!(matches!(&err, GuidError::Status(s) if s == "ERROR"));
        assert_eq!(err.to_string(), r#"status "ERROR""#);

        let url = guid_server(StatusCode::OK, r#"{"status":"OK","data":""}"#).await;
        let err = RemoteIdGenerator::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, GuidError::Empty));

        let url = guid_server(StatusCode::OK, "not json").await;
        let err = RemoteIdGenerator::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, GuidError::Parse(_)));
    }

    #[tokio::test]
    async fn falls_back_when_unreachable() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let ids = RemoteIdGenerator::new(format!("http://{}/guid", addr));
        assert!(matches!(ids.fetch().await, Err(GuidError::Request(_))));
        assert_uuid(&ids.new_id().await);
    }

    #[tokio::test]
    async fn fallback_ids_are_distinct() {
        let a = LocalIdGenerator.new_id().await;
        let b = LocalIdGenerator.new_id().await;
        assert_ne!(a, b);
        assert_uuid(&a);
    }

    #[test]
    fn remote_generator_keeps_its_url() {
        let ids = RemoteIdGenerator::new(DEFAULT_GUID_SERVICE_URL);
        assert_eq!(ids.url(), "http://tmt-guid.byu.edu/guid");
    }

    #[tokio::test]
    async fn fixed_generator_repeats() {
        let ids = FixedIdGenerator::new("123def");
        assert_eq!(ids.new_id().await, "123def");
        assert_eq!(ids.new_id().await, "123def");
    }
}
