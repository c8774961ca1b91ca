//! HTTP transport used by the prober.

use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use thiserror::Error;

use crate::error::CoreError;

/// Failure of a GET before any status code was read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request left the client but a cross-origin policy blocked the response
    #[error("Cross-origin rejection: {0}")]
    CrossOrigin(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub fn is_cross_origin(&self) -> bool {
        matches!(self, TransportError::CrossOrigin(_))
    }
}

/// Issues a plain GET and reports the response status code.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<u16, TransportError>;
}

/// `reqwest`-backed transport.
///
/// Redirects are not followed, so the status of `/` itself is what gets
/// classified. System proxy settings are ignored; every GET goes straight to
/// the target. The client has no timeout of its own; the prober's deadline
/// bounds every request.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, CoreError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .no_proxy()
            .build()
            .map_err(|e| CoreError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<u16, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;
        Ok(response.status().as_u16())
    }
}

/// Map a reqwest error onto the transport taxonomy.
///
/// Native stacks never enforce cross-origin policy, so the `CrossOrigin`
/// branch only triggers on runtimes that report it in the error message
/// (browser fetch under wasm).
fn classify_error(err: reqwest::Error) -> TransportError {
    classify_message(error_chain(&err), err.is_builder(), err.is_connect())
}

/// A message mentioning CORS wins over the error kind flags.
fn classify_message(message: String, is_builder: bool, is_connect: bool) -> TransportError {
    if message.contains("CORS") {
        TransportError::CrossOrigin(message)
    } else if is_builder {
        TransportError::InvalidTarget(message)
    } else if is_connect {
        TransportError::Connect(message)
    } else {
        TransportError::Other(message)
    }
}

fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cross_origin() {
        assert!(TransportError::CrossOrigin("blocked by CORS policy".into()).is_cross_origin());
        assert!(!TransportError::Connect("refused".into()).is_cross_origin());
        assert!(!TransportError::Other("reset".into()).is_cross_origin());
    }

    #[test]
    fn test_classify_message() {
        let cors = "TypeError: Failed to fetch: blocked by CORS policy".to_string();
        assert_eq!(
            classify_message(cors.clone(), false, false),
            TransportError::CrossOrigin(cors.clone())
        );
        assert!(classify_message(cors, false, true).is_cross_origin());

        assert_eq!(
            classify_message("builder error: relative URL".into(), true, false),
            TransportError::InvalidTarget("builder error: relative URL".into())
        );
        assert_eq!(
            classify_message("tcp connect error: Connection refused".into(), false, true),
            TransportError::Connect("tcp connect error: Connection refused".into())
        );
        assert_eq!(
            classify_message("connection reset".into(), false, false),
            TransportError::Other("connection reset".into())
        );
        assert!(!classify_message("cors lowercase".into(), false, false).is_cross_origin());
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_failure() {
        let transport = ReqwestTransport::new().unwrap();
        let err = transport.get("http://exa mple/").await.unwrap_err();
        assert!(!err.is_cross_origin());
    }
}
