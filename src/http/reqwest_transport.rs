//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::error::TransportError;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Production transport over `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a transport with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!("{} {}", request.method.as_str(), request.url);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.timeout(self.timeout).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        // Error pages are often not JSON; keep the status and drop the body
        let data = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(_) if !(200..300).contains(&status) => Value::Null,
                Err(e) => {
                    return Err(TransportError(format!(
                        "invalid JSON body: {}: {}",
                        e, text
                    )))
                }
            }
        };

        tracing::debug!("{} {} -> {}", request.method.as_str(), request.url, status);
        Ok(HttpResponse { status, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let transport = ReqwestTransport::new();
        assert_eq!(transport.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_custom_timeout() {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(5));
        assert_eq!(transport.timeout(), Duration::from_secs(5));
    }
}
