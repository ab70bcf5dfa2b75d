use crate::error::TransportError;
use futures::future::{BoxFuture, FutureExt};
use log::trace;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;

/// Anything able to POST a JSON value and hand back the parsed JSON reply.
///
/// The future is boxed so the capability can be shared as `Arc<dyn JsonHttpClient>`.
/// Implementations own connection handling, TLS, timeouts and wire serialization.
pub trait JsonHttpClient: Send + Sync {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a HashMap<String, String>,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<Value, TransportError>>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn send(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: &Value,
    ) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(url)
            .headers(header_map(headers)?)
            .json(body)
            .send()
            .await?;

        trace!("POST {} {:?}", url, response.status());

        let status = response.status();
        if !status.is_success() {
            let err_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: err_text,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(TransportError::Decode)
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonHttpClient for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a HashMap<String, String>,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<Value, TransportError>> {
        self.send(url, headers, body).boxed()
    }
}

fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(name.clone()))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::InvalidHeader(name.to_string()))?;
        if name == header::AUTHORIZATION {
            value.set_sensitive(true);
        }
        map.insert(name, value);
    }
    Ok(map)
}
