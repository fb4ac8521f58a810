//! End-to-end tests for the geostack location client.
//!
//! The client runs against [`FakeTransport`], an in-memory transport that
//! records every request it receives and answers with canned responses in
//! order. No network access is needed.

use std::collections::VecDeque;
use std::sync::{Arc, Once};

use bytes::Bytes;
use geostack_core::{AwsRegion, ClientConfig};
use geostack_location_http::{
    HttpTransport, LocationBody, LocationClient, TransportError, TransportFuture,
};
use parking_lot::Mutex;

static INIT: Once = Once::new();

/// Initialize tracing (once), at the level configured through `LOG_LEVEL`.
fn init_tracing() {
    INIT.call_once(|| {
        let config = ClientConfig::from_env();
        geostack_core::init_test_tracing(&config.log_level)
            .expect("tracing initializes once per test binary");
    });
}

/// A request as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: http::Method,
    /// Full request URI.
    pub uri: http::Uri,
    /// Request headers.
    pub headers: http::HeaderMap,
    /// Buffered body.
    pub body: Bytes,
}

impl RecordedRequest {
    /// The body parsed as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// In-memory transport replaying canned responses.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<http::Response<Bytes>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeTransport {
    /// Queue a response with the given status, headers, and body.
    pub fn respond(&self, status: u16, headers: &[(&str, &str)], body: impl Into<Bytes>) {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let response = builder
            .body(body.into())
            .expect("canned response is valid");
        self.responses.lock().push_back(response);
    }

    /// Queue a 200 response carrying a JSON document.
    pub fn respond_json(&self, body: serde_json::Value) {
        self.respond(
            200,
            &[("content-type", "application/json")],
            body.to_string(),
        );
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request.
    #[must_use]
    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("at least one request was sent")
    }
}

impl HttpTransport for FakeTransport {
    fn send(&self, request: http::Request<LocationBody>) -> TransportFuture {
        let this = self.clone();
        Box::pin(async move {
            let (parts, body) = request.into_parts();
            let body = body.into_bytes().await;
            this.requests.lock().push(RecordedRequest {
                method: parts.method,
                uri: parts.uri,
                headers: parts.headers,
                body,
            });
            let response = this
                .responses
                .lock()
                .pop_front()
                .unwrap_or_else(|| http::Response::new(Bytes::from_static(b"{}")));
            Ok::<_, TransportError>(response)
        })
    }
}

/// A client over a fresh fake transport, for region `us-west-2`.
#[must_use]
pub fn location_client() -> (LocationClient<FakeTransport>, FakeTransport) {
    init_tracing();

    let transport = FakeTransport::default();
    let config = ClientConfig::builder()
        .region(AwsRegion::new("us-west-2"))
        .build();
    (LocationClient::new(config, transport.clone()), transport)
}

#[cfg(test)]
mod test_batch;
#[cfg(test)]
mod test_encoding;
#[cfg(test)]
mod test_errors;
#[cfg(test)]
mod test_maps;
#[cfg(test)]
mod test_pagination;
