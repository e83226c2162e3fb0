//! Common test utilities

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use clickguard::{Response, Result, ScanConfig, Transport};
use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a ScanConfig suited to local mock servers
pub fn test_config() -> ScanConfig {
    ScanConfig::new()
        .concurrency(4)
        .timeout(Duration::from_secs(5))
}

/// Starts a mock server answering every GET with `status` and `headers`
pub async fn mock_site(status: u16, headers: &[(&'static str, &'static str)]) -> MockServer {
    let server = MockServer::start().await;

    let mut template = ResponseTemplate::new(status).insert_header("Content-Type", "text/html");
    for (name, value) in headers {
        template = template.insert_header(*name, *value);
    }

    Mock::given(method("GET"))
        .respond_with(template)
        .mount(&server)
        .await;

    server
}

/// Returns a local URL nothing is listening on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

/// Transport that counts requests in flight
///
/// Hosts starting with `bad` answer without framing headers; everything
/// else answers with `X-Frame-Options: DENY`.
pub struct CountingTransport {
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl CountingTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn get(&self, url: &Url) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let vulnerable = url
            .host_str()
            .map(|host| host.starts_with("bad"))
            .unwrap_or(false);
        let headers: &[(&str, &str)] = if vulnerable {
            &[]
        } else {
            &[("X-Frame-Options", "DENY")]
        };
        Ok(Response::from_parts(200, headers, url.clone()))
    }
}
