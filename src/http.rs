//! Blocking HTTP transport used to deliver webhook payloads.

use crate::error::TransportError;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::time::Duration;

/// A fully read HTTP response. The underlying connection has already been
/// released by the time one of these exists.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

pub trait HttpClient {
    /// POSTs `body` as `application/json` to `url`.
    ///
    /// `timeout` bounds the whole exchange: connecting, sending the request and
    /// reading the response body. Once it elapses the request is abandoned and
    /// [`TransportError::Timeout`] is returned.
    fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError>;
}

pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> reqwest::Result<Self> {
        let inner = reqwest::blocking::Client::builder().build()?;

        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    fn post_json(
        &self,
        url: &str,
        body: Vec<u8>,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .timeout(timeout)
            .send()
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();

        // Consumes the response, so the connection is released on every path.
        let body = response.text().map_err(|e| transport_error(e, timeout))?;

        Ok(HttpResponse { status, body })
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(timeout)
    } else {
        TransportError::Connection(Box::new(e))
    }
}
