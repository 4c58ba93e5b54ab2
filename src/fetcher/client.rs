use crate::config::FetchSettings;
use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use tracing::{debug, instrument};
use url::Url;

pub const USER_AGENT: &str = "AdAuditBot/0.1 (+https://github.com/adaudit/adaudit)";
const MAX_REDIRECTS: usize = 10;

/// Outbound HTTP used by an audit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Download and decode a page. Non-2xx responses are returned, not rejected.
    async fn fetch_page(&self, url: &Url) -> Result<PageResponse, FetchError>;

    /// Issue a GET and report only the status code.
    async fn probe(&self, url: &Url) -> Result<StatusCode, FetchError>;
}

/// reqwest-backed fetcher honouring the configured deadlines and body cap.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body_bytes: u64,
}

impl HttpFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = ClientBuilder::new()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            max_body_bytes: settings.max_body_bytes,
        })
    }

    async fn send(&self, url: &Url) -> Result<Response, FetchError> {
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)
    }

    /// Stream the body, giving up as soon as it outgrows the cap.
    async fn read_body(&self, mut response: Response) -> Result<Bytes, FetchError> {
        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?
        {
            let size = (body.len() + chunk.len()) as u64;
            if size > self.max_body_bytes {
                return Err(FetchError::BodyTooLarge(size));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body.freeze())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch_page(&self, url: &Url) -> Result<PageResponse, FetchError> {
        let response = self.send(url).await?;

        // Check content length before downloading
        if let Some(content_length) = response.content_length()
            && content_length > self.max_body_bytes
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        let body = self.read_body(response).await?;
        debug!(%status, bytes = body.len(), "page downloaded");

        process_response(final_url, status, body, &content_type)
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn probe(&self, url: &Url) -> Result<StatusCode, FetchError> {
        let status = self.send(url).await?.status();
        debug!(%status, "probe answered");
        Ok(status)
    }
}
