use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
    future::Future,
    time::Duration,
};

use chrono::NaiveDate;
use encoding_rs::WINDOWS_1252;
use reqwest::{Client, StatusCode};
use tracing::{instrument, Level};
use url::Url;

/// Transport failure for a single upstream page.
#[derive(Debug)]
pub enum FetchError {
    Request { url: Url, source: reqwest::Error },
    Status { url: Url, status: StatusCode },
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request { url, source } => write!(f, "request to {url} failed: {source}"),
            Self::Status { url, status } => write!(f, "{url} answered with status {status}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

/// Something that can hand back the raw bytes behind a menu page url.
pub trait PageFetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url), level = Level::TRACE)]
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.clone(),
            source,
        };
        let start = std::time::Instant::now();
        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?;
        let res = res.error_for_status().map_err(|e| match e.status() {
            Some(status) => FetchError::Status {
                url: url.clone(),
                status,
            },
            None => request_error(e),
        })?;
        let bytes = res.bytes().await.map_err(request_error)?;
        log::trace!("Got {} bytes of menu page in \t {:?}", bytes.len(), start.elapsed());
        Ok(bytes.to_vec())
    }
}

pub fn make_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).timeout(timeout).build()
}

/// Upstream page address for one date: `<base>?d=YYYY-MM-DD`.
pub fn menu_url(base: &Url, date: NaiveDate) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("d", date.format("%Y-%m-%d").to_string().as_str());
    url
}

/// The upstream always serves Windows-1252, whatever the headers or a BOM say.
pub fn decode_page(bytes: &[u8]) -> Cow<'_, str> {
    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    if had_errors {
        log::debug!("menu page contained bytes outside of windows-1252, replaced");
    }
    text
}
