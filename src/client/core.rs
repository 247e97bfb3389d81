// File: src/client/core.rs
// HTTP retrieval of the two published spreadsheet exports.
use http::{Request, StatusCode, Uri};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use thiserror::Error;

type HttpsClient = Client<hyper_rustls::HttpsConnector<HttpConnector>, String>;

/// Published spreadsheet links answer with a redirect to the content host.
pub const MAX_REDIRECTS: usize = 10;

fn is_followed_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MOVED_PERMANENTLY
            | StatusCode::FOUND
            | StatusCode::SEE_OTHER
            | StatusCode::TEMPORARY_REDIRECT
            | StatusCode::PERMANENT_REDIRECT
    )
}

/// Resolves a `Location` value against the URI that produced it. Scheme and
/// authority are inherited when the location is relative.
pub fn resolve_location(base: &Uri, location: &str) -> Option<Uri> {
    let parts = location.parse::<Uri>().ok()?.into_parts();
    let mut builder = Uri::builder();

    if let Some(scheme) = parts.scheme {
        builder = builder.scheme(scheme);
    } else if let Some(s) = base.scheme() {
        builder = builder.scheme(s.clone());
    }

    if let Some(authority) = parts.authority {
        builder = builder.authority(authority);
    } else if let Some(a) = base.authority() {
        builder = builder.authority(a.clone());
    }

    builder = builder.path_and_query(parts.path_and_query.unwrap_or_else(|| {
        http::uri::PathAndQuery::from_static("/")
    }));
    builder.build().ok()
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid feed URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
    #[error("{url} did not return UTF-8 text")]
    NotText { url: String },
}

/// Where the two feeds live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSources {
    pub fixed_url: String,
    pub occasional_url: String,
}

/// Raw bodies of both feeds, fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFeeds {
    pub fixed: String,
    pub occasional: String,
}

#[derive(Clone, Debug)]
pub struct FeedClient {
    client: HttpsClient,
}

impl FeedClient {
    pub fn new() -> Self {
        let mut root_store = rustls::RootCertStore::empty();
        let result = rustls_native_certs::load_native_certs();
        for err in &result.errors {
            log::warn!("Skipping unreadable system certificate: {}", err);
        }
        root_store.add_parsable_certificates(result.certs);
        if root_store.is_empty() {
            // Plain http:// feeds still work; https ones will fail per request.
            log::warn!("No valid system certificates found");
        }
        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let https_connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(TokioExecutor::new()).build(https_connector);
        Self { client }
    }

    /// GETs `url` and returns its body as text, following up to
    /// `MAX_REDIRECTS` redirects. Any other non-2xx answer is an error.
    pub async fn fetch_text(&self, url: &str) -> Result<String, FeedError> {
        let mut uri: Uri = url.parse().map_err(|source| FeedError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let mut redirects = 0;

        let response = loop {
            let request = Request::get(uri.clone())
                .header(http::header::ACCEPT, "text/tab-separated-values, text/plain")
                .body(String::new())
                .map_err(|e| FeedError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

            log::debug!("GET {}", uri);
            let response = self
                .client
                .request(request)
                .await
                .map_err(|e| FeedError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !is_followed_redirect(status) {
                break response;
            }
            if redirects >= MAX_REDIRECTS {
                return Err(FeedError::Request {
                    url: url.to_string(),
                    message: format!("more than {} redirects", MAX_REDIRECTS),
                });
            }
            let location = response
                .headers()
                .get(http::header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| FeedError::Request {
                    url: url.to_string(),
                    message: format!("{} without a usable Location header", status),
                })?;
            let next = resolve_location(&uri, location).ok_or_else(|| FeedError::Request {
                url: url.to_string(),
                message: format!("invalid redirect target '{}'", location),
            })?;
            log::debug!("{} redirected ({}) to {}", uri, status, next);
            uri = next;
            redirects += 1;
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| FeedError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?
            .to_bytes();

        String::from_utf8(bytes.to_vec()).map_err(|_| FeedError::NotText {
            url: url.to_string(),
        })
    }

    /// Fetches both feeds in parallel. Fails as a whole if either one fails.
    pub async fn load_feeds(&self, sources: &FeedSources) -> Result<RawFeeds, FeedError> {
        let (fixed, occasional) = tokio::try_join!(
            self.fetch_text(&sources.fixed_url),
            self.fetch_text(&sources.occasional_url)
        )?;
        log::info!(
            "Fetched feeds ({} + {} bytes)",
            fixed.len(),
            occasional.len()
        );
        Ok(RawFeeds { fixed, occasional })
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}
