//! Main directory client.

use crate::error::{ClientError, Result};
use crate::ids::SyntheticIds;
use crate::types::ClientConfig;
use crate::users::UsersClient;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

/// Client for a remote user directory.
///
/// # Example
///
/// ```ignore
/// use flowdesk_client::{ClientConfig, DirectoryClient};
///
/// let client = DirectoryClient::new(ClientConfig::default())?;
/// let users = client.users().list().await?;
/// println!("Found {} users", users.len());
/// ```
#[derive(Debug)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
    ids: SyntheticIds,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Transport defaults only: no request or connect timeout.
        let http = Client::builder()
            .default_headers(headers)
            .user_agent(format!("FlowDesk/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        debug!(base_url = %base_url, "Directory client ready");

        Ok(Self {
            http,
            base_url,
            ids: SyntheticIds::default(),
        })
    }

    /// Get the directory base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the users client.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.base_url, &self.ids)
    }
}
