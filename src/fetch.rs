//! HTTP fetcher for source payloads.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;

use crate::config::{ChartConfig, USER_PLACEHOLDER};
use crate::source::SourceKind;
use crate::{Error, Result};

/// `{user}` as it appears in a parsed URL path.
const ENCODED_PLACEHOLDER: &str = "%7Buser%7D";

/// Expand a URL template for `user`.
///
/// The placeholder must be a whole path segment; the username is
/// percent-encoded so it can never add segments or a query.
pub fn source_url(template: &str, user: &str) -> Result<Url> {
    let user = user.trim();
    if user.is_empty() {
        return Err(Error::ConfigError("username must not be empty".into()));
    }

    let mut url = Url::parse(template)
        .map_err(|e| Error::ConfigError(format!("bad URL template {}: {}", template, e)))?;
    let segments: Vec<String> = url
        .path_segments()
        .map(|s| s.map(str::to_string).collect())
        .unwrap_or_default();
    if !segments.iter().any(|s| s == ENCODED_PLACEHOLDER) {
        return Err(Error::ConfigError(format!(
            "URL template {} needs {} as a path segment",
            template, USER_PLACEHOLDER
        )));
    }

    url.path_segments_mut()
        .map_err(|_| Error::ConfigError(format!("URL template {} cannot have a path", template)))?
        .clear()
        .extend(segments.iter().map(|s| {
            if s == ENCODED_PLACEHOLDER {
                user
            } else {
                s.as_str()
            }
        }));
    Ok(url)
}

fn header_map(headers: &std::collections::HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InitializationError(format!("bad header name {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::InitializationError(format!("bad header value for {}: {}", name, e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Downloads raw source payloads.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: ChartConfig,
}

impl Fetcher {
    pub fn new(config: ChartConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(header_map(&config.headers)?);
        if config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// GET one source's payload for `user`. Non-2xx responses are errors.
    pub async fn fetch(&self, kind: SourceKind, user: &str) -> Result<String> {
        let name = kind.display_name();
        let template = self
            .config
            .template(kind)
            .ok_or_else(|| Error::fetch(name, "no endpoint for this source"))?;
        let url = source_url(template, user)?;
        log::info!("fetching {} activity from {}", name, url);

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::fetch(name, format!("GET {} failed: {}", url, e)))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::fetch(name, format!("GET {} returned {}", url, status)));
        }
        resp.text()
            .await
            .map_err(|e| Error::fetch(name, format!("Failed to read response body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_placeholder_segment() {
        let url = source_url("https://gitlab.com/users/{user}/calendar.json", "octo").unwrap();
        assert_eq!(url.as_str(), "https://gitlab.com/users/octo/calendar.json");
    }

    #[test]
    fn username_is_percent_encoded() {
        let url = source_url("https://github.com/users/{user}/contributions", "a/b?c").unwrap();
        assert_eq!(url.as_str(), "https://github.com/users/a%2Fb%3Fc/contributions");
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(source_url("https://github.com/users/{user}", "  ").is_err());
        assert!(source_url("https://github.com/users?u={user}", "octo").is_err());
        assert!(source_url("not a url {user}", "octo").is_err());
    }

    #[test]
    fn client_rejects_invalid_headers() {
        let mut cfg = ChartConfig::default();
        cfg.headers.insert("bad header".into(), "x".into());
        assert!(matches!(Fetcher::new(cfg), Err(Error::InitializationError(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_fetch_error() {
        let cfg = ChartConfig {
            gitlab_url: "http://127.0.0.1:9/users/{user}/calendar.json".into(),
            ..Default::default()
        };
        let fetcher = Fetcher::new(cfg).unwrap();
        let err = fetcher.fetch(SourceKind::Gitlab, "octo").await.unwrap_err();
        assert!(matches!(err, Error::FetchError { source_name: "GitLab", .. }));
    }
}
