//! HTTP session for the source site.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Response};
use url::Url;

use crate::config::SiteConfig;
use crate::error::{Error, Result};

/// One cookie-carrying session against the site's base origin.
pub struct SiteClient {
    client: Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl SiteClient {
    /// Create a new client for the configured site.
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let base_url = Url::parse(&site.base_url)?;
        let jar = Arc::new(Jar::default());

        let mut builder = Client::builder()
            .user_agent(&site.user_agent)
            .cookie_provider(Arc::clone(&jar));

        if let Some(secs) = site.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            jar,
            base_url,
        })
    }

    /// The base URL all paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path or relative link against the base URL.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Whether the session holds any cookie for the base URL.
    pub fn has_cookies(&self) -> bool {
        self.jar.cookies(&self.base_url).is_some()
    }

    /// GET a page and return its body. Anything but 200 is an error.
    pub async fn get_page(&self, url: &Url) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let response = check_status(response)?;

        Ok(response.text().await?)
    }

    /// POST a urlencoded form and return the raw response.
    pub async fn post_form(&self, url: &Url, form: &[(String, String)]) -> Result<Response> {
        tracing::debug!("POST {}", url);

        let response = self.client.post(url.clone()).form(form).send().await?;
        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }
}

/// Require an HTTP 200 response.
pub fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::HttpStatus {
            url: response.url().to_string(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths_and_links() {
        let client = SiteClient::new(&SiteConfig::default()).unwrap();

        assert_eq!(
            client.url("/?q=admin/content/types").unwrap().as_str(),
            "http://localhost/?q=admin/content/types"
        );
        assert_eq!(
            client.url("node/42").unwrap().as_str(),
            "http://localhost/node/42"
        );
    }

    #[test]
    fn test_new_session_has_no_cookies() {
        let client = SiteClient::new(&SiteConfig::default()).unwrap();
        assert!(!client.has_cookies());
    }

    #[test]
    fn test_invalid_base_url() {
        let site = SiteConfig {
            base_url: "not a url".into(),
            ..SiteConfig::default()
        };
        assert!(matches!(SiteClient::new(&site), Err(Error::UrlParse(_))));
    }
}
