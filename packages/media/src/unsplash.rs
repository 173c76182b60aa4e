//! Unsplash photo search, shared by the media and background editors

use crate::error::{MediaError, MediaResult};
use formdeck_model::{Background, BackgroundKind};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, instrument};

pub const UNSPLASH_API: &str = "https://api.unsplash.com";
pub const PER_PAGE: usize = 20;
pub const DEFAULT_QUERY: &str = "nature";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub small: String,
    pub regular: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photographer {
    pub name: String,
}

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsplashImage {
    pub id: String,
    pub urls: ImageUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub user: Photographer,
}

impl UnsplashImage {
    /// URL stored in the form when the image is picked
    pub fn url(&self) -> &str {
        &self.urls.regular
    }

    pub fn thumbnail(&self) -> &str {
        &self.urls.small
    }

    /// `current` switched to this image; color and placement are kept
    pub fn as_background(&self, current: &Background) -> Background {
        Background {
            kind: BackgroundKind::Image,
            image: self.url().to_string(),
            ..current.clone()
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<UnsplashImage>,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub page: u32,
    pub images: Vec<UnsplashImage>,
    /// A full page means there may be another
    pub has_more: bool,
}

impl SearchPage {
    pub fn new(page: u32, images: Vec<UnsplashImage>) -> Self {
        let has_more = images.len() == PER_PAGE;
        Self {
            page,
            images,
            has_more,
        }
    }
}

/// Request/response image search
pub trait ImageSearch {
    fn search(&self, query: &str, page: u32) -> impl Future<Output = MediaResult<SearchPage>> + Send;
}

/// Blank queries search for the default topic
pub fn effective_query(query: &str) -> &str {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        DEFAULT_QUERY
    } else {
        trimmed
    }
}

#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl UnsplashClient {
    pub fn new(access_key: impl Into<String>) -> MediaResult<Self> {
        let access_key = access_key.into();
        if access_key.trim().is_empty() {
            return Err(MediaError::MissingAccessKey);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: UNSPLASH_API.to_string(),
            access_key,
        })
    }

    /// Client for an optional key, as read from config or the environment
    pub fn from_key(access_key: Option<&str>) -> MediaResult<Self> {
        Self::new(access_key.ok_or(MediaError::MissingAccessKey)?)
    }

    /// Point at another host (a proxy or a test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn search_url(&self, query: &str, page: u32) -> MediaResult<reqwest::Url> {
        let endpoint = format!("{}/search/photos", self.base_url.trim_end_matches('/'));
        let per_page = PER_PAGE.to_string();
        let page = page.to_string();
        reqwest::Url::parse_with_params(
            &endpoint,
            [
                ("query", effective_query(query)),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
                ("client_id", self.access_key.as_str()),
            ],
        )
        .map_err(|e| MediaError::Url(e.to_string()))
    }
}

impl ImageSearch for UnsplashClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, page: u32) -> MediaResult<SearchPage> {
        let url = self.search_url(query, page)?;
        let response: SearchResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(results = response.results.len(), "Search page received");
        Ok(SearchPage::new(page, response.results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str) -> UnsplashImage {
        UnsplashImage {
            id: id.to_string(),
            urls: ImageUrls {
                small: format!("https://img/{}/s", id),
                regular: format!("https://img/{}/r", id),
                full: format!("https://img/{}/f", id),
            },
            alt_description: None,
            user: Photographer {
                name: "Ann".to_string(),
            },
        }
    }

    #[test]
    fn test_missing_key() {
        assert!(matches!(UnsplashClient::new("  "), Err(MediaError::MissingAccessKey)));
        assert!(matches!(UnsplashClient::from_key(None), Err(MediaError::MissingAccessKey)));
    }

    #[test]
    fn test_search_url() {
        let client = UnsplashClient::new("key123").unwrap();
        let url = client.search_url("", 2).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.unsplash.com/search/photos?query=nature&per_page=20&page=2&client_id=key123"
        );

        let url = client.search_url("red cars", 1).unwrap();
        assert!(url.as_str().contains("query=red+cars"));
    }

    #[test]
    fn test_has_more_only_on_full_page() {
        let full: Vec<_> = (0..PER_PAGE).map(|i| image(&i.to_string())).collect();
        assert!(SearchPage::new(1, full).has_more);
        assert!(!SearchPage::new(1, vec![image("a")]).has_more);
    }

    #[test]
    fn test_response_shape() {
        let json = r#"{"results":[{"id":"x1","urls":{"small":"s","regular":"r","full":"f"},
            "alt_description":null,"user":{"name":"Ann"},"likes":3}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results[0].url(), "r");

        let empty: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.results.is_empty());
    }

    #[test]
    fn test_as_background_keeps_color() {
        let current = Background::color("#E2E2BF", 0.4);
        let background = image("a").as_background(&current);
        assert_eq!(background.image, "https://img/a/r");
        assert_eq!(background.color, "#E2E2BF");
        assert!(background.has_image());
    }
}
