use crate::error::ProbeError;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

pub const ANIMETHEMES_API: &str = "https://api.animethemes.moe";

/// Query parameters for `GET /anime`.
#[derive(Debug, Clone)]
pub struct AnimeSearch {
    pub query: String,
    pub fields: String,
    pub include: String,
}

impl AnimeSearch {
    #[must_use]
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("q", self.query.as_str()),
            ("fields[anime]", self.fields.as_str()),
            ("include", self.include.as_str()),
        ]
    }
}

/// Result of a search request. Only a 200 counts as fetched.
#[derive(Debug)]
pub enum SearchResult {
    Fetched(Value),
    Rejected { status: StatusCode, body: String },
}

#[derive(Clone)]
pub struct AnimeThemesClient {
    client: Client,
    base_url: String,
}

impl Default for AnimeThemesClient {
    fn default() -> Self {
        Self::new(ANIMETHEMES_API)
    }
}

impl AnimeThemesClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("themeprobe/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    /// The `/anime` endpoint without any query string.
    pub fn anime_url(&self) -> Result<Url, ProbeError> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/anime"))?)
    }

    /// The full request URL with the search parameters form-encoded.
    pub fn search_url(&self, search: &AnimeSearch) -> Result<Url, ProbeError> {
        let mut url = self.anime_url()?;
        url.query_pairs_mut().extend_pairs(search.params());
        Ok(url)
    }

    pub async fn search(&self, search: &AnimeSearch) -> Result<SearchResult, ProbeError> {
        let url = self.search_url(search)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("AnimeThemes responded with {}", status);

        if status != StatusCode::OK {
            let body = response.text().await?;
            return Ok(SearchResult::Rejected { status, body });
        }

        let bytes = response.bytes().await?;
        let document: Value = serde_json::from_slice(&bytes)?;

        Ok(SearchResult::Fetched(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naruto() -> AnimeSearch {
        AnimeSearch {
            query: "Naruto".to_string(),
            fields: "id,name,media_format".to_string(),
            include: "images,animethemes.animethemeentries.videos.audio".to_string(),
        }
    }

    #[test]
    fn test_search_url_encoding() {
        let client = AnimeThemesClient::default();
        let url = client.search_url(&naruto()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.animethemes.moe/anime?q=Naruto\
             &fields%5Banime%5D=id%2Cname%2Cmedia_format\
             &include=images%2Canimethemes.animethemeentries.videos.audio"
        );
    }

    #[test]
    fn test_anime_url_trims_trailing_slash() {
        let client = AnimeThemesClient::new("http://127.0.0.1:9000/");
        let url = client.anime_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/anime");
    }

    #[test]
    fn test_query_with_spaces() {
        let client = AnimeThemesClient::default();
        let mut search = naruto();
        search.query = "Naruto Shippuden".to_string();

        let url = client.search_url(&search).unwrap();
        assert!(url.as_str().contains("q=Naruto+Shippuden"));
    }

    #[test]
    fn test_invalid_base_url() {
        let client = AnimeThemesClient::new("not a url");
        assert!(matches!(
            client.anime_url(),
            Err(ProbeError::InvalidUrl(_))
        ));
    }
}
