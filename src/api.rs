// HTTP layer: a small blocking client for the two remote services.
// Bodies are read as text and decoded with serde_json so a transport
// failure and a malformed body surface as different error variants.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Endpoint, LookupError};

/// Header that carries the subscription key on search requests.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Request timeout for both endpoints. The underlying transport default
/// is unbounded, which is not acceptable for an unattended run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One entry of the catalog response. The API returns more fields
/// (director, release year, score); only the title is consumed here.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub title: String,
}

/// Top-level shape of an image-search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub value: Vec<ImageResult>,
}

/// A single image hit. Only the thumbnail is used as the poster URL.
#[derive(Debug, Deserialize)]
pub struct ImageResult {
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
}

/// Seam between the orchestration loop and the network, so tests can
/// drive the loop with scripted responses.
pub trait PosterApi {
    /// Retrieve the full catalog, in the order the service delivers it.
    fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, LookupError>;

    /// Resolve one title to its first thumbnail URL.
    fn search_poster(&self, title: &str) -> Result<String, LookupError>;
}

/// Blocking client holding the endpoint URLs and the search credential.
pub struct ApiClient {
    client: Client,
    catalog_url: String,
    search_url: String,
    subscription_key: String,
}

/// The query text sent to the image search for a given title.
pub fn search_query(title: &str) -> String {
    format!("{title} poster")
}

impl ApiClient {
    /// Build a client from a validated configuration.
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| LookupError::ClientInit { source })?;
        Ok(ApiClient {
            client,
            catalog_url: config.catalog_url.clone(),
            search_url: config.search_url.clone(),
            subscription_key: config.subscription_key.clone(),
        })
    }

    /// Send `request`, enforce a success status, and decode the body as `T`.
    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<T, LookupError> {
        let response = request
            .send()
            .map_err(|source| LookupError::Transport { endpoint, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { endpoint, status });
        }
        let body = response
            .text()
            .map_err(|source| LookupError::Transport { endpoint, source })?;
        serde_json::from_str(&body).map_err(|source| LookupError::Decode { endpoint, source })
    }
}

impl PosterApi for ApiClient {
    /// GET the catalog. No credential is attached to this request.
    fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, LookupError> {
        self.get_json(Endpoint::Catalog, self.client.get(&self.catalog_url))
    }

    /// GET the image search for `<title> poster` and take the first hit.
    /// URL-encoding of the query is handled by the request builder.
    fn search_poster(&self, title: &str) -> Result<String, LookupError> {
        let query = search_query(title);
        let request = self
            .client
            .get(&self.search_url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .query(&[("q", query.as_str())]);
        let response: SearchResponse = self.get_json(Endpoint::Search, request)?;
        response
            .value
            .into_iter()
            .next()
            .map(|image| image.thumbnail_url)
            .ok_or_else(|| LookupError::NoResults {
                title: title.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_items_ignore_extra_fields() {
        let body = r#"[
            {"title": "Ponyo", "director": "Hayao Miyazaki", "rt_score": "92"},
            {"title": "The Wind Rises", "release_date": "2013"}
        ]"#;
        let items: Vec<CatalogItem> = serde_json::from_str(body).unwrap();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Ponyo", "The Wind Rises"]);
    }

    #[test]
    fn catalog_item_without_title_is_a_decode_error() {
        let body = r#"[{"director": "Isao Takahata"}]"#;
        assert!(serde_json::from_str::<Vec<CatalogItem>>(body).is_err());
    }

    #[test]
    fn search_response_keeps_result_order() {
        let body = r#"{"value": [
            {"thumbnailUrl": "https://example.com/first.jpg", "width": 474},
            {"thumbnailUrl": "https://example.com/second.jpg"}
        ], "totalEstimatedMatches": 2}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.value[0].thumbnail_url,
            "https://example.com/first.jpg"
        );
    }

    #[test]
    fn search_query_appends_poster() {
        assert_eq!(search_query("Spirited Away"), "Spirited Away poster");
    }

    #[test]
    fn search_query_is_url_encoded_by_the_request_builder() {
        // Mirrors what `.query()` does when the request is built.
        let url = reqwest::Url::parse_with_params(
            crate::config::SEARCH_URL,
            &[("q", search_query("Spirited Away"))],
        )
        .unwrap();
        assert_eq!(url.query(), Some("q=Spirited+Away+poster"));
    }
}
