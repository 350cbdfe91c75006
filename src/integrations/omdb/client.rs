// src/integrations/omdb/client.rs
//
// OMDb API Integration
//
// ARCHITECTURE:
// - Plain HTTP GET client for the OMDb REST endpoint
// - Maps wire payloads -> domain records, never the other way round
// - Used by SearchController through the MovieApi port
//
// RULES:
// - One request per call: no retry, no cache, no rate limiting
// - Timeouts are whatever reqwest defaults to
// - Every failure is logged before it is returned

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    split_genres, validate_detail, validate_identifier, validate_search_request,
    validate_summary, MovieDetail, Poster, SearchResultPage, SearchResultSummary,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::OmdbConfig;
use crate::services::MovieApi;

const USER_AGENT: &str = concat!("movie-explorer/", env!("CARGO_PKG_VERSION"));

const SEARCH_FALLBACK_ERROR: &str = "No movies found";
const DETAIL_FALLBACK_ERROR: &str = "Movie details not found";

/// Search response body (`Response: "True"`)
#[derive(Debug, Deserialize)]
struct SearchData {
    #[serde(rename = "Search", default)]
    search: Vec<SummaryData>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryData {
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

/// Detail response body (`Response: "True"`)
#[derive(Debug, Deserialize)]
struct DetailData {
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Rated", default)]
    rated: String,
    #[serde(rename = "Runtime", default)]
    runtime: String,
    #[serde(rename = "Genre", default)]
    genre: String,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: String,
    #[serde(rename = "Plot", default)]
    plot: String,
    #[serde(rename = "Director", default)]
    director: String,
    #[serde(rename = "Writer", default)]
    writer: String,
    #[serde(rename = "Actors", default)]
    actors: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

/// OMDb API Client
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl OmdbClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(config: &OmdbConfig) -> AppResult<Self> {
        config.validate()?;
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a client on top of an existing reqwest client
    pub fn with_http_client(config: &OmdbConfig, http_client: Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            http_client,
        }
    }

    /// Search movies by title
    ///
    /// Returns one page (10 entries at most, per the service) and the total match count
    pub async fn search_movies(&self, query: &str, page: u32) -> AppResult<SearchResultPage> {
        let result = self.try_search_movies(query, page).await;
        if let Err(e) = &result {
            log::error!("Error searching movies for {:?}: {}", query, e);
        }
        result
    }

    /// Get the full record of a movie by its IMDb id
    pub async fn get_movie_details(&self, identifier: &str) -> AppResult<MovieDetail> {
        let result = self.try_get_movie_details(identifier).await;
        if let Err(e) = &result {
            log::error!("Error fetching movie details for {}: {}", identifier, e);
        }
        result
    }

    async fn try_search_movies(&self, query: &str, page: u32) -> AppResult<SearchResultPage> {
        validate_search_request(query, page)?;

        let page = page.to_string();
        let payload = self
            .execute_query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("page", page.as_str()),
                ("type", "movie"),
            ])
            .await?;

        let data: SearchData = decode_payload(payload, SEARCH_FALLBACK_ERROR)?;
        Self::map_search_page(data)
    }

    async fn try_get_movie_details(&self, identifier: &str) -> AppResult<MovieDetail> {
        validate_identifier(identifier)?;

        let payload = self
            .execute_query(&[
                ("apikey", self.api_key.as_str()),
                ("i", identifier),
                ("plot", "full"),
            ])
            .await?;

        let data: DetailData = decode_payload(payload, DETAIL_FALLBACK_ERROR)?;
        let detail = Self::map_detail(data);
        validate_detail(&detail)?;
        Ok(detail)
    }

    // ========================================================================
    // INTERNAL: HTTP Execution
    // ========================================================================

    /// Send a GET with the given query parameters and parse the JSON body
    async fn execute_query(&self, params: &[(&str, &str)]) -> AppResult<Value> {
        log::debug!("GET {} ({} params)", self.base_url, params.len());

        let response = self
            .http_client
            .get(&self.base_url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport {
                status_code: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    fn map_search_page(data: SearchData) -> AppResult<SearchResultPage> {
        let results: Vec<SearchResultSummary> = data
            .search
            .into_iter()
            .map(Self::map_summary)
            .filter(|summary| match validate_summary(summary) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("Dropping search result {:?}: {}", summary.title, e);
                    false
                }
            })
            .collect();

        let total_results = match data.total_results {
            Some(raw) => raw.trim().parse::<u64>()?,
            None => results.len() as u64,
        };

        Ok(SearchResultPage {
            results,
            total_results,
        })
    }

    fn map_summary(data: SummaryData) -> SearchResultSummary {
        SearchResultSummary {
            identifier: data.imdb_id,
            title: data.title,
            year: data.year,
            poster: Poster::from(data.poster),
        }
    }

    fn map_detail(data: DetailData) -> MovieDetail {
        MovieDetail {
            identifier: data.imdb_id,
            title: data.title,
            year: data.year,
            rated: data.rated,
            runtime: data.runtime,
            genres: split_genres(&data.genre),
            imdb_rating: data.imdb_rating,
            plot: data.plot,
            director: data.director,
            writer: data.writer,
            actors: data.actors,
            poster: Poster::from(data.poster),
        }
    }
}

/// Turn a parsed body into `T`, honouring the service's logical-failure flag
fn decode_payload<T>(payload: Value, fallback_error: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    if payload.get("Response").and_then(Value::as_str) == Some("False") {
        let message = payload
            .get("Error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback_error);
        return Err(AppError::api(message));
    }

    Ok(serde_json::from_value(payload)?)
}

#[async_trait]
impl MovieApi for OmdbClient {
    async fn search(&self, query: &str, page: u32) -> AppResult<SearchResultPage> {
        self.search_movies(query, page).await
    }

    async fn fetch_by_id(&self, identifier: &str) -> AppResult<MovieDetail> {
        self.get_movie_details(identifier).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PLACEHOLDER_POSTER_URL;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one canned HTTP response on loopback.
    /// The handle yields the request line the client sent.
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{}/", addr), handle)
    }

    fn client_for(base_url: String) -> OmdbClient {
        let config = OmdbConfig {
            api_key: "test-key".to_string(),
            base_url,
        };
        let http_client = Client::builder().no_proxy().build().unwrap();
        OmdbClient::with_http_client(&config, http_client)
    }

    #[test]
    fn test_client_creation() {
        let client = OmdbClient::new(&OmdbConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://www.omdbapi.com/");
        assert_eq!(client.api_key, crate::infrastructure::DEFAULT_API_KEY);
    }

    #[test]
    fn test_client_rejects_blank_key() {
        let config = OmdbConfig::default().with_overrides(Some(String::new()), None);
        assert!(matches!(OmdbClient::new(&config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_decode_payload_reports_service_error() {
        let payload = json!({ "Response": "False", "Error": "Movie not found!" });
        let result: AppResult<SearchData> = decode_payload(payload, SEARCH_FALLBACK_ERROR);
        match result {
            Err(AppError::Api { message }) => assert_eq!(message, "Movie not found!"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_payload_falls_back_to_generic_message() {
        let payload = json!({ "Response": "False" });
        let result: AppResult<DetailData> = decode_payload(payload, DETAIL_FALLBACK_ERROR);
        match result {
            Err(AppError::Api { message }) => assert_eq!(message, "Movie details not found"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_total_is_a_payload_error() {
        let data = SearchData {
            search: Vec::new(),
            total_results: Some("lots".to_string()),
        };
        assert!(matches!(
            OmdbClient::map_search_page(data),
            Err(AppError::Payload(_))
        ));
    }

    #[tokio::test]
    async fn test_search_sends_encoded_query_and_parses_page() {
        let body = json!({
            "Search": [
                { "Title": "Fast & Furious", "Year": "2009", "imdbID": "tt1013752", "Type": "movie",
                  "Poster": "https://m.media-amazon.com/images/M/ff.jpg" },
                { "Title": "Fast & Furious 6", "Year": "2013", "imdbID": "tt1905041", "Type": "movie",
                  "Poster": "N/A" },
                { "Title": "Broken", "Year": "2013", "imdbID": "", "Type": "movie", "Poster": "N/A" }
            ],
            "totalResults": "42",
            "Response": "True"
        })
        .to_string();
        let (base_url, server) = serve_once("200 OK", body).await;

        let page = client_for(base_url)
            .search_movies("Fast & Furious", 1)
            .await
            .unwrap();

        assert_eq!(page.total_results, 42);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].identifier, "tt1013752");
        assert_eq!(page.results[1].poster, Poster::Missing);

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /?"));
        assert!(request_line.contains("apikey=test-key"));
        assert!(request_line.contains("s=Fast+%26+Furious"));
        assert!(request_line.contains("page=1"));
        assert!(request_line.contains("type=movie"));
    }

    #[tokio::test]
    async fn test_search_not_found_is_api_error() {
        let body = json!({ "Response": "False", "Error": "Movie not found!" }).to_string();
        let (base_url, _server) = serve_once("200 OK", body).await;

        let err = client_for(base_url)
            .search_movies("zzzzqqq", 1)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Api { .. }));
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[tokio::test]
    async fn test_server_error_is_transport_error() {
        let (base_url, _server) =
            serve_once("500 Internal Server Error", "oops".to_string()).await;

        let err = client_for(base_url)
            .search_movies("Alien", 1)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Transport { status_code: 500 }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_http_error() {
        let (base_url, _server) =
            serve_once("200 OK", "<html>maintenance</html>".to_string()).await;

        let err = client_for(base_url)
            .get_movie_details("tt0078748")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Http(_)));
    }

    #[tokio::test]
    async fn test_details_request_full_plot() {
        let body = json!({
            "Title": "Alien", "Year": "1979", "Rated": "R", "Runtime": "117 min",
            "Genre": "Horror, Sci-Fi", "Director": "Ridley Scott",
            "Writer": "Dan O'Bannon, Ronald Shusett", "Actors": "Sigourney Weaver, Tom Skerritt",
            "Plot": "The crew of a commercial spacecraft encounters a deadly lifeform.",
            "Poster": "N/A", "imdbRating": "8.5", "imdbID": "tt0078748", "Response": "True"
        })
        .to_string();
        let (base_url, server) = serve_once("200 OK", body).await;

        let detail = client_for(base_url)
            .get_movie_details("tt0078748")
            .await
            .unwrap();

        assert_eq!(detail.identifier, "tt0078748");
        assert_eq!(detail.genres, vec!["Horror", "Sci-Fi"]);
        assert_eq!(detail.imdb_rating, "8.5");
        assert_eq!(detail.poster.display_url(), PLACEHOLDER_POSTER_URL);

        let request_line = server.await.unwrap();
        assert!(request_line.contains("i=tt0078748"));
        assert!(request_line.contains("plot=full"));
    }

    #[tokio::test]
    async fn test_blank_query_never_hits_network() {
        let client = client_for("http://127.0.0.1:9/".to_string());
        let err = client.search("   ", 1).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }
}
