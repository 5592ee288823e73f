mod types;

use std::future::Future;

use log::debug;
use serde::de::DeserializeOwned;
pub use types::*;

use crate::error::{Error, Result};

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("repo-widget/", env!("CARGO_PKG_VERSION"));

/// A GET request against the REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP seam between the fetcher and the network.
///
/// Implementations make a single attempt and return transport failures as
/// [`Error::Http`]; a non-2xx status is still an `Ok` response.
pub trait Transport: Send + Sync {
    fn get(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// [`Transport`] backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

/// REST client: a transport plus the API base URL
#[derive(Debug, Clone)]
pub struct GithubClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl GithubClient<ReqwestTransport> {
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::default())
    }
}

impl Default for GithubClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> GithubClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the client at another host, e.g. a GitHub Enterprise API root
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, path: &str, token: Option<&str>) -> ApiRequest {
        let mut headers = vec![
            ("Accept", ACCEPT.to_string()),
            ("X-GitHub-Api-Version", API_VERSION.to_string()),
            ("User-Agent", USER_AGENT.to_string()),
        ];
        if let Some(token) = token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        ApiRequest {
            url: format!("{}{}", self.base_url, path),
            headers,
        }
    }

    /// GET `path` and decode a 2xx body; any other status is an error
    async fn get_json<R: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<R> {
        let request = self.request(path, token);
        let url = request.url.clone();
        let response = self.transport.get(request).await?;
        if !response.is_success() {
            return Err(Error::Http(format!("{} returned status {}", url, response.status)));
        }
        response.json()
    }
}

/// Fetch everything the widget shows for `owner/repo`.
///
/// The repository record is required: a non-2xx status fails the whole
/// fetch with [`Error::RepositoryNotFound`]. The language breakdown and the
/// traffic summary degrade to their empty forms on any failure. Traffic is
/// only requested when `token` is given.
pub async fn fetch_repository_data<T: Transport>(
    client: &GithubClient<T>,
    owner: &str,
    repo: &str,
    token: Option<&str>,
) -> Result<FetchResult> {
    debug!("Fetching repository {}/{}", owner, repo);
    let base_path = format!("/repos/{}/{}", owner, repo);

    let response = client
        .transport
        .get(client.request(&base_path, token))
        .await?;
    if !response.is_success() {
        debug!(
            "Repository {}/{} request failed with status {}",
            owner, repo, response.status
        );
        return Err(Error::RepositoryNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });
    }
    let repository: RepositoryRecord = response.json()?;

    let languages = fetch_languages(client, &base_path, token).await;
    if languages.is_degraded() {
        debug!("Language breakdown for {}/{} degraded to empty", owner, repo);
    }

    let traffic = match token {
        Some(token) => fetch_traffic(client, &base_path, token).await,
        None => SubFetch::Ok(None),
    };
    if traffic.is_degraded() {
        debug!("Traffic summary for {}/{} unavailable", owner, repo);
    }

    Ok(FetchResult {
        repository,
        languages: languages.into_inner(),
        traffic: traffic.into_inner(),
    })
}

async fn fetch_languages<T: Transport>(
    client: &GithubClient<T>,
    base_path: &str,
    token: Option<&str>,
) -> SubFetch<LanguageBreakdown> {
    let path = format!("{}/languages", base_path);
    match client.get_json::<LanguageBreakdown>(&path, token).await {
        Ok(languages) => {
            debug!("Fetched {} languages", languages.len());
            SubFetch::Ok(languages)
        }
        Err(e) => {
            debug!("Language request failed: {}", e);
            SubFetch::Degraded(LanguageBreakdown::default())
        }
    }
}

/// Views and clones are requested together; both must succeed
async fn fetch_traffic<T: Transport>(
    client: &GithubClient<T>,
    base_path: &str,
    token: &str,
) -> SubFetch<Option<TrafficSummary>> {
    let views_path = format!("{}/traffic/views", base_path);
    let clones_path = format!("{}/traffic/clones", base_path);

    let (views, clones) = futures::join!(
        client.get_json::<TrafficCounts>(&views_path, Some(token)),
        client.get_json::<TrafficCounts>(&clones_path, Some(token)),
    );

    match (views, clones) {
        (Ok(views), Ok(clones)) => SubFetch::Ok(Some(TrafficSummary::from_counts(views, clones))),
        (views, clones) => {
            for e in [views.err(), clones.err()].into_iter().flatten() {
                debug!("Traffic request failed: {}", e);
            }
            SubFetch::Degraded(None)
        }
    }
}
