//! # NetBox API client
//!
//! Fetches device records from a NetBox list endpoint, following the `next`
//! link of every page until the listing is exhausted. The whole listing is
//! collected before anything is handed to the inventory engine.

use std::time::Duration;

use anyhow::{Context, anyhow, ensure};
use async_trait::async_trait;
use nbinv_common::config::ApiConfig;
use nbinv_common::source::HostSource;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ERROR_BODY_PREVIEW: usize = 200;

type ProgressCallback = Box<dyn Fn(usize) + Send + Sync>;

/// One page of a paginated NetBox listing.
#[derive(Debug, Deserialize)]
pub struct Page {
    pub results: Vec<Value>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Page {
    pub fn parse(payload: Value) -> anyhow::Result<Self> {
        ensure!(
            payload.is_object(),
            "unexpected payload from NetBox: expected an object with 'results'"
        );
        serde_json::from_value(payload).context("unexpected payload from NetBox")
    }
}

pub struct NetboxClient {
    http: Client,
    api_url: String,
    on_progress: Option<ProgressCallback>,
}

impl NetboxClient {
    pub fn new(api: &ApiConfig) -> anyhow::Result<Self> {
        ensure!(
            !api.url.trim().is_empty(),
            "Please check API URL in script configuration file."
        );

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(default_headers(api.token.as_deref())?)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_url: api.url.clone(),
            on_progress: None,
        })
    }

    /// Called with the running host count after every page.
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    async fn get_page(&self, url: &str, name: Option<&str>) -> anyhow::Result<Page> {
        let mut request = self.http.get(url);
        if let Some(name) = name {
            request = request.query(&[("name", name)]);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "NetBox API error {}: {}",
                status,
                body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            ));
        }

        let payload: Value = response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {url}"))?;

        Page::parse(payload)
    }
}

#[async_trait]
impl HostSource for NetboxClient {
    async fn fetch_hosts(&self, name: Option<&str>) -> anyhow::Result<Vec<Value>> {
        collect_pages(
            self.api_url.clone(),
            name,
            move |url, filter| async move { self.get_page(&url, filter.as_deref()).await },
            self.on_progress.as_deref(),
        )
        .await
    }
}

/// Walks a paginated listing starting at `first_url`.
///
/// `fetch_page` is called with the page URL and the name filter; the filter
/// only goes on the first request since `next` links already carry it.
async fn collect_pages<F, Fut>(
    first_url: String,
    name: Option<&str>,
    mut fetch_page: F,
    on_progress: Option<&(dyn Fn(usize) + Send + Sync)>,
) -> anyhow::Result<Vec<Value>>
where
    F: FnMut(String, Option<String>) -> Fut,
    Fut: Future<Output = anyhow::Result<Page>>,
{
    let mut hosts: Vec<Value> = Vec::new();
    let mut next_url: Option<String> = Some(first_url);
    let mut filter: Option<String> = name.map(str::to_string);
    let mut pages: usize = 0;

    while let Some(url) = next_url.take() {
        debug!("GET {url}");
        let page: Page = fetch_page(url, filter.take()).await?;
        pages += 1;

        hosts.extend(page.results);
        next_url = page.next.filter(|next| !next.is_empty());

        if let Some(report) = on_progress {
            report(hosts.len());
        }
    }

    info!("Fetched {} host(s) in {pages} page(s)", hosts.len());
    Ok(hosts)
}

fn default_headers(token: Option<&str>) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Token {token}"))
            .context("API token contains characters not allowed in an HTTP header")?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
