//! Authenticated access to the Pexels api that never fails
//!
//! Every operation returns a [`Fetched`] payload. If the credential is missing, the
//! upstream can't be reached or it answers with a non-success status, a demo payload
//! of the same shape is returned instead and the error is only logged.
use crate::{config, data::*, demo, http, util};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::sync::Arc;


pub const BASE: &str = "https://api.pexels.com";

/// The locale sent with every search
pub const LOCALE: &str = "zh-CN";

pub const DEFAULT_PAGE: u32 = 1;
pub const PHOTOS_PER_PAGE: u32 = 24;
pub const VIDEOS_PER_PAGE: u32 = 12;

const CURATED: &str = "/v1/curated";
const SEARCH_PHOTOS: &str = "/v1/search";
const POPULAR_VIDEOS: &str = "/videos/popular";
const SEARCH_VIDEOS: &str = "/videos/search";

/// Where a payload came from
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The api answered
    Live(T),
    /// The api couldn't be used, this is placeholder data
    Demo(T),
}

impl<T> Fetched<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Live(t) | Self::Demo(t) => t,
        }
    }

    pub fn as_inner(&self) -> &T {
        match self {
            Self::Live(t) | Self::Demo(t) => t,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(..))
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo(..))
    }
}

/// Where the api key comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Credential {
    /// Read from this environment variable on every request
    Env(&'static str),
    Fixed(Arc<String>),
}

impl Default for Credential {
    fn default() -> Self {
        Self::Env(config::API_KEY_VAR)
    }
}

impl Credential {
    /// The api key, or an empty string if it isn't set
    pub fn resolve(&self) -> String {
        match self {
            Self::Env(key) => std::env::var(key).unwrap_or_default(),
            Self::Fixed(key) => key.to_string(),
        }
    }
}

#[derive(Serialize)]
struct Query<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    page: u32,
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
}

impl<'a> Query<'a> {
    fn listing(page: u32, per_page: u32) -> Self {
        Self {
            query: None,
            page,
            per_page,
            locale: None,
        }
    }

    fn search(query: Option<&'a str>, page: u32, per_page: u32) -> Self {
        Self {
            query,
            locale: Some(LOCALE),
            ..Self::listing(page, per_page)
        }
    }
}

#[derive(Clone, Default)]
pub struct MediaClient {
    client: reqwest::Client,
    credential: Credential,
    ep: Option<String>,
}

impl MediaClient {
    /// A client for `https://api.pexels.com`, reading the api key from the environment
    pub fn new() -> Self {
        Self {
            client: http::new_client(),
            credential: Credential::default(),
            ep: None,
        }
    }

    pub fn from_config(config: &config::Config) -> Self {
        let mut this = Self::new();
        if let Some(key) = config.api_key() {
            this = this.with_api_key(key);
        }
        if let Some(ep) = &config.api.base_url {
            this = this.with_base_url(ep);
        }
        this
    }

    /// Use this api key instead of the environment
    pub fn with_api_key(self, api_key: impl ToString) -> Self {
        Self {
            credential: Credential::Fixed(Arc::new(api_key.to_string())),
            ..self
        }
    }

    pub fn with_base_url(self, ep: impl ToString) -> Self {
        Self {
            ep: Some(ep.to_string()),
            ..self
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub async fn fetch_curated_photos(
        &self,
        page: impl Into<Option<u32>>,
        per_page: impl Into<Option<u32>>,
    ) -> Fetched<PhotoListing> {
        let (page, per_page) = paging(page, per_page, PHOTOS_PER_PAGE);
        let result = self.request(CURATED, Query::listing(page, per_page)).await;
        or_demo(
            result,
            || format!("curated photos (page {})", page),
            || demo::photos(None, page, per_page),
        )
    }

    pub async fn search_photos(
        &self,
        query: &str,
        page: impl Into<Option<u32>>,
        per_page: impl Into<Option<u32>>,
    ) -> Fetched<PhotoListing> {
        let (page, per_page) = paging(page, per_page, PHOTOS_PER_PAGE);
        let query = non_empty(query);
        let result = self
            .request(SEARCH_PHOTOS, Query::search(query, page, per_page))
            .await;
        or_demo(
            result,
            || format!("photo search '{}' (page {})", query.unwrap_or_default(), page),
            || demo::photos(query, page, per_page),
        )
    }

    pub async fn fetch_popular_videos(
        &self,
        page: impl Into<Option<u32>>,
        per_page: impl Into<Option<u32>>,
    ) -> Fetched<VideoListing> {
        let (page, per_page) = paging(page, per_page, VIDEOS_PER_PAGE);
        let result = self
            .request(POPULAR_VIDEOS, Query::listing(page, per_page))
            .await;
        or_demo(
            result,
            || format!("popular videos (page {})", page),
            || demo::videos(page, per_page),
        )
    }

    pub async fn search_videos(
        &self,
        query: &str,
        page: impl Into<Option<u32>>,
        per_page: impl Into<Option<u32>>,
    ) -> Fetched<VideoListing> {
        let (page, per_page) = paging(page, per_page, VIDEOS_PER_PAGE);
        let query = non_empty(query);
        let result = self
            .request(SEARCH_VIDEOS, Query::search(query, page, per_page))
            .await;
        or_demo(
            result,
            || format!("video search '{}' (page {})", query.unwrap_or_default(), page),
            || demo::videos(page, per_page),
        )
    }

    async fn request<T>(&self, path: &str, query: Query<'_>) -> anyhow::Result<T>
    where
        for<'de> T: Deserialize<'de>,
    {
        let api_key = self.credential.resolve();
        if api_key.is_empty() {
            match &self.credential {
                Credential::Env(key) => anyhow::bail!("no api key was set in '{}'", key),
                Credential::Fixed(..) => anyhow::bail!("the configured api key is empty"),
            }
        }

        let url = self.url(path)?;
        log::debug!(
            "GET {} (page: {}, per_page: {})",
            url,
            query.page,
            query.per_page
        );

        http::get_json(
            &self.client,
            url.as_str(),
            &query,
            &[("Authorization", api_key.as_str())],
        )
        .await
    }

    fn url(&self, path: &str) -> anyhow::Result<url::Url> {
        let base = self.ep.as_deref().unwrap_or(BASE);
        url::Url::parse(base)
            .and_then(|url| url.join(path))
            .with_context(|| format!("invalid base url '{}'", base))
    }
}

fn paging(
    page: impl Into<Option<u32>>,
    per_page: impl Into<Option<u32>>,
    default_per_page: u32,
) -> (u32, u32) {
    (
        page.into().unwrap_or(DEFAULT_PAGE),
        per_page.into().unwrap_or(default_per_page),
    )
}

fn non_empty(s: &str) -> Option<&str> {
    Some(s).filter(|s| !s.is_empty())
}

fn or_demo<T, K, D>(result: anyhow::Result<T>, kind: K, demo: D) -> Fetched<T>
where
    K: Fn() -> String,
    D: FnOnce() -> T,
{
    match result {
        Ok(ok) => Fetched::Live(ok),
        Err(err) => {
            util::inspect_err(&err, kind);
            Fetched::Demo(demo())
        }
    }
}
