use crate::{Error, Result};
use futures::FutureExt;
use futures::future::BoxFuture;
use plenilunio_types::{ClimateResponse, LiveClimateReading, SeasonId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Climate service used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://plenilunio-api.onrender.com";

/// Long enough for the hosted service to wake from a cold start.
pub const DEFAULT_CLIMATE_TIMEOUT: Duration = Duration::from_secs(60);

/// Something that can answer a climate lookup for a season.
///
/// Implementations report every failure as an error; turning failures into
/// "unavailable" is the job of [`ClimateFetcher`].
pub trait ClimateSource: Send + Sync {
    fn fetch<'a>(&'a self, season_id: &'a SeasonId) -> BoxFuture<'a, Result<ClimateResponse>>;
}

/// `GET {base_url}/api/v1/climate/{season_id}` against the remote service.
pub struct HttpClimateSource {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl HttpClimateSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = reqwest::Url::parse(base_url.trim())
            .map_err(|err| Error::InvalidUrl(format!("{} ({})", base_url, err)))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("plenilunio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// The season id is a single percent-encoded path segment.
    pub fn endpoint(&self, season_id: &SeasonId) -> reqwest::Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v1", "climate", season_id.as_str()]);
        }
        url
    }
}

impl ClimateSource for HttpClimateSource {
    fn fetch<'a>(&'a self, season_id: &'a SeasonId) -> BoxFuture<'a, Result<ClimateResponse>> {
        async move {
            let url = self.endpoint(season_id);
            debug!(%url, "requesting climate reading");

            let response = self.client.get(url).send().await?;
            let status = response.status();
            debug!(status = status.as_u16(), "climate service responded");
            if !status.is_success() {
                return Err(Error::Status(status.as_u16()));
            }

            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        }
        .boxed()
    }
}

/// Source for offline use: every lookup fails immediately.
pub struct DisabledClimateSource;

impl ClimateSource for DisabledClimateSource {
    fn fetch<'a>(&'a self, _season_id: &'a SeasonId) -> BoxFuture<'a, Result<ClimateResponse>> {
        futures::future::ready(Err(Error::Disabled)).boxed()
    }
}

/// Time-bounded, infallible climate lookup.
///
/// Status errors, transport errors, malformed bodies and timeouts all come
/// back as `None`. The reason is only logged.
#[derive(Clone)]
pub struct ClimateFetcher {
    source: Arc<dyn ClimateSource>,
    timeout: Duration,
}

impl ClimateFetcher {
    pub fn new(source: Arc<dyn ClimateSource>) -> Self {
        Self {
            source,
            timeout: DEFAULT_CLIMATE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn fetch_climate(&self, season_id: &SeasonId) -> Option<LiveClimateReading> {
        match tokio::time::timeout(self.timeout, self.source.fetch(season_id)).await {
            Ok(Ok(response)) => {
                info!(season = %season_id, cycle = %response.climate.cycle, "live climate reading received");
                Some(response.climate)
            }
            Ok(Err(Error::Disabled)) => {
                debug!(season = %season_id, "climate lookups disabled, using static data");
                None
            }
            Ok(Err(err)) => {
                warn!(season = %season_id, error = %err, "climate service unavailable, using static data");
                None
            }
            Err(_) => {
                warn!(
                    season = %season_id,
                    timeout_secs = self.timeout.as_secs(),
                    "climate request timed out, using static data"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PendingSource;

    impl ClimateSource for PendingSource {
        fn fetch<'a>(&'a self, _: &'a SeasonId) -> BoxFuture<'a, Result<ClimateResponse>> {
            futures::future::pending().boxed()
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let source = HttpClimateSource::new("https://api.example.org/").unwrap();
        assert_eq!(
            source.endpoint(&SeasonId::from("4")).as_str(),
            "https://api.example.org/api/v1/climate/4"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let source = HttpClimateSource::new("https://example.org/calendar").unwrap();
        assert_eq!(
            source.endpoint(&SeasonId::from("4")).as_str(),
            "https://example.org/calendar/api/v1/climate/4"
        );
    }

    #[test]
    fn test_endpoint_encodes_season_id_as_one_segment() {
        let source = HttpClimateSource::new("https://api.example.org").unwrap();
        assert_eq!(
            source.endpoint(&SeasonId::from("2/../admin?x=1")).as_str(),
            "https://api.example.org/api/v1/climate/2%2F..%2Fadmin%3Fx=1"
        );
        assert_eq!(
            source.endpoint(&SeasonId::from("aguas altas")).as_str(),
            "https://api.example.org/api/v1/climate/aguas%20altas"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            HttpClimateSource::new("not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpClimateSource::new("mailto:someone@example.org"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_disabled_source_is_unavailable() {
        let fetcher = ClimateFetcher::new(Arc::new(DisabledClimateSource));
        assert!(fetcher.fetch_climate(&SeasonId::from("1")).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_after_sixty_seconds_is_unavailable() {
        let fetcher = ClimateFetcher::new(Arc::new(PendingSource));
        let started = tokio::time::Instant::now();

        let reading = fetcher.fetch_climate(&SeasonId::from("2")).await;

        assert!(reading.is_none());
        assert!(started.elapsed() >= DEFAULT_CLIMATE_TIMEOUT);
    }
}
