use crate::{Error, Result};
use plenilunio_types::SeasonCatalog;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// The eight-season catalog shipped with the binary.
pub const BUNDLED_CATALOG: &[u8] = include_bytes!("../data/seasons.json");

/// Where the static season catalog is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Bundled,
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a user-supplied location: `http(s)://` is a URL, the
    /// literal `bundled` is the built-in catalog, anything else a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Url(location.to_string())
        } else if location == "bundled" {
            CatalogSource::Bundled
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Loads the season catalog. Invoked once at startup; there is no retry,
/// any failure is returned to the caller as-is.
pub struct CatalogLoader {
    source: CatalogSource,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub async fn load(&self) -> Result<SeasonCatalog> {
        debug!(source = %self.source, "loading season catalog");

        let bytes = match &self.source {
            CatalogSource::Bundled => BUNDLED_CATALOG.to_vec(),
            CatalogSource::File(path) => tokio::fs::read(path).await?,
            CatalogSource::Url(url) => {
                let client = reqwest::Client::builder()
                    .user_agent(concat!("plenilunio/", env!("CARGO_PKG_VERSION")))
                    .build()?;
                let response = client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(Error::Status(status.as_u16()));
                }
                response.bytes().await?.to_vec()
            }
        };

        let catalog = SeasonCatalog::from_json_slice(&bytes)?;
        info!(seasons = catalog.len(), "season catalog loaded");
        Ok(catalog)
    }
}
