use crate::presentation::views::SeasonTextView;
use crate::types::OutputFormat;
use anyhow::{Result, anyhow};
use plenilunio_engine::present_season;
use plenilunio_engine::views::SeasonView;
use plenilunio_providers::{CatalogLoader, ClimateFetcher, DisabledClimateSource, HttpClimateSource};
use plenilunio_runtime::Config;
use plenilunio_types::SeasonId;
use std::sync::Arc;

pub async fn handle(
    config: &Config,
    id: &str,
    offline: bool,
    format: OutputFormat,
    enable_color: bool,
) -> Result<()> {
    let catalog = CatalogLoader::new(config.catalog_source()).load().await?;

    let season_id = SeasonId::from(id);
    let record = catalog
        .get(&season_id)
        .ok_or_else(|| anyhow!("Season '{}' not found in catalog", id))?;

    let fetcher = if offline {
        ClimateFetcher::new(Arc::new(DisabledClimateSource))
    } else {
        let source = HttpClimateSource::new(config.api_base_url.clone())?;
        ClimateFetcher::new(Arc::new(source)).with_timeout(config.climate_timeout())
    };
    let reading = fetcher.fetch_climate(&season_id).await;
    let vm = present_season(record, reading.as_ref());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Html => print!("{}", SeasonView::new(&vm)),
        OutputFormat::Text => print!("{}", SeasonTextView::new(&vm, enable_color)),
    }

    Ok(())
}
