use crate::presentation::presenters::present_season_list;
use crate::presentation::views::{SeasonListView, SeasonNavView};
use crate::types::OutputFormat;
use anyhow::Result;
use plenilunio_providers::CatalogLoader;
use plenilunio_runtime::Config;

pub async fn handle(config: &Config, format: OutputFormat) -> Result<()> {
    let catalog = CatalogLoader::new(config.catalog_source()).load().await?;
    let vm = present_season_list(&catalog);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vm)?),
        OutputFormat::Html => print!("{}", SeasonNavView::new(&vm)),
        OutputFormat::Text => print!("{}", SeasonListView::new(&vm)),
    }

    Ok(())
}
