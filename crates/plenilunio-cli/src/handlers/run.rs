use crate::input;
use crate::presentation::ConsoleSurface;
use crate::types::OutputFormat;
use anyhow::Result;
use plenilunio_runtime::{Bootstrapper, Config};
use tokio::sync::mpsc;
use tracing::debug;

pub async fn handle(config: &Config, format: OutputFormat, enable_color: bool) -> Result<()> {
    let surface =
        ConsoleSurface::stdout(format, enable_color).with_controls(config.control_ids());

    let (tx, mut rx) = mpsc::channel(32);
    let reader = input::spawn_stdin_reader(tx);

    let mut bootstrapper = Bootstrapper::from_config(config)?;
    let runtime = bootstrapper.start(surface, &mut rx).await?;
    runtime.run(&mut rx).await;

    reader.abort();
    debug!("calendar closed");
    Ok(())
}
