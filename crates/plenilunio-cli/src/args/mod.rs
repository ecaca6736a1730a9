mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "plenilunio")]
#[command(about = "Biosemiotic Amazonian calendar: eight seasons with live climate", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to $PLENILUNIO_CONFIG)")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Season catalog: 'bundled', a file path or an http(s) URL")]
    pub catalog: Option<String>,

    #[arg(long, global = true, value_name = "URL", help = "Base URL of the climate service")]
    pub api_base_url: Option<String>,

    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Disable colored text output")]
    pub no_color: bool,

    #[arg(long, global = true, value_name = "MS", help = "Length of the startup intro in milliseconds")]
    pub intro_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
