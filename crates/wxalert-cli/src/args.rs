use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wxalert_core::alerts::sort::SortOrder;

#[derive(Debug, Parser)]
#[command(
    name = "wxalert",
    version,
    about = "Sortable, expandable listing of active weather alerts"
)]
pub struct Args {
    /// Path to the alerts JSON payload (`-` reads stdin)
    pub payload: PathBuf,

    /// Field to order alerts by: type, area or severity (anything else keeps payload order)
    #[arg(long, default_value = "none", value_parser = parse_sort)]
    pub sort: SortOrder,

    /// Expand the alert with this id (repeatable; each use toggles)
    #[arg(long, value_name = "ID")]
    pub expand: Vec<String>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Section heading for the alert list
    #[arg(long)]
    pub title: Option<String>,
}

fn parse_sort(key: &str) -> Result<SortOrder, Infallible> {
    key.parse()
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
