use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wxalert_core::report::model::{Report, ReportConfig, ToolInfo};
use wxalert_core::report::render;
use wxalert_core::state::AlertListState;

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let state = AlertListState::initial().sorted(args.sort);

    let batch = match wxalert_core::load(&args.payload) {
        Ok(batch) => batch,
        Err(err) => {
            // Logs the cause. No list was shown, so the state goes no further.
            state.failed(format!("{err:#}"));
            return Err(err);
        }
    };

    let mut state = state.loaded(batch.alerts);

    for id in &args.expand {
        if !state.alerts.iter().any(|a| &a.id == id) {
            tracing::warn!(id = %id, "no alert with this id; nothing to expand");
        }
        state = state.toggled(id);
    }

    let config = match args.title {
        Some(section_title) => ReportConfig { section_title },
        None => ReportConfig::default(),
    };

    let report = Report::new(tool, batch.source, state, batch.warnings, &config);

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    Ok(())
}
