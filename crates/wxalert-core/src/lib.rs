use std::path::Path;

use anyhow::Result;

pub mod alerts;
pub mod error;
pub mod feed;
pub mod report;
pub mod state;
pub mod util;

use alerts::batch::AlertBatch;

pub const TOOL_NAME: &str = "wxalert";

/// JSON schema version of wxalert reports.
/// Bump only when the report layout changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Section heading used when no title is configured.
pub const DEFAULT_SECTION_TITLE: &str = "US Weather Service Alerts";

/// Read, validate and normalize an alerts payload.
///
/// `path` may be `-` to read from stdin. The returned batch preserves the
/// record order of the payload; no sort order is applied here.
pub fn load(path: &Path) -> Result<AlertBatch> {
    let payload = feed::read::read_payload(path)?;
    let raw = feed::parse::parse_features(&payload.bytes)?;
    let alerts = alerts::normalize::normalize(&raw);

    Ok(AlertBatch::new(payload.into_source(), alerts))
}
