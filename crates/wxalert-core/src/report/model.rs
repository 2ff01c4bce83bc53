use serde::{Deserialize, Serialize};

use crate::alerts::batch::SourceInfo;
use crate::alerts::model::NormalizedAlert;
use crate::alerts::sort::SortOrder;
use crate::state::AlertListState;
use crate::{DEFAULT_SECTION_TITLE, SCHEMA_VERSION};

/// Knobs for report assembly.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Heading of the single section the alerts are grouped under.
    pub section_title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            section_title: DEFAULT_SECTION_TITLE.to_string(),
        }
    }
}

/// Top-level wxalert report.
///
/// This is the stable JSON output contract. Identical payloads with the
/// same sort and expand selections produce identical reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub source: SourceInfo,
    pub sort: SortOrder,
    pub section: Section,
    pub summary: Summary,
    pub warnings: Vec<String>,
}

impl Report {
    /// Assemble a report from the final list state.
    pub fn new(
        tool: ToolInfo,
        source: SourceInfo,
        state: AlertListState,
        mut warnings: Vec<String>,
        config: &ReportConfig,
    ) -> Self {
        warnings.sort();

        let summary = Summary {
            total: state.alerts.len(),
            expanded: state.expanded_count(),
        };

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            source,
            sort: state.sort,
            section: Section {
                title: config.section_title.clone(),
                alerts: state.alerts,
            },
            summary,
            warnings,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Named group of alert rows, keyed by alert id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub alerts: Vec<NormalizedAlert>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub expanded: usize,
}
