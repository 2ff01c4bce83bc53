use crate::TOOL_NAME;
use crate::alerts::model::NormalizedAlert;
use crate::report::model::Report;

/// Render a report as plain text: a section header, then one row per alert.
///
/// Collapsed rows show severity, headline and event type. Expanded rows
/// also list the timing, classification and sender details followed by
/// the full description.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    out.push_str(&format!(
        "Sort: {}  Alerts: {}  Expanded: {}\n",
        report.sort, report.summary.total, report.summary.expanded
    ));
    for w in &report.warnings {
        out.push_str(&format!("warning: {w}\n"));
    }
    out.push('\n');
    out.push_str(&format!("== {} ==\n", report.section.title));

    for alert in &report.section.alerts {
        render_row(&mut out, alert);
    }
    out
}

fn render_row(out: &mut String, alert: &NormalizedAlert) {
    let marker = if alert.is_expanded { "-" } else { "+" };
    out.push('\n');
    out.push_str(&format!("[{}] {}\n", alert.severity, alert.id));
    out.push_str(&format!("{marker} {}\n", alert.title));

    if alert.is_expanded {
        let details = [
            ("Effective Date", &alert.effective_date),
            ("Onset Date", &alert.onset_date),
            ("Expiry Date", &alert.expire_date),
            ("End Date", &alert.ends),
            ("Area", &alert.area),
            ("Status", &alert.status),
            ("Message Type", &alert.message_type),
            ("Category", &alert.category),
            ("Certainty", &alert.certainty),
            ("Urgency", &alert.urgency),
            ("Sender", &alert.sender),
            ("Sender Name", &alert.sender_name),
        ];
        for (label, value) in details {
            out.push_str(&format!("    {label}: {value}\n"));
        }
        out.push('\n');
        for line in alert.description.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }

    out.push_str(&format!("  {}\n", alert.event));
}
