use console::style;

use crate::models::{ReportDocument, ReportStatus};

/// One formatted listing row: number, title, type, status, date.
pub fn render_list_row(report: &ReportDocument) -> String {
    let number = report.report_number.as_deref().unwrap_or(&report.id);
    format!(
        "{}  {}  {}  {}  {}",
        style(number).cyan(),
        style(&report.metadata.title).white().bold(),
        report.metadata.report_type.display_name(),
        status_label(report.status),
        report.generated_at().format("%Y-%m-%d %H:%M"),
    )
}

/// The full report: metadata panel followed by every section verbatim.
pub fn render_report(report: &ReportDocument) -> String {
    let mut out = String::new();
    let number = report.report_number.as_deref().unwrap_or(&report.id);

    out.push_str(&format!(
        "{} {}\n",
        style(number).cyan().bold(),
        style(&report.metadata.title).white().bold(),
    ));
    out.push_str(&format!(
        "Type: {}\nStatus: {}\nDate Range: {}\nGenerated: {}\nGenerated By: {}\n",
        report.metadata.report_type.display_name(),
        status_label(report.status),
        report.metadata.date_range.display_name(),
        report.generated_at().format("%Y-%m-%d %H:%M:%S UTC"),
        report.metadata.generated_by,
    ));
    if !report.metadata.description.is_empty() {
        out.push_str(&format!("Description: {}\n", report.metadata.description));
    }

    for section in &report.content {
        out.push_str(&format!(
            "\n{} {}\n{}\n",
            style("##").cyan().bold(),
            style(&section.title).cyan().bold(),
            section.content,
        ));
    }

    out
}

pub fn status_label(status: ReportStatus) -> String {
    let label = status.as_str();
    match status {
        ReportStatus::Draft => style(label).yellow(),
        ReportStatus::Generated => style(label).green(),
        ReportStatus::Reviewed => style(label).cyan(),
        ReportStatus::Approved => style(label).green().bold(),
        ReportStatus::Archived => style(label).dim(),
    }
    .to_string()
}
