use console::style;
use tracing::info;

use crate::cli::commands::ListArgs;
use crate::cli::render::render_list_row;
use crate::config::PrecinctConfig;
use crate::errors::PrecinctError;
use crate::models::{ReportStatus, ReportType};
use crate::store::{HttpStore, ReportStore};
use crate::views::ReportsUi;

pub async fn handle_list(args: ListArgs, config: &PrecinctConfig) -> Result<(), PrecinctError> {
    let store = HttpStore::new(&config.api.base_url, config.api.timeout_secs)?;
    let mut ui = ReportsUi::new();

    ui.list.search = args.search.unwrap_or_default();
    ui.list.type_filter = args
        .report_type
        .as_deref()
        .map(|s| {
            ReportType::parse(s)
                .ok_or_else(|| PrecinctError::Config(format!("Unknown report type: {}", s)))
        })
        .transpose()?;
    ui.list.status_filter = args
        .status
        .as_deref()
        .map(|s| {
            ReportStatus::parse(s)
                .ok_or_else(|| PrecinctError::Config(format!("Unknown report status: {}", s)))
        })
        .transpose()?;

    match store.list().await {
        Ok(reports) => ui.list.set_reports(reports),
        Err(e) => {
            ui.list.set_error(e.to_string());
            return Err(e);
        }
    }

    let filtered = ui.list.filtered();
    info!(total = ui.list.reports().len(), shown = filtered.len(), "Listing reports");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!(
            "{}",
            style("No reports found. Generate one or adjust your filters.").dim()
        );
        return Ok(());
    }

    for report in filtered {
        println!("{}", render_list_row(report));
    }

    Ok(())
}
