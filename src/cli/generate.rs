use chrono::{NaiveDate, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::aggregate::generate_content;
use crate::cli::commands::GenerateArgs;
use crate::config::PrecinctConfig;
use crate::errors::PrecinctError;
use crate::models::{
    Criteria, DateRange, ModuleKind, ReportMetadata, ReportParams, ReportStatus, ReportType,
};
use crate::store::{fetch_snapshot, HttpStore, ReportStore};
use crate::views::{Mode, ReportsUi};

pub async fn handle_generate(
    args: GenerateArgs,
    config: &PrecinctConfig,
) -> Result<(), PrecinctError> {
    let form = build_params(&args)?;

    let mut ui = ReportsUi::new();
    ui.open_create(form.clone());

    let errors = match &ui.mode {
        Mode::Create(view) => view.validate(),
        _ => Vec::new(),
    };
    if let Some(first) = errors.first() {
        // Validation failures never reach the network.
        for error in &errors {
            eprintln!("{} {}", style("✗").red(), style(error).red());
        }
        let field = match first {
            PrecinctError::Validation { field, .. } => field.clone(),
            _ => String::new(),
        };
        return Err(PrecinctError::validation(
            field,
            "report form failed validation",
        ));
    }

    let store = HttpStore::new(&config.api.base_url, config.api.timeout_secs)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Fetching record collections...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let snapshot = fetch_snapshot(&store).await;
    spinner.finish_and_clear();

    if !snapshot.unavailable.is_empty() {
        let names: Vec<&str> = snapshot.unavailable.iter().map(|m| m.display_name()).collect();
        eprintln!(
            "{} {}",
            style("!").yellow().bold(),
            style(format!("Data unavailable for: {}", names.join(", "))).yellow()
        );
    }

    let content = generate_content(&snapshot, &form);
    let metadata = ReportMetadata {
        title: form.title.clone(),
        report_type: form.report_type,
        description: form.description.clone(),
        modules: form.selected_modules(),
        date_range: form.date_range,
        criteria: form.criteria.clone(),
        generated_by: config.report.generated_by.clone(),
        generated_at: Utc::now(),
    };

    let created = store
        .create(metadata, content, ReportStatus::Generated)
        .await?;
    ui.back();

    info!(
        id = %created.id,
        sections = created.content.len(),
        "Report generated"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!(
            "{} Generated {} ({}, {} sections)",
            style("✓").green(),
            style(created.report_number.as_deref().unwrap_or(&created.id)).cyan(),
            created.metadata.report_type.display_name(),
            created.content.len(),
        );
    }

    Ok(())
}

fn build_params(args: &GenerateArgs) -> Result<ReportParams, PrecinctError> {
    let report_type = ReportType::parse(&args.report_type)
        .ok_or_else(|| PrecinctError::Config(format!("Unknown report type: {}", args.report_type)))?;

    let date_range = DateRange::parse(&args.date_range)
        .ok_or_else(|| PrecinctError::Config(format!("Unknown date range: {}", args.date_range)))?;

    let mut modules = Vec::new();
    for raw in &args.modules {
        let module = ModuleKind::parse(raw)
            .ok_or_else(|| PrecinctError::Config(format!("Unknown module: {}", raw)))?;
        if !modules.contains(&module) {
            modules.push(module);
        }
    }

    let mut criteria = Criteria::default();
    if date_range == DateRange::Custom {
        criteria.start_date = Some(parse_date("start", args.start.as_deref())?);
        criteria.end_date = Some(parse_date("end", args.end.as_deref())?);
    }

    Ok(ReportParams {
        title: args.title.clone(),
        report_type,
        description: args.description.clone().unwrap_or_default(),
        modules,
        date_range,
        criteria,
    })
}

fn parse_date(field: &str, value: Option<&str>) -> Result<NaiveDate, PrecinctError> {
    let value = value.ok_or_else(|| {
        PrecinctError::validation(field, "required when --date-range is custom")
    })?;
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| PrecinctError::validation(field, "expected a YYYY-MM-DD date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            title: "Weekly summary".to_string(),
            report_type: "incident_report".to_string(),
            description: None,
            modules: vec!["vehicles".to_string(), "ob".to_string()],
            date_range: "week".to_string(),
            start: None,
            end: None,
            json: false,
        }
    }

    #[test]
    fn builds_params_from_args() {
        let params = build_params(&args()).unwrap();
        assert_eq!(params.report_type, ReportType::IncidentReport);
        assert_eq!(
            params.selected_modules(),
            vec![ModuleKind::Ob, ModuleKind::Vehicles]
        );
    }

    #[test]
    fn custom_range_requires_both_bounds() {
        let mut a = args();
        a.date_range = "custom".to_string();
        a.start = Some("2026-01-01".to_string());
        let err = build_params(&a).unwrap_err();
        assert!(matches!(err, PrecinctError::Validation { ref field, .. } if field == "end"));

        a.end = Some("2026-03-31".to_string());
        let params = build_params(&a).unwrap();
        assert!(params.custom_bounds().is_some());
    }

    #[test]
    fn unknown_module_is_rejected() {
        let mut a = args();
        a.modules = vec!["geofiles".to_string()];
        assert!(matches!(build_params(&a), Err(PrecinctError::Config(_))));
    }
}
