use crate::cli::commands::ShowArgs;
use crate::cli::render::render_report;
use crate::config::PrecinctConfig;
use crate::errors::PrecinctError;
use crate::store::{HttpStore, ReportStore};
use crate::views::DetailView;

pub async fn handle_show(args: ShowArgs, config: &PrecinctConfig) -> Result<(), PrecinctError> {
    let store = HttpStore::new(&config.api.base_url, config.api.timeout_secs)?;
    let report = store.get(&args.id).await?;
    let view = DetailView::new(report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view.report)?);
    } else {
        print!("{}", render_report(&view.report));
    }

    Ok(())
}
