use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "precinct", version, about = "Police records reporting over a REST record store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List generated reports
    List(ListArgs),
    /// Show a single report in full
    Show(ShowArgs),
    /// Generate a new report from the record collections
    Generate(GenerateArgs),
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Substring match against report title or number (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by report type (e.g. incident_report, monthly_summary)
    #[arg(long = "type")]
    pub report_type: Option<String>,

    /// Filter by status: Draft, Generated, Reviewed, Approved, Archived
    #[arg(long)]
    pub status: Option<String>,

    /// Emit raw JSON instead of formatted output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Report id or report number
    pub id: String,

    /// Emit raw JSON instead of formatted output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Report title
    #[arg(short, long)]
    pub title: String,

    /// Report type
    #[arg(long = "type", default_value = "incident_report")]
    pub report_type: String,

    /// Optional free-text description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Record collections to include (comma-separated):
    /// ob, custodial, evidence, officers, vehicles
    #[arg(short, long, value_delimiter = ',', default_value = "ob")]
    pub modules: Vec<String>,

    /// Period the report covers: today, week, month, quarter, year, custom
    #[arg(long, default_value = "week")]
    pub date_range: String,

    /// Start date (YYYY-MM-DD), required with --date-range custom
    #[arg(long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD), required with --date-range custom
    #[arg(long)]
    pub end: Option<String>,

    /// Emit the created report as raw JSON
    #[arg(long)]
    pub json: bool,
}
