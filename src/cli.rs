use crate::types::record::{Capacity, DataAvailability};
use crate::types::recommend::{
    AnalysisScale, BudgetBand, DataContext, PolicyObjective, TeamCapacity, TimeHorizon,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "observatory",
    version,
    about = "African energy modelling observatory CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inventory-wide statistics and dataset fingerprint
    Summary(SummaryCommand),
    /// Countries ranked by gap score (higher = more under-served)
    Gaps(GapsCommand),
    /// Country readiness comparison table
    Readiness(ReadinessCommand),
    /// Browse and filter the study inventory
    Studies(StudiesCommand),
    /// Detail view for a single country
    Country(CountryCommand),
    /// Match modelling tools to a six-question context profile
    Recommend(RecommendCommand),
    /// Export choropleth-ready country values keyed by ISO-3
    Export(ExportCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Table,
    Md,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RankKey {
    Readiness,
    Gap,
    Density,
    Electrification,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MapLayer {
    Density,
    NationalOnly,
    Gap,
    Readiness,
    Region,
    PowerPool,
}

#[derive(Args)]
pub struct SummaryCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct GapsCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Restrict to one or more regions (north, west, east, central, southern)
    #[arg(long)]
    pub region: Vec<String>,
    /// Show only the N most under-served countries
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct ReadinessCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub region: Vec<String>,
    #[arg(long, value_enum)]
    pub capacity: Vec<Capacity>,
    #[arg(long, value_enum)]
    pub data: Vec<DataAvailability>,
    #[arg(long, value_enum, default_value = "readiness")]
    pub sort_by: RankKey,
    /// Case-insensitive substring match on the country name
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct StudiesCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Only studies covering this ISO-2 country code
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub year_from: Option<i32>,
    #[arg(long)]
    pub year_to: Option<i32>,
    #[arg(long)]
    pub scale: Vec<String>,
    #[arg(long)]
    pub approach: Vec<String>,
    #[arg(long)]
    pub method: Vec<String>,
    #[arg(long)]
    pub frequency: Vec<String>,
    #[arg(long)]
    pub license: Vec<String>,
    /// Only studies covering the informal economy
    #[arg(long)]
    pub informal_economy: bool,
    #[arg(long)]
    pub biomass_charcoal: bool,
    #[arg(long)]
    pub power_reliability: bool,
    #[arg(long)]
    pub urbanization: bool,
    #[arg(long)]
    pub sdg7: bool,
    #[arg(long)]
    pub sdg13: bool,
    #[arg(long)]
    pub ndc: bool,
    #[arg(long)]
    pub local_ownership: bool,
    /// Required technologies (solar, wind, hydro, biomass, nuclear, geothermal, fossil, h2, coal)
    #[arg(long)]
    pub tech: Vec<String>,
    /// Case-insensitive substring match on model name or authors
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct CountryCommand {
    pub path: PathBuf,
    /// ISO-2 country code, e.g. SN
    pub iso: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct RecommendCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long, value_enum)]
    pub policy: Option<PolicyObjective>,
    #[arg(long, value_enum)]
    pub scale: Option<AnalysisScale>,
    #[arg(long, value_enum)]
    pub budget: Option<BudgetBand>,
    #[arg(long, value_enum)]
    pub capacity: Option<TeamCapacity>,
    #[arg(long, value_enum)]
    pub horizon: Option<TimeHorizon>,
    #[arg(long, value_enum)]
    pub data_context: Option<DataContext>,
    /// Number of tools to display (0 for the full ranking)
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct ExportCommand {
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "density")]
    pub layer: MapLayer,
    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub year_from: Option<i32>,
    #[arg(long)]
    pub year_to: Option<i32>,
    #[arg(long)]
    pub scale: Vec<String>,
    #[arg(long)]
    pub approach: Vec<String>,
}
