mod cli;
mod config;
mod enrich;
mod error;
mod export;
mod filter;
mod load;
mod recommend;
mod report;
mod stats;
mod types;

use crate::error::ObservatoryError;
use crate::filter::StudyFilter;
use crate::types::config::ObservatoryConfig;
use crate::types::enriched::{CountryDetail, EnrichedCountry};
use crate::types::record::Study;
use crate::types::recommend::RecommenderQuery;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const EMPTY: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

struct Context {
    dataset: load::Dataset,
    config: Option<ObservatoryConfig>,
}

fn load_context(path: &Path) -> Result<Context, ObservatoryError> {
    if !path.is_dir() {
        return Err(ObservatoryError::DataDirNotFound(
            path.display().to_string(),
        ));
    }
    let config = config::load_config(path)?;
    let dataset = load::load(path, config.as_ref())?;
    tracing::info!(fingerprint = %dataset.fingerprint, "dataset ready");
    Ok(Context { dataset, config })
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: Option<&ObservatoryConfig>,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Table) => report::OutputFormat::Table,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        None => {
            let configured = config
                .and_then(|cfg| cfg.output.as_ref())
                .and_then(|output| output.format.as_deref());
            match configured {
                Some("md") => report::OutputFormat::Md,
                Some("json") => report::OutputFormat::Json,
                _ => report::OutputFormat::Table,
            }
        }
    }
}

fn region_matches(regions: &[String], region: &str) -> bool {
    regions.is_empty()
        || regions
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(region))
}

fn run() -> Result<i32, ObservatoryError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Summary(cmd) => {
            let ctx = load_context(&cmd.path)?;
            let enriched = enrich::enrich(&ctx.dataset.countries, &ctx.dataset.studies);
            let summary = stats::summarize(
                &ctx.dataset.countries,
                &ctx.dataset.studies,
                &ctx.dataset.tools,
                &enriched,
                &ctx.dataset.fingerprint,
            );
            let format = output_format(cmd.format, ctx.config.as_ref());
            println!("{}", report::render_summary(&summary, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Gaps(cmd) => {
            let ctx = load_context(&cmd.path)?;
            let mut rows = enrich::enrich(&ctx.dataset.countries, &ctx.dataset.studies);
            rows.retain(|row| region_matches(&cmd.region, &row.country.region));
            rows.sort_by(|a, b| b.gap_score.cmp(&a.gap_score));
            if let Some(top) = cmd.top {
                rows.truncate(top);
            }

            let format = output_format(cmd.format, ctx.config.as_ref());
            println!(
                "{}",
                report::render_countries("Most under-served countries", &rows, format)?
            );
            Ok(if rows.is_empty() {
                exit_code::EMPTY
            } else {
                exit_code::SUCCESS
            })
        }
        cli::Commands::Readiness(cmd) => {
            let ctx = load_context(&cmd.path)?;
            let mut rows = enrich::enrich(&ctx.dataset.countries, &ctx.dataset.studies);
            rows.retain(|row| {
                region_matches(&cmd.region, &row.country.region)
                    && (cmd.capacity.is_empty() || cmd.capacity.contains(&row.country.capacity))
                    && (cmd.data.is_empty()
                        || cmd.data.contains(&row.country.data_availability))
                    && cmd.search.as_deref().map_or(true, |needle| {
                        row.country
                            .name
                            .to_ascii_lowercase()
                            .contains(&needle.to_ascii_lowercase())
                    })
            });
            sort_countries(&mut rows, cmd.sort_by);

            let format = output_format(cmd.format, ctx.config.as_ref());
            println!(
                "{}",
                report::render_countries("Country readiness", &rows, format)?
            );
            Ok(if rows.is_empty() {
                exit_code::EMPTY
            } else {
                exit_code::SUCCESS
            })
        }
        cli::Commands::Studies(cmd) => {
            let ctx = load_context(&cmd.path)?;
            let filter = StudyFilter {
                year_from: cmd.year_from,
                year_to: cmd.year_to,
                scales: cmd.scale,
                approaches: cmd.approach,
                methods: cmd.method,
                frequencies: cmd.frequency,
                licenses: cmd.license,
                informal_economy: cmd.informal_economy,
                biomass_charcoal: cmd.biomass_charcoal,
                power_reliability: cmd.power_reliability,
                urbanization: cmd.urbanization,
                sdg_7: cmd.sdg7,
                sdg_13: cmd.sdg13,
                ndc_mention: cmd.ndc,
                local_ownership: cmd.local_ownership,
                technologies: cmd.tech,
                search: cmd.search,
            };

            let mut rows: Vec<&Study> = match &cmd.country {
                Some(iso) => enrich::studies_for_country(
                    &ctx.dataset.studies,
                    &iso.to_ascii_uppercase(),
                ),
                None => ctx.dataset.studies.iter().collect(),
            };
            rows.retain(|study| filter.matches(study));

            let format = output_format(cmd.format, ctx.config.as_ref());
            println!("{}", report::render_studies(&rows, format)?);
            Ok(if rows.is_empty() {
                exit_code::EMPTY
            } else {
                exit_code::SUCCESS
            })
        }
        cli::Commands::Country(cmd) => {
            let ctx = load_context(&cmd.path)?;
            let iso = cmd.iso.to_ascii_uppercase();
            let enriched = enrich::enrich(&ctx.dataset.countries, &ctx.dataset.studies);
            let found = enriched
                .into_iter()
                .find(|row| row.country.iso_code == iso)
                .ok_or_else(|| ObservatoryError::UnknownCountry(cmd.iso.clone()))?;
            let studies: Vec<Study> = enrich::studies_for_country(&ctx.dataset.studies, &iso)
                .into_iter()
                .cloned()
                .collect();
            let detail = CountryDetail {
                enriched: found,
                studies,
            };

            let format = output_format(cmd.format, ctx.config.as_ref());
            println!("{}", report::render_country_detail(&detail, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Recommend(cmd) => {
            let ctx = load_context(&cmd.path)?;
            let query = RecommenderQuery {
                policy: cmd.policy,
                scale: cmd.scale,
                budget: cmd.budget,
                capacity: cmd.capacity,
                horizon: cmd.horizon,
                data_context: cmd.data_context,
            };
            if query.is_empty() {
                tracing::info!("no profile answers; ranking on track record and training only");
            }
            let mut ranked = recommend::recommend(&ctx.dataset.tools, &query);

            // Truncation is a display choice; the scoring ranks every tool.
            let top = cmd.top.unwrap_or_else(|| {
                ctx.config
                    .as_ref()
                    .map(ObservatoryConfig::recommend_top)
                    .unwrap_or(types::config::DEFAULT_RECOMMEND_TOP)
            });
            if top > 0 {
                ranked.truncate(top);
            }

            let format = output_format(cmd.format, ctx.config.as_ref());
            println!("{}", report::render_tools(&ranked, format)?);
            Ok(if ranked.is_empty() {
                exit_code::EMPTY
            } else {
                exit_code::SUCCESS
            })
        }
        cli::Commands::Export(cmd) => {
            let ctx = load_context(&cmd.path)?;
            let enriched = enrich::enrich(&ctx.dataset.countries, &ctx.dataset.studies);
            let filter = StudyFilter {
                year_from: cmd.year_from,
                year_to: cmd.year_to,
                scales: cmd.scale,
                approaches: cmd.approach,
                ..StudyFilter::default()
            };
            let filtered = filter.apply(&ctx.dataset.studies);
            let layer = match cmd.layer {
                cli::MapLayer::Density => export::Layer::Density,
                cli::MapLayer::NationalOnly => export::Layer::NationalOnly,
                cli::MapLayer::Gap => export::Layer::Gap,
                cli::MapLayer::Readiness => export::Layer::Readiness,
                cli::MapLayer::Region => export::Layer::Region,
                cli::MapLayer::PowerPool => export::Layer::PowerPool,
            };
            let map = export::map_export(&enriched, &filtered, layer, &ctx.dataset.fingerprint);
            let rendered = serde_json::to_string_pretty(&map)?;

            match cmd.out {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("export written: {}", path.display());
                }
                None => println!("{rendered}"),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn sort_countries(rows: &mut [EnrichedCountry], key: cli::RankKey) {
    match key {
        cli::RankKey::Readiness => rows.sort_by(|a, b| {
            b.readiness_score
                .partial_cmp(&a.readiness_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        cli::RankKey::Gap => rows.sort_by(|a, b| b.gap_score.cmp(&a.gap_score)),
        cli::RankKey::Density => {
            rows.sort_by(|a, b| b.country.nb_models_applied.cmp(&a.country.nb_models_applied))
        }
        cli::RankKey::Electrification => rows.sort_by(|a, b| {
            b.country
                .electrification_rate
                .partial_cmp(&a.country.electrification_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
}

/// Log level comes from the global flags, with RUST_LOG as the override.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_directive = if quiet {
        "observatory=error"
    } else {
        match verbose {
            0 => "observatory=warn",
            1 => "observatory=info",
            _ => "observatory=debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
