use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use ppc_healthqc::config::{check_profile, load_profile};
use ppc_healthqc::input::load_table;
use ppc_healthqc::logging::init_logging;
use ppc_healthqc::pipeline::stage3_derive::derive_rows;
use ppc_healthqc::pipeline::stage5_campaigns::aggregate_campaigns;
use ppc_healthqc::pipeline::stage6_score::compute_overall_score_with;
use ppc_healthqc::pipeline::stage7_report::{ReportInput, write_reports};
use ppc_healthqc::report::view::{RowQuery, SortDirection, SortKey};
use ppc_healthqc::report::{format_currency, format_pct};
use ppc_healthqc::ScoringProfile;

#[derive(Parser, Debug)]
#[command(name = "ppc-healthqc")]
#[command(about = "Spot wasted ad spend and score search-term health from a sponsored-ads export")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a search-term report and write row, campaign and summary files
    Run(RunArgs),
    /// Only check that the report has every required column
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the default scoring profile as JSON
    Defaults,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Search-term report (.csv or .csv.gz)
    #[arg(long)]
    input: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Scoring profile JSON; omitted fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    target_acos: Option<f64>,

    #[arg(long)]
    min_ctr: Option<f64>,

    #[arg(long)]
    min_cvr: Option<f64>,

    /// Zero-order spend at or above which a term is bad
    #[arg(long)]
    zero_order_waste: Option<f64>,

    /// Keep only rows whose campaign, term, ad group or match type contains this text
    #[arg(long)]
    filter: Option<String>,

    #[arg(long, value_enum, default_value_t = SortKey::Cost)]
    sort_by: SortKey,

    /// Sort ascending instead of descending
    #[arg(long)]
    ascending: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Run(args) => run_scoring(&args),
        Command::Check { input } => run_check(&input),
        Command::Defaults => {
            let json = serde_json::to_string_pretty(&ScoringProfile::default())
                .map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
    }
}

fn run_scoring(args: &RunArgs) -> Result<(), String> {
    let profile = resolve_profile(args)?;
    let table = load_table(&args.input).map_err(|e| e.to_string())?;

    let rows = derive_rows(&table.records, &profile.thresholds);
    let campaigns = aggregate_campaigns(&rows);
    let score = compute_overall_score_with(&rows, &profile);

    tracing::info!(
        rows = rows.len(),
        campaigns = campaigns.len(),
        "score {:.1}/10 ({}), ACOS {}, zero-order spend {} of {}",
        score.score,
        score.label.as_str(),
        format_pct(score.overall.acos),
        format_pct(score.overall.wasted_spend_share),
        format_currency(score.overall.totals.cost)
    );

    let query = row_query(args);
    let input = ReportInput {
        input_path: args.input.display().to_string(),
        rows: &rows,
        campaigns: &campaigns,
        score: &score,
        profile: &profile,
        query: &query,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out).map_err(|e| e.to_string())?;
    tracing::info!(out = %args.out.display(), "reports written");
    Ok(())
}

fn run_check(input: &Path) -> Result<(), String> {
    let table = load_table(input).map_err(|e| e.to_string())?;
    tracing::info!(
        rows = table.records.len(),
        "all required columns present in {}",
        input.display()
    );
    Ok(())
}

fn resolve_profile(args: &RunArgs) -> Result<ScoringProfile, String> {
    let mut profile = match &args.config {
        Some(path) => load_profile(path).map_err(|e| e.to_string())?,
        None => ScoringProfile::default(),
    };
    apply_overrides(&mut profile, args);
    check_profile(&profile).map_err(|e| e.to_string())?;
    Ok(profile)
}

fn apply_overrides(profile: &mut ScoringProfile, args: &RunArgs) {
    let t = &mut profile.thresholds;
    if let Some(v) = args.target_acos {
        t.target_acos = v;
    }
    if let Some(v) = args.min_ctr {
        t.min_ctr = v;
    }
    if let Some(v) = args.min_cvr {
        t.min_cvr = v;
    }
    if let Some(v) = args.zero_order_waste {
        t.zero_order_waste = v;
    }
}

fn row_query(args: &RunArgs) -> RowQuery {
    RowQuery {
        filter: args.filter.clone(),
        sort_by: args.sort_by,
        direction: if args.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        },
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
