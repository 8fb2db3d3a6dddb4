//! Headless match simulator
//!
//! Plays many seeded CPU-vs-CPU matches in parallel and prints aggregate
//! statistics. Run with: `cargo run -p chimera-sim -- --matches 1000`

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chimera_core::{
    BattleConfig, BattleEvent, MatchController, MatchOutcome, MatchPhase, RoundResult, Side,
};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Simulate Chimera matches
#[derive(Parser)]
#[command(name = "chimera-sim")]
#[command(about = "Run seeded CPU-vs-CPU matches and report statistics", long_about = None)]
#[command(version)]
struct Cli {
    /// First seed; match i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of matches to play
    #[arg(short = 'n', long, default_value_t = 100)]
    matches: u64,

    /// JSON file with battle config overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchSummary {
    seed: u64,
    outcome: MatchOutcome,
    player_wins: u32,
    cpu_wins: u32,
    draws: u32,
    unknown_rounds: u32,
    ticks: u64,
    /// Names of the monsters that won a round
    winners: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    matches: u64,
    failed: u64,
    player_match_wins: u64,
    cpu_match_wins: u64,
    drawn_matches: u64,
    rounds: u64,
    unknown_rounds: u64,
    average_ticks_per_round: f64,
    top_winners: Vec<(String, u64)>,
}

fn load_config(path: Option<&PathBuf>) -> Result<BattleConfig> {
    let Some(path) = path else {
        return Ok(BattleConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

fn play_match(config: &BattleConfig, seed: u64) -> Result<MatchSummary> {
    let mut controller = MatchController::with_seed(config.clone(), seed);
    controller.initialize()?;

    let mut ticks = 0u64;
    let mut unknown_rounds = 0;
    let mut winners = Vec::new();
    while controller.phase() != MatchPhase::Finished {
        let output = controller
            .play_auto_round()
            .with_context(|| format!("seed {seed}, round {}", controller.round()))?;
        for event in &output.events {
            if let BattleEvent::RoundEnd { ticks: round_ticks, .. } = event {
                ticks += u64::from(*round_ticks);
            }
        }
        match output.record.result {
            RoundResult::PlayerWin => winners.push(output.record.player_monster.name.clone()),
            RoundResult::CpuWin => winners.push(output.record.cpu_monster.name.clone()),
            RoundResult::Unknown => unknown_rounds += 1,
            RoundResult::Draw => {}
        }
    }

    let record = controller.record();
    Ok(MatchSummary {
        seed,
        outcome: record.overall(),
        player_wins: record.player_wins,
        cpu_wins: record.cpu_wins,
        draws: record.draws,
        unknown_rounds,
        ticks,
        winners,
    })
}

fn aggregate(results: Vec<Result<MatchSummary>>, rounds_per_match: u32) -> Report {
    let mut report = Report::default();
    let mut total_ticks = 0u64;
    let mut winner_counts: BTreeMap<String, u64> = BTreeMap::new();

    for result in results {
        report.matches += 1;
        let summary = match result {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("match failed: {e:#}");
                report.failed += 1;
                continue;
            }
        };
        match summary.outcome {
            MatchOutcome::Win => report.player_match_wins += 1,
            MatchOutcome::Lose => report.cpu_match_wins += 1,
            MatchOutcome::Draw => report.drawn_matches += 1,
        }
        report.rounds += u64::from(rounds_per_match);
        report.unknown_rounds += u64::from(summary.unknown_rounds);
        total_ticks += summary.ticks;
        for name in summary.winners {
            *winner_counts.entry(name).or_default() += 1;
        }
    }

    if report.rounds > 0 {
        report.average_ticks_per_round = total_ticks as f64 / report.rounds as f64;
    }
    let mut top: Vec<(String, u64)> = winner_counts.into_iter().collect();
    top.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top.truncate(10);
    report.top_winners = top;
    report
}

fn print_report(report: &Report) {
    println!("matches played:     {}", report.matches);
    println!("failed:             {}", report.failed);
    println!(
        "match results:      {} {} / {} {} / {} draw",
        report.player_match_wins,
        Side::Player,
        report.cpu_match_wins,
        Side::Cpu,
        report.drawn_matches
    );
    println!("rounds:             {}", report.rounds);
    println!("unknown rounds:     {}", report.unknown_rounds);
    println!("avg ticks / round:  {:.1}", report.average_ticks_per_round);
    println!("top round winners:");
    for (name, wins) in &report.top_winners {
        println!("  {wins:>6}  {name}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,chimera_core=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    info!(
        seed = cli.seed,
        matches = cli.matches,
        rounds = config.rounds_per_match,
        "starting simulation"
    );

    let results: Vec<Result<MatchSummary>> = (0..cli.matches)
        .into_par_iter()
        .map(|i| play_match(&config, cli.seed.wrapping_add(i)))
        .collect();
    let report = aggregate(results, config.rounds_per_match);
    info!(failed = report.failed, "simulation finished");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
