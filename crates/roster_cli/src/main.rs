//! Roster CLI
//!
//! Balances a roster JSON file into two teams and prints the result.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_core::api::{balance_roster, BalanceRequest, BalanceResponse, TeamSummary};
use roster_core::{BalanceConfig, ParticipantStats, RatingModel, SCHEMA_VERSION};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Split a player pool into two balanced teams", long_about = None)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance a roster into two teams
    Balance {
        /// Roster JSON file (array of participants)
        #[arg(long)]
        roster: PathBuf,

        /// Number of shuffled candidates to rank
        #[arg(long, default_value_t = 1)]
        candidates: usize,

        /// Shuffle seed for reproducible candidates
        #[arg(long)]
        seed: Option<u64>,

        /// Balance config JSON (defaults to $ROSTER_BALANCE_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the raw JSON response
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Show each participant's composite rating
    Rate {
        /// Roster JSON file (array of participants)
        #[arg(long)]
        roster: PathBuf,

        /// Balance config JSON (defaults to $ROSTER_BALANCE_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Balance { roster, candidates, seed, config, json } => {
            let participants = load_roster(&roster)?;
            let config = load_config(config.as_deref())?;

            let request = BalanceRequest {
                schema_version: SCHEMA_VERSION,
                participants,
                candidates: Some(candidates),
                seed,
                config: Some(config),
            };
            let response = balance_roster(&request).context("Balancing failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response);
            }
        }

        Commands::Rate { roster, config } => {
            let participants = load_roster(&roster)?;
            let config = load_config(config.as_deref())?;
            print_ratings(&RatingModel::new(config.rating), &participants);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_roster(path: &Path) -> Result<Vec<ParticipantStats>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let participants: Vec<ParticipantStats> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid roster JSON in {}", path.display()))?;
    debug!(count = participants.len(), path = %path.display(), "loaded roster");
    Ok(participants)
}

fn load_config(path: Option<&Path>) -> Result<BalanceConfig> {
    let config = match path {
        Some(path) => {
            let path = path.to_string_lossy();
            BalanceConfig::from_file(&path)
                .with_context(|| format!("Failed to load config {path}"))?
        }
        None => BalanceConfig::from_env().context("Failed to load config from environment")?,
    };
    Ok(config)
}

fn print_response(response: &BalanceResponse) {
    if let Some(seed) = response.seed {
        println!("🎲 Seed: {}", seed);
    }

    for candidate in &response.candidates {
        println!();
        println!("━━━ Candidate #{} ━━━", candidate.rank);
        print_team("Team A", &candidate.team_a);
        print_team("Team B", &candidate.team_b);
        println!("⚖️  Balance:    {}/100", candidate.balance_score);
        println!("🏆 Prediction: {}", candidate.predicted_winner);
        println!("📊 Confidence: {:.0}%", candidate.confidence * 100.0);
        println!("   {}", candidate.analysis);
    }
}

fn print_team(label: &str, team: &TeamSummary) {
    println!("{} [{}] strength {:.3}", label, team.formation, team.strength);
    for player in &team.players {
        println!("   {:<3} {:<24} {:.2}", player.position.code(), player.name, player.rating);
    }
    println!("   + {}", team.strengths.join(", "));
    println!("   - {}", team.weaknesses.join(", "));
}

fn print_ratings(model: &RatingModel, participants: &[ParticipantStats]) {
    let mut rows: Vec<(&ParticipantStats, f64)> =
        participants.iter().map(|p| (p, model.rating(p))).collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!(
        "{:<24} {:>5} {:>6} {:>6} {:>6} {:>6} {:>7}",
        "Name", "Base", "Exp", "Goals", "Asst", "Win", "Rating"
    );
    for (p, _) in rows {
        let b = model.breakdown(p);
        println!(
            "{:<24} {:>5.2} {:>6.3} {:>6.3} {:>6.3} {:>6.3} {:>7.3}",
            p.name,
            b.base,
            b.experience_bonus,
            b.goal_bonus,
            b.assist_bonus,
            b.win_rate_bonus,
            b.composite
        );
    }
}
