//! rf-rtp: Monte Carlo RTP evaluation of a 25-line 5x3 reel slot
//!
//! Usage:
//!   rf-rtp                                  - 1e9 spins on the built-in game
//!   rf-rtp --spins 10000000 --seed 42       - smaller reproducible run
//!   rf-rtp --config run.yaml --game game.json --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rf_rtp_sim::{SimConfig, Simulator};
use rf_slot_math::{GameDefinition, SlotGame};

#[derive(Parser)]
#[command(name = "rf-rtp", about = "Slot RTP Monte Carlo evaluator")]
struct Cli {
    /// Run configuration file (.json, .yaml or .yml); flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game definition file with reel strips in token form
    #[arg(short, long)]
    game: Option<PathBuf>,

    /// Total number of base spins
    #[arg(short = 'n', long)]
    spins: Option<u64>,

    /// Stake per payline
    #[arg(short, long)]
    bet_per_line: Option<f64>,

    /// Worker threads (0 = one per logical core)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Reference RTP to test against; a negative value skips the comparison
    #[arg(short, long, allow_negative_numbers = true)]
    reference_rtp: Option<f64>,

    /// Base RNG seed (time-derived when absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Progress report period in milliseconds (0 disables)
    #[arg(long)]
    progress_ms: Option<u64>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_file(path)
                .with_context(|| format!("failed to load run config {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(spins) = self.spins {
            config = config.with_spins(spins);
        }
        if let Some(bet) = self.bet_per_line {
            config = config.with_bet_per_line(bet);
        }
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(reference) = self.reference_rtp {
            config = config.with_reference_rtp(Some(reference));
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.progress_ms {
            config = config.with_progress_interval_ms(ms);
        }
        Ok(config)
    }

    fn game(&self) -> Result<SlotGame> {
        let definition = match &self.game {
            Some(path) => GameDefinition::from_file(path)
                .with_context(|| format!("failed to load game definition {}", path.display()))?,
            None => GameDefinition::standard(),
        };
        definition.build().context("invalid reel strips")
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.sim_config()?;
    let game = cli.game()?;

    log::info!(
        "rf-rtp {} | {} lines | reels {:?}",
        env!("CARGO_PKG_VERSION"),
        game.line_count(),
        game.base_reels.strips().iter().map(|s| s.len()).collect::<Vec<_>>()
    );

    let simulator = Simulator::new(config, game).context("invalid run configuration")?;
    let report = simulator.run().context("simulation failed")?;

    if cli.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
