//! Command-line interface.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use skyraid_core::Result;
use skyraid_sim::SimConfig;

use crate::game_loop;
use crate::script::InputScript;

/// Headless SKYRAID simulation runner
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON simulation config (defaults apply to missing fields)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// JSON input script
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Run on the paced game-loop thread instead of as fast as possible
    #[arg(long)]
    pub realtime: bool,

    /// Override the config's RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Deploy this many random enemies instead of the default mission
    #[arg(long)]
    pub random_waves: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also print every n-th snapshot as a JSON line
    #[arg(long)]
    pub print_every: Option<u64>,
}

impl Cli {
    /// Load the config file, if any, and apply command-line overrides.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(count) = self.random_waves {
            config.random_waves = Some(count);
            config.waves = None;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn script(&self) -> Result<InputScript> {
        match &self.input {
            Some(path) => InputScript::load(path),
            None => Ok(InputScript::default()),
        }
    }
}

/// Run the simulation and print the final snapshot as JSON to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.sim_config()?;
    let script = cli.script()?;
    info!(
        "running {} ticks (seed {}, {})",
        cli.ticks,
        config.seed,
        if cli.realtime { "real time" } else { "batch" }
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let last = if cli.realtime {
        game_loop::run_realtime(config, &script, cli.ticks, cli.print_every, &mut out)?
    } else {
        Some(game_loop::run_batch(
            config,
            &script,
            cli.ticks,
            cli.print_every,
            &mut out,
        )?)
    };

    if let Some(snapshot) = last {
        serde_json::to_writer_pretty(&mut out, &snapshot)?;
        writeln!(out)?;
    }
    Ok(())
}
