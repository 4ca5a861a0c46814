//! MPE CLI
//!
//! Command-line interface for inspecting multi-agent particle scenarios.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use mpe::scenario::Scenario;
use mpe_envs::{make_scenario, TagConfig, SCENARIOS};

mod report;

#[derive(Parser)]
#[command(name = "mpe")]
#[command(version, about = "MPE - Multi-agent particle scenarios in Rust", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available scenarios
    List,

    /// Print the agent roster and physical parameters
    Layout {
        #[command(flatten)]
        world: WorldArgs,
    },

    /// Reset a world and print every agent's reward and observation
    Inspect {
        #[command(flatten)]
        world: WorldArgs,

        /// Random seed for the episode reset
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Args)]
struct WorldArgs {
    /// Scenario name
    #[arg(long, default_value = "simple_tag")]
    scenario: String,

    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Number of adversaries
    #[arg(long)]
    adversaries: Option<usize>,

    /// Number of good agents
    #[arg(long)]
    good: Option<usize>,

    /// Number of neutral agents
    #[arg(long)]
    neutrals: Option<usize>,

    /// Number of obstacles
    #[arg(long)]
    obstacles: Option<usize>,

    /// Hide adversary velocities from observers
    #[arg(long)]
    hide_adversary_speeds: bool,
}

impl WorldArgs {
    fn config(&self) -> Result<TagConfig> {
        let mut config = match &self.config {
            Some(path) => TagConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => TagConfig::default(),
        };
        if let Some(n) = self.adversaries {
            config.num_adversaries = n;
        }
        if let Some(n) = self.good {
            config.num_good = n;
        }
        if let Some(n) = self.neutrals {
            config.num_neutral = n;
        }
        if let Some(n) = self.obstacles {
            config.num_obstacles = n;
        }
        if self.hide_adversary_speeds {
            config.obs_adversary_speeds = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_scenarios(),
        Commands::Layout { world } => layout(&world)?,
        Commands::Inspect { world, seed } => inspect(&world, seed)?,
    }

    Ok(())
}

fn list_scenarios() {
    println!("Available scenarios:");
    for name in SCENARIOS {
        println!("  {name}");
    }
}

fn layout(args: &WorldArgs) -> Result<()> {
    let scenario = make_scenario(&args.scenario, args.config()?)?;
    let world = scenario.make_world()?;
    print!("{}", report::roster(&world));
    Ok(())
}

fn inspect(args: &WorldArgs, seed: u64) -> Result<()> {
    let scenario = make_scenario(&args.scenario, args.config()?)?;
    let mut world = scenario.make_world()?;
    let mut rng = StdRng::seed_from_u64(seed);
    scenario.reset_world(&mut world, &mut rng);

    tracing::info!(scenario = %args.scenario, seed, agents = world.agents.len(), "Inspecting");

    let rewards = scenario.rewards(&world)?;
    for (i, reward) in rewards.iter().enumerate() {
        let obs = scenario.observation(i, &world)?;
        println!("{}", report::agent_line(&world.agents[i], *reward, &obs));
    }
    println!("captures: {}", scenario.capture_count(&world));
    Ok(())
}
