//! Life Simulator CLI
//!
//! Runs a seeded Game of Life on a 40x25 grid, one generation per second,
//! until the process is killed.

use clap::{CommandFactory, FromArgMatches, Parser};
use life_env::TokioTicker;
use life_sim::{
    LifeWorld, PatternRegistry, SimConfig, SimError, SimulationLoop, TextRenderer,
    DEFAULT_PATTERN,
};
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(name = "life-sim")]
#[command(about = "Simulate Conway's Game of Life in the terminal", long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Preset pattern to seed the grid with
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,
}

/// Seeds the world and runs the loop on the wall clock.
async fn simulate(args: &Args, registry: &PatternRegistry) -> Result<u64, SimError> {
    let config = SimConfig::default();
    let world = LifeWorld::seeded(config.clone(), registry, &args.pattern)?;
    let ticker = TokioTicker::new(config.tick_period)?;

    let mut sim = SimulationLoop::new(world, TextRenderer::stdout(), ticker);
    sim.run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so they never interleave with frames on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let registry = PatternRegistry::builtin();

    // Help lists whatever the registry holds
    let matches = Args::command()
        .after_help(registry.listing())
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if let Err(e) = simulate(&args, &registry).await {
        error!("{}", e);
        eprintln!("{}", e);
        if matches!(e, SimError::UnsupportedPattern(_)) {
            eprintln!("{}", registry.listing());
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_pattern() {
        let args = Args::try_parse_from(["life-sim"]).unwrap();
        assert_eq!(args.pattern, "glider");
    }

    #[test]
    fn test_pattern_flag() {
        let args = Args::try_parse_from(["life-sim", "--pattern", "honeycomb"]).unwrap();
        assert_eq!(args.pattern, "honeycomb");
    }

    #[test]
    fn test_help_exits_cleanly() {
        let err = Args::command()
            .after_help(PatternRegistry::builtin().listing())
            .try_get_matches_from(["life-sim", "--help"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);

        let help = err.to_string();
        assert!(help.contains("--pattern"));
        assert!(help.contains(" * block"));
    }

    #[test]
    fn test_no_version_flag() {
        assert!(Args::try_parse_from(["life-sim", "--version"]).is_err());
    }

    #[tokio::test]
    async fn test_unknown_pattern_fails_before_running() {
        let args = Args {
            pattern: "spaceship".to_string(),
        };
        let err = simulate(&args, &PatternRegistry::builtin()).await.unwrap_err();
        assert!(matches!(err, SimError::UnsupportedPattern(ref n) if n == "spaceship"));
    }
}
