//! multitoe - play generalized tic-tac-toe in the terminal.

use std::io;

use anyhow::Result;
use clap::Parser;
use multitoe::{ConsoleShell, GameEngine, GameRng};
use tracing::info_span;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe for 2-4 players on a (players + 1)-sided board
#[derive(Parser, Debug)]
#[command(name = "multitoe", version, about, long_about = None)]
struct Cli {
    /// Number of players (2-4). Asked for when omitted.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=4))]
    players: Option<u8>,

    /// Let the computer play the second seat. Asked for when omitted.
    #[arg(long)]
    cpu: Option<bool>,

    /// Seed for the computer's moves. Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let _game = info_span!("game", seed = rng.seed()).entered();

    let stdin = io::stdin();
    let mut shell = ConsoleShell::new(stdin.lock(), io::stdout());
    let config = shell.configure(cli.players.map(usize::from), cli.cpu)?;
    let mut engine = GameEngine::from_config(config)?;
    shell.play(&mut engine, &mut rng)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_players_range_checked_by_cli() {
        for bad in ["1", "5", "7"] {
            assert!(Cli::try_parse_from(["multitoe", "--players", bad]).is_err());
        }

        let args = ["multitoe", "--players", "4", "--cpu", "true", "--seed", "9"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.players, Some(4));
        assert_eq!(cli.cpu, Some(true));
        assert_eq!(cli.seed, Some(9));

        let cli = Cli::try_parse_from(["multitoe"]).unwrap();
        assert_eq!(cli.players, None);
    }
}
