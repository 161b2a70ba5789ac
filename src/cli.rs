//! Command-line interface for chezzi_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ChezziBot games - play the bot's mini-games in a terminal
#[derive(Parser, Debug)]
#[command(name = "chezzi_games")]
#[command(about = "Tic-tac-toe, Sokoban and rock-paper-scissors in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the bot configuration file
    #[arg(long, global = true, default_value = "chezzi.toml")]
    pub config: PathBuf,

    /// Sokoban level file (overrides the configured one)
    #[arg(long, global = true)]
    pub levels: Option<PathBuf>,

    /// Idle timeout in seconds (overrides the configured one)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play 3×3 tic-tac-toe; the challenged opponent moves first as X
    #[command(aliases = ["tic", "tac", "toe"])]
    Tictactoe {
        /// Name of the member you challenge
        opponent: String,

        /// Your name
        #[arg(long = "as", default_value = "player")]
        player: String,
    },

    /// Play 5×5 tic-tac-toe (four in a line wins)
    #[command(aliases = ["tic5", "tac5", "toe5"])]
    Tictactoe5 {
        /// Name of the member you challenge
        opponent: String,

        /// Your name
        #[arg(long = "as", default_value = "player")]
        player: String,
    },

    /// Push every box onto a target, level by level
    Sokoban {
        /// Your name
        #[arg(long = "as", default_value = "player")]
        player: String,
    },

    /// Rock-paper-scissors against a member, or the bot when no opponent is given
    Rps {
        /// Name of the member you challenge
        opponent: Option<String>,

        /// Your name
        #[arg(long = "as", default_value = "player")]
        player: String,
    },

    /// Validate the Sokoban level file and list its levels
    Levels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alias_and_globals() {
        let cli = Cli::parse_from(["chezzi_games", "tic", "ben", "--as", "ana", "--timeout", "30"]);
        assert_eq!(cli.timeout, Some(30));
        match cli.command {
            Command::Tictactoe { opponent, player } => {
                assert_eq!(opponent, "ben");
                assert_eq!(player, "ana");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rps_opponent_is_optional() {
        let cli = Cli::parse_from(["chezzi_games", "rps"]);
        assert!(matches!(cli.command, Command::Rps { opponent: None, .. }));
    }
}
