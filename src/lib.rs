//! ChezziBot games - turn-based mini-games behind a small engine
//!
//! Every game implements one [`RuleSet`] trait and is driven through a
//! [`Session`] that binds it to its participants.
//!
//! # Architecture
//!
//! - **Games**: tic-tac-toe (3×3 and 5×5), Sokoban, rock-paper-scissors
//! - **Session**: participant identity, turn checks, per-channel registry
//! - **Adapter**: line-oriented terminal front end with idle timeout
//! - **Config**: TOML bot settings
//!
//! # Example
//!
//! ```
//! use chezzi_games::{Action, GameResult, Participant, Seats, Session, TicTacToe, Variant};
//!
//! let seats = Seats::pair(
//!     Participant::member("1", "ana"),
//!     Participant::member("2", "ben"),
//! )?;
//! let mut session = Session::new("general", seats, TicTacToe::new(Variant::Classic));
//! let ana = Participant::member("1", "ana");
//! let result = session.apply_action(&ana, Action::Place { row: 1, col: 1 })?;
//! assert_eq!(result, GameResult::Pending);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod adapter;
mod config;
pub mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{BotConfig, ConfigError};

// Crate-level exports - Session management
pub use session::{ChannelId, Session, SessionError, SessionManager};

// Crate-level exports - Engine vocabulary
pub use games::action::{Action, Illegal, MoveError};
pub use games::any_game::AnyGame;
pub use games::board::{Board, Coord, Direction, Glyph, OutOfBounds};
pub use games::phases::GameResult;
pub use games::players::{Participant, Seat, SeatError, Seats};
pub use games::rules::RuleSet;

// Crate-level exports - Games
pub use games::rps::{Hand, RockPaperScissors};
pub use games::sokoban::{Level, LevelError, LevelRegistry, Sokoban, Tile};
pub use games::tictactoe::{Mark, Square, TicTacToe, Variant};
