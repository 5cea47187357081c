//! Bot-versus-bot games, matchups and round-robin tournaments.
//!
//! The rules engine is synchronous and keeps no shared state, so each game runs on its
//! own thread with its own board lineage. Cancellation is cooperative and checked
//! between plies.

mod cancel;
mod game;
mod matchup;
mod tournament;

pub use cancel::{CancelToken, StopFlag};
pub use game::{play_game, GameRecord, Outcome, Termination};
pub use matchup::{Matchup, MatchupResults, MatchupState};
pub use tournament::{Pairing, Tournament};
