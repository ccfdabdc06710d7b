//! # tictactoe-rl
//!
//! A generalized N×N tic-tac-toe engine together with a small family of
//! action-selection policies driven by a precomputed value table (a "Q table").
//!
//! The crate is split into two independent halves that only meet in the
//! [`env`] adapter:
//!
//! - The game engine ([`TicTacToe`]) owns the board, validates moves, alternates
//!   turns and detects wins and draws.
//! - The policies ([`RandomPolicy`], [`GreedyPolicy`], [`EpsilonGreedyPolicy`])
//!   pick an action index for a state index by reading a shared, read-only
//!   [`ValueTable`]. They know nothing about boards.
//!
//! ## Playing a game
//!
//! ```
//! use tictactoe_rl::{TicTacToe, TicTacToeError};
//!
//! fn main() -> Result<(), TicTacToeError> {
//!     let mut game = TicTacToe::new(3, 'X', 'O', 'X')?;
//!
//!     // X takes the top row while O plays in the middle row
//!     for index in [0, 3, 1, 4] {
//!         let result = game.play(index)?;
//!         assert!(!result.game_over());
//!     }
//!
//!     let result = game.play(2)?;
//!     assert_eq!(result.symbol(), 'X');
//!     assert!(result.is_win());
//!
//!     // The game is over until it is reset
//!     assert!(matches!(game.play(8), Err(TicTacToeError::GameOver)));
//!     Ok(())
//! }
//! ```
//!
//! ## Selecting actions
//!
//! ```
//! use std::sync::Arc;
//! use tictactoe_rl::{GreedyPolicy, EpsilonGreedyPolicy, Policy, ValueTable};
//!
//! fn main() -> tictactoe_rl::Result<()> {
//!     let table = Arc::new(ValueTable::from_rows(vec![
//!         vec![0.5, 0.9, 0.9, 0.1],
//!         vec![0.0, 0.0, 0.0, 1.0],
//!     ])?);
//!
//!     // Ties are broken towards the lowest action index
//!     let greedy = GreedyPolicy::new(Arc::clone(&table));
//!     assert_eq!(greedy.select(0, None)?, (1, 0.9));
//!
//!     // Infeasible actions are never chosen, whatever their value
//!     assert_eq!(greedy.select(1, Some(&[0, 2]))?, (0, 0.0));
//!
//!     // With epsilon = 0 the epsilon-greedy policy never explores
//!     let policy = EpsilonGreedyPolicy::new(table, 0.0)?;
//!     assert_eq!(policy.select(0, None)?, (1, 0.9));
//!     Ok(())
//! }
//! ```
//!
//! ## Environment adapter
//!
//! [`TicTacToeEnv`] turns the engine into a reset/step episode interface with
//! string observations and per-player rewards, suitable for driving a training
//! loop that fills a [`ValueTable`]. See `demos/self_play.rs` for a complete
//! driver:
//!
//! ```bash
//! cargo run --example self_play
//! ```

pub mod board;
pub mod config;
pub mod env;
pub mod game;
pub mod policy;
pub mod value_table;

pub use board::Board;
pub use config::GameConfig;
pub use env::{ResetInfo, Step, StepInfo, TicTacToeEnv};
pub use game::{GameStatus, MoveResult, TicTacToe};
pub use policy::{EpsilonGreedyPolicy, GreedyPolicy, Policy, RandomPolicy};
pub use value_table::ValueTable;

/// Error types for the game engine and the policies
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TicTacToeError {
    /// Bad construction or reset arguments, or an out-of-range epsilon
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// The move index does not address a cell on the board
    #[error("Invalid move {index}: index should be between 0 and {max}")]
    InvalidMove {
        /// The rejected move index
        index: usize,
        /// The largest valid move index
        max: usize,
    },

    /// The target cell already holds a symbol
    #[error("Invalid move {index}: cell already occupied")]
    CellOccupied {
        /// The rejected move index
        index: usize,
    },

    /// A move was attempted after the game reached a terminal state
    #[error("Game is over, reset the game to play again")]
    GameOver,

    /// Bad input to a policy, such as an empty feasible-action set
    #[error("Invalid policy input: {0}")]
    Input(String),
}

/// Result type for engine and policy operations
pub type Result<T> = std::result::Result<T, TicTacToeError>;
