//! Configuration options for a game of tic-tac-toe
//!
//! This module defines the parameters used to set up a [`TicTacToe`](crate::TicTacToe)
//! engine or a [`TicTacToeEnv`](crate::TicTacToeEnv).

use crate::{Result, TicTacToeError};

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: usize = 3;

/// Configuration for a game
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use tictactoe_rl::GameConfig;
///
/// let config = GameConfig::default()
///     .with_size(4)
///     .with_players('A', 'B')
///     .with_initial_player('B');
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square board
    ///
    /// Must be at least 3.
    pub size: usize,

    /// Symbol of the first player
    pub player_1: char,

    /// Symbol of the second player
    ///
    /// Must differ from `player_1`.
    pub player_2: char,

    /// Symbol of the player who moves first
    ///
    /// Must be one of `player_1` or `player_2`.
    pub initial_player: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: MIN_BOARD_SIZE,
            player_1: 'X',
            player_2: 'O',
            initial_player: 'X',
        }
    }
}

impl GameConfig {
    /// Sets the board side length
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets both player symbols
    pub fn with_players(mut self, player_1: char, player_2: char) -> Self {
        self.player_1 = player_1;
        self.player_2 = player_2;
        self
    }

    /// Sets the player who moves first
    pub fn with_initial_player(mut self, initial_player: char) -> Self {
        self.initial_player = initial_player;
        self
    }

    /// Checks the configuration, returning a validation error describing the
    /// first problem found
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_BOARD_SIZE {
            return Err(TicTacToeError::Validation(format!(
                "board size should be at least {MIN_BOARD_SIZE}, got {}",
                self.size
            )));
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(TicTacToeError::Validation(format!(
                "board size {} is too large",
                self.size
            )));
        }
        if self.player_1 == self.player_2 {
            return Err(TicTacToeError::Validation(format!(
                "player symbols must differ, both are '{}'",
                self.player_1
            )));
        }
        self.player_index(self.initial_player).map(|_| ())
    }

    /// Returns the index (0 or 1) of `symbol` within the player pair
    pub(crate) fn player_index(&self, symbol: char) -> Result<usize> {
        if symbol == self.player_1 {
            Ok(0)
        } else if symbol == self.player_2 {
            Ok(1)
        } else {
            Err(TicTacToeError::Validation(format!(
                "initial player should be either '{}' or '{}', got '{symbol}'",
                self.player_1, self.player_2
            )))
        }
    }
}
