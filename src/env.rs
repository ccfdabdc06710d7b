//! Episode interface over the game engine
//!
//! [`TicTacToeEnv`] wraps a [`TicTacToe`] game in the reset/step shape used by
//! reinforcement-learning loops: each step takes an action index, plays it and
//! reports the new observation, a reward for each player and whether the
//! episode is done.
//!
//! Rewards are +1 for the winner and -1 for the loser, 0.5 each on a draw and 0
//! for both players on every other move.

use std::collections::HashMap;

use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::EMPTY_CELL,
    config::GameConfig,
    game::{MoveResult, TicTacToe},
    Result, TicTacToeError,
};

/// Reward for the player who completes a line
pub const WIN_REWARD: f64 = 1.0;
/// Reward for the player who lost
pub const LOSS_REWARD: f64 = -1.0;
/// Reward for each player when the board fills without a winner
pub const DRAW_REWARD: f64 = 0.5;

/// Information returned alongside the first observation of an episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetInfo {
    /// Symbol of the first player
    pub player_1: char,
    /// Symbol of the second player
    pub player_2: char,
    /// Symbol of the player to move
    pub current_player: char,
}

/// Information returned alongside each step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    /// Symbol of the player to move after this step
    ///
    /// Once the episode is done this is the player who made the final move.
    pub player: char,
    /// Outcome of the move
    pub result: MoveResult,
}

/// Everything produced by a single [`TicTacToeEnv::step`]
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Observation after the move
    pub observation: String,
    /// Reward for each player symbol
    pub rewards: HashMap<char, f64>,
    /// True once the game has been won or drawn
    pub done: bool,
    /// Always false: episodes only end by winning or drawing
    pub truncated: bool,
    /// Extra information about the move
    pub info: StepInfo,
}

/// Reset/step environment around a game of tic-tac-toe
#[derive(Debug, Clone)]
pub struct TicTacToeEnv {
    config: GameConfig,
    game: TicTacToe,
}

fn normalized(symbol: char) -> String {
    symbol.to_lowercase().collect()
}

impl TicTacToeEnv {
    /// Creates a new environment
    ///
    /// Besides the usual game validation, the player symbols must stay distinct
    /// from each other and from the empty-cell placeholder once lowercased, so
    /// observations are unambiguous.
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = TicTacToe::from_config(&config)?;

        let placeholder = normalized(EMPTY_CELL);
        let (p1, p2) = (normalized(config.player_1), normalized(config.player_2));
        if p1 == placeholder || p2 == placeholder {
            return Err(TicTacToeError::Validation(format!(
                "player symbols must differ from the empty-cell placeholder '{EMPTY_CELL}'"
            )));
        }
        if p1 == p2 {
            return Err(TicTacToeError::Validation(format!(
                "player symbols '{}' and '{}' are indistinguishable in observations",
                config.player_1, config.player_2
            )));
        }

        Ok(TicTacToeEnv { config, game })
    }

    /// Starts a new episode
    pub fn reset(&mut self) -> Result<(String, ResetInfo)> {
        self.game.reset(self.config.initial_player)?;

        let info = ResetInfo {
            player_1: self.config.player_1,
            player_2: self.config.player_2,
            current_player: self.game.current_player_symbol(),
        };
        Ok((self.observation(), info))
    }

    /// Plays `action` for the player to move
    ///
    /// Engine errors (occupied cell, out-of-range action, finished game) are
    /// returned unchanged.
    pub fn step(&mut self, action: usize) -> Result<Step> {
        let result = self.game.play(action)?;

        let mut rewards = HashMap::new();
        rewards.insert(self.game.current_player_symbol(), 0.0);
        rewards.insert(self.game.alternate_player_symbol(), 0.0);

        if result.is_win() {
            let loser = self
                .game
                .players()
                .into_iter()
                .find(|&p| p != result.symbol())
                .unwrap_or(result.symbol());
            rewards.insert(result.symbol(), WIN_REWARD);
            rewards.insert(loser, LOSS_REWARD);
            debug!("Episode won by '{}'", result.symbol());
        } else if result.is_draw() {
            rewards.values_mut().for_each(|r| *r = DRAW_REWARD);
            debug!("Episode drawn");
        }

        Ok(Step {
            observation: self.observation(),
            rewards,
            done: result.game_over(),
            truncated: false,
            info: StepInfo {
                player: self.game.current_player_symbol(),
                result,
            },
        })
    }

    /// The flattened board as a lowercase string, with `.` for empty cells
    pub fn observation(&self) -> String {
        self.game
            .board()
            .cells()
            .iter()
            .flat_map(|cell| cell.unwrap_or(EMPTY_CELL).to_lowercase())
            .collect()
    }

    /// The board read as a base-3 number, most significant digit first
    ///
    /// Empty cells count as 0, the first player's symbol as 1 and the second
    /// player's as 2. Returns `None` if the number does not fit in `usize`.
    pub fn state_index(&self) -> Option<usize> {
        let [p1, _] = self.game.players();
        self.game
            .board()
            .cells()
            .iter()
            .try_fold(0usize, |acc, cell| {
                let digit = match cell {
                    None => 0,
                    Some(symbol) if *symbol == p1 => 1,
                    Some(_) => 2,
                };
                acc.checked_mul(3)?.checked_add(digit)
            })
    }

    /// Number of distinct boards `state_index` can describe, 3^(N²)
    pub fn observation_space_size(&self) -> Option<usize> {
        let cells = u32::try_from(self.game.total_possible_moves()).ok()?;
        3usize.checked_pow(cells)
    }

    /// Number of actions, N²
    pub fn action_space_size(&self) -> usize {
        self.game.total_possible_moves()
    }

    /// Picks a uniformly random legal action
    pub fn sample_action<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        self.game
            .available_moves()
            .choose(rng)
            .copied()
            .ok_or(TicTacToeError::GameOver)
    }

    /// ASCII rendering of the board
    pub fn render(&self) -> String {
        self.game.to_string()
    }

    /// The underlying game
    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    /// The configuration the environment was built with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
