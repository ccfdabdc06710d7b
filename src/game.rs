//! The tic-tac-toe game engine
//!
//! [`TicTacToe`] is a small state machine: it starts `Ongoing`, stays there for
//! every move that neither wins nor fills the board, and moves into a terminal
//! state (`Won` or `Drawn`) on the move that ends the game. The terminal state is
//! absorbing: every further [`play`](TicTacToe::play) fails with
//! [`TicTacToeError::GameOver`] until [`reset`](TicTacToe::reset) is called.

use std::fmt;

use log::{debug, trace};

use crate::{board::Board, config::GameConfig, Result, TicTacToeError};

/// Outcome of a single move
///
/// `game_over` is always `is_win || is_draw`, and a move is never both a win and
/// a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    symbol: char,
    is_win: bool,
    is_draw: bool,
}

impl MoveResult {
    /// A move that left the game running
    pub fn ongoing(symbol: char) -> Self {
        MoveResult {
            symbol,
            is_win: false,
            is_draw: false,
        }
    }

    /// A move that completed a line for `symbol`
    pub fn win(symbol: char) -> Self {
        MoveResult {
            symbol,
            is_win: true,
            is_draw: false,
        }
    }

    /// A move that filled the board without a winner
    pub fn draw(symbol: char) -> Self {
        MoveResult {
            symbol,
            is_win: false,
            is_draw: true,
        }
    }

    /// Symbol of the player who just moved
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// True if the move won the game
    pub fn is_win(&self) -> bool {
        self.is_win
    }

    /// True if the move ended the game in a draw
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True if no further move is possible
    pub fn game_over(&self) -> bool {
        self.is_win || self.is_draw
    }
}

/// State of the game as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves can still be played
    Ongoing,
    /// The given symbol completed a line
    Won(char),
    /// The board filled up without a winner
    Drawn,
}

impl GameStatus {
    /// Returns true for `Won` and `Drawn`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// An N×N game of tic-tac-toe between two symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    board: Board,
    players: [char; 2],
    current_player: usize,
    status: GameStatus,
}

impl TicTacToe {
    /// Creates a new game on an empty `n`×`n` board
    ///
    /// Fails with a validation error if `n < 3`, if the two symbols are equal,
    /// or if `initial_player` is neither of them.
    pub fn new(n: usize, player_1: char, player_2: char, initial_player: char) -> Result<Self> {
        let config = GameConfig::default()
            .with_size(n)
            .with_players(player_1, player_2)
            .with_initial_player(initial_player);
        Self::from_config(&config)
    }

    /// Creates a new game from a configuration
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let current_player = config.player_index(config.initial_player)?;

        Ok(TicTacToe {
            board: Board::new(config.size),
            players: [config.player_1, config.player_2],
            current_player,
            status: GameStatus::Ongoing,
        })
    }

    /// Clears the board and hands the first move to `initial_player`
    ///
    /// On a validation error the game is left untouched.
    pub fn reset(&mut self, initial_player: char) -> Result<()> {
        let current_player = self.player_index(initial_player)?;

        self.board.clear();
        self.current_player = current_player;
        self.status = GameStatus::Ongoing;
        debug!("Game reset, '{}' to move", initial_player);
        Ok(())
    }

    /// Places the current player's symbol at `index`
    ///
    /// The turn passes to the other player only if the game is still running
    /// after the move.
    pub fn play(&mut self, index: usize) -> Result<MoveResult> {
        if self.status.is_terminal() {
            return Err(TicTacToeError::GameOver);
        }

        let max = self.total_possible_moves() - 1;
        match self.board.cell(index) {
            None => return Err(TicTacToeError::InvalidMove { index, max }),
            Some(Some(_)) => return Err(TicTacToeError::CellOccupied { index }),
            Some(None) => {}
        }

        let symbol = self.current_player_symbol();
        self.board.place(index, symbol);
        trace!(
            "'{}' played {} at {:?}",
            symbol,
            index,
            self.board.coordinates(index)
        );

        let result = self.evaluate(symbol);
        if result.game_over() {
            debug!("Game over: {:?}", self.status);
        } else {
            self.current_player = 1 - self.current_player;
        }

        Ok(result)
    }

    fn evaluate(&mut self, symbol: char) -> MoveResult {
        if self.board.has_line(symbol) {
            self.status = GameStatus::Won(symbol);
            MoveResult::win(symbol)
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
            MoveResult::draw(symbol)
        } else {
            MoveResult::ongoing(symbol)
        }
    }

    fn player_index(&self, symbol: char) -> Result<usize> {
        self.players
            .iter()
            .position(|&p| p == symbol)
            .ok_or_else(|| {
                TicTacToeError::Validation(format!(
                    "initial player should be either '{}' or '{}', got '{symbol}'",
                    self.players[0], self.players[1]
                ))
            })
    }

    /// Indices of the empty cells, or nothing once the game is over
    pub fn available_moves(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// The board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Number of cells, which is also the size of the action space
    pub fn total_possible_moves(&self) -> usize {
        self.board.len()
    }

    /// The two player symbols in order
    pub fn players(&self) -> [char; 2] {
        self.players
    }

    /// Index (0 or 1) of the player to move
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Symbol of the player to move
    ///
    /// After the game ends this is the player who made the last move.
    pub fn current_player_symbol(&self) -> char {
        self.players[self.current_player]
    }

    /// Symbol of the player not currently to move
    pub fn alternate_player_symbol(&self) -> char {
        self.players[1 - self.current_player]
    }

    /// Current state of the game
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has been won or drawn
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
