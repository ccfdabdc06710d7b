//! Read-only state/action value tables
//!
//! A [`ValueTable`] maps a state index and an action index to a real value.
//! Its shape is fixed once built. Policies hold it behind an `Arc` so one table
//! can back any number of policies without copying.

use crate::{Result, TicTacToeError};

/// A dense `num_states × num_actions` table of values, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct ValueTable {
    values: Vec<f64>,
    num_states: usize,
    num_actions: usize,
}

/// Number of cells in a `num_states × num_actions` table
fn table_len(num_states: usize, num_actions: usize) -> Result<usize> {
    if num_states == 0 || num_actions == 0 {
        return Err(TicTacToeError::Validation(format!(
            "value table must have at least one state and one action, got shape ({num_states}, {num_actions})"
        )));
    }
    num_states.checked_mul(num_actions).ok_or_else(|| {
        TicTacToeError::Validation(format!(
            "value table shape ({num_states}, {num_actions}) is too large"
        ))
    })
}

impl ValueTable {
    /// Creates a table filled with zeros
    pub fn zeros(num_states: usize, num_actions: usize) -> Result<Self> {
        let len = table_len(num_states, num_actions)?;
        Self::from_shape(num_states, num_actions, vec![0.0; len])
    }

    /// Creates a table from one row of action values per state
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let num_states = rows.len();
        let num_actions = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((state, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != num_actions)
        {
            return Err(TicTacToeError::Validation(format!(
                "value table must be 2-dimensional: row {state} has {} actions, expected {num_actions}",
                row.len()
            )));
        }

        Self::from_shape(num_states, num_actions, rows.into_iter().flatten().collect())
    }

    /// Creates a table from a flat row-major buffer
    pub fn from_shape(num_states: usize, num_actions: usize, values: Vec<f64>) -> Result<Self> {
        let len = table_len(num_states, num_actions)?;
        if values.len() != len {
            return Err(TicTacToeError::Validation(format!(
                "value table shape ({num_states}, {num_actions}) needs {len} values, got {}",
                values.len()
            )));
        }

        Ok(ValueTable {
            values,
            num_states,
            num_actions,
        })
    }

    /// Number of states (rows)
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Number of actions (columns)
    pub fn num_actions(&self) -> usize {
        self.num_actions
    }

    /// `(num_states, num_actions)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_states, self.num_actions)
    }

    /// All action values for `state`, or `None` if the state is out of range
    pub fn row(&self, state: usize) -> Option<&[f64]> {
        if state >= self.num_states {
            return None;
        }
        let start = state * self.num_actions;
        Some(&self.values[start..start + self.num_actions])
    }

    /// The value of taking `action` in `state`, or `None` if either is out of range
    pub fn value(&self, state: usize, action: usize) -> Option<f64> {
        if action >= self.num_actions {
            return None;
        }
        self.row(state).map(|row| row[action])
    }
}
