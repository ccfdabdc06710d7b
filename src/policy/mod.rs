//! Action-selection policies over a value table
//!
//! Every policy answers the same question: given a state index and, optionally,
//! the set of actions that are currently feasible, which action should be taken
//! and what is its value in the table?
//!
//! - Random policy: a uniformly random feasible action
//! - Greedy policy: the feasible action with the highest value
//! - Epsilon-greedy policy: random with probability epsilon, greedy otherwise

pub mod epsilon_greedy;
pub mod greedy;
pub mod random;

use std::sync::Arc;

use rand::RngCore;

use crate::{value_table::ValueTable, Result, TicTacToeError};

pub use epsilon_greedy::EpsilonGreedyPolicy;
pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;

/// Trait for policies that select an action for a state
pub trait Policy: Send + Sync {
    /// Selects an action for `state`, drawing any randomness from `rng`
    ///
    /// `feasible_actions` restricts the choice; `None` means every action in the
    /// table is feasible. Returns the chosen action and its value.
    ///
    /// Fails with [`TicTacToeError::Input`] if `feasible_actions` is empty, or if
    /// the state or one of the actions is outside the table.
    fn select_with_rng(
        &self,
        state: usize,
        feasible_actions: Option<&[usize]>,
        rng: &mut dyn RngCore,
    ) -> Result<(usize, f64)>;

    /// Selects an action for `state` using the thread-local RNG
    fn select(&self, state: usize, feasible_actions: Option<&[usize]>) -> Result<(usize, f64)> {
        self.select_with_rng(state, feasible_actions, &mut rand::thread_rng())
    }

    /// The table this policy reads from
    fn value_table(&self) -> &Arc<ValueTable>;

    /// Number of states in the table
    fn num_states(&self) -> usize {
        self.value_table().num_states()
    }

    /// Number of actions in the table
    fn num_actions(&self) -> usize {
        self.value_table().num_actions()
    }

    /// Create a boxed clone of this policy
    fn clone_box(&self) -> Box<dyn Policy>;
}

// Implement Policy for Box<dyn Policy>
impl Policy for Box<dyn Policy> {
    fn select_with_rng(
        &self,
        state: usize,
        feasible_actions: Option<&[usize]>,
        rng: &mut dyn RngCore,
    ) -> Result<(usize, f64)> {
        (**self).select_with_rng(state, feasible_actions, rng)
    }

    fn value_table(&self) -> &Arc<ValueTable> {
        (**self).value_table()
    }

    fn clone_box(&self) -> Box<dyn Policy> {
        (**self).clone_box()
    }
}

impl Clone for Box<dyn Policy> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Looks up the action values for `state` and checks the feasible-action set
/// against the table shape
pub(crate) fn checked_row<'a>(
    table: &'a ValueTable,
    state: usize,
    feasible_actions: Option<&[usize]>,
) -> Result<&'a [f64]> {
    let row = table.row(state).ok_or_else(|| {
        TicTacToeError::Input(format!(
            "state {state} is out of range for a table with {} states",
            table.num_states()
        ))
    })?;

    if let Some(actions) = feasible_actions {
        if actions.is_empty() {
            return Err(TicTacToeError::Input(
                "feasible actions must not be empty".to_string(),
            ));
        }
        if let Some(&action) = actions.iter().find(|&&a| a >= row.len()) {
            return Err(TicTacToeError::Input(format!(
                "action {action} is out of range for a table with {} actions",
                row.len()
            )));
        }
    }

    Ok(row)
}
