//! Epsilon-greedy action selection
//!
//! The policy owns one random and one greedy policy over the same table and
//! picks between them on every call.

use std::sync::Arc;

use log::debug;
use rand::{Rng, RngCore};

use super::{GreedyPolicy, Policy, RandomPolicy};
use crate::{value_table::ValueTable, Result, TicTacToeError};

/// Epsilon-greedy policy
///
/// With probability `epsilon` the action comes from a [`RandomPolicy`],
/// otherwise from a [`GreedyPolicy`]. Both see the same feasible actions.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tictactoe_rl::{EpsilonGreedyPolicy, ValueTable};
///
/// let table = Arc::new(ValueTable::zeros(4, 9).unwrap());
/// let mut policy = EpsilonGreedyPolicy::new(table, 0.3).unwrap();
///
/// // Decay exploration between episodes
/// policy.set_epsilon(policy.epsilon() * 0.5).unwrap();
/// assert!(policy.set_epsilon(1.5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EpsilonGreedyPolicy {
    explore: RandomPolicy,
    exploit: GreedyPolicy,
    epsilon: f64,
}

fn check_epsilon(epsilon: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&epsilon) {
        Ok(epsilon)
    } else {
        Err(TicTacToeError::Validation(format!(
            "epsilon must be in the range [0, 1], got {epsilon}"
        )))
    }
}

impl EpsilonGreedyPolicy {
    /// Creates a new epsilon-greedy policy over `table`
    ///
    /// Fails with a validation error unless `0 <= epsilon <= 1`.
    pub fn new(table: Arc<ValueTable>, epsilon: f64) -> Result<Self> {
        let epsilon = check_epsilon(epsilon)?;
        Ok(EpsilonGreedyPolicy {
            explore: RandomPolicy::new(Arc::clone(&table)),
            exploit: GreedyPolicy::new(table),
            epsilon,
        })
    }

    /// Probability of taking a random action
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Changes the exploration probability
    ///
    /// The old value is kept if `epsilon` is out of range.
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        self.epsilon = check_epsilon(epsilon)?;
        Ok(())
    }
}

impl Policy for EpsilonGreedyPolicy {
    fn select_with_rng(
        &self,
        state: usize,
        feasible_actions: Option<&[usize]>,
        rng: &mut dyn RngCore,
    ) -> Result<(usize, f64)> {
        if rng.gen::<f64>() < self.epsilon {
            debug!("Exploring in state {}", state);
            self.explore.select_with_rng(state, feasible_actions, rng)
        } else {
            debug!("Exploiting in state {}", state);
            self.exploit.select_with_rng(state, feasible_actions, rng)
        }
    }

    fn value_table(&self) -> &Arc<ValueTable> {
        self.exploit.value_table()
    }

    fn clone_box(&self) -> Box<dyn Policy> {
        Box::new(self.clone())
    }
}
