//! Greedy action selection

use std::sync::Arc;

use log::trace;
use rand::RngCore;

use super::{checked_row, Policy};
use crate::{value_table::ValueTable, Result};

/// Greedy policy
///
/// Selects the feasible action with the highest value for the state. Actions
/// outside the feasible set are masked to negative infinity and can never be
/// chosen, even if they hold the largest value in the row. Ties go to the
/// lowest action index.
#[derive(Debug, Clone)]
pub struct GreedyPolicy {
    table: Arc<ValueTable>,
}

impl GreedyPolicy {
    /// Creates a new greedy policy over `table`
    pub fn new(table: Arc<ValueTable>) -> Self {
        GreedyPolicy { table }
    }
}

/// Index of the best unmasked entry, lowest index first on ties
///
/// NaN values rank below every number.
fn masked_argmax(masked: &[f64], feasible: &[bool]) -> Option<usize> {
    let beats = |a: f64, b: f64| match (a.is_nan(), b.is_nan()) {
        (false, true) => true,
        (true, _) => false,
        (false, false) => a > b,
    };

    let mut best: Option<usize> = None;
    for action in (0..masked.len()).filter(|&a| feasible[a]) {
        match best {
            Some(b) if !beats(masked[action], masked[b]) => {}
            _ => best = Some(action),
        }
    }
    best
}

impl Policy for GreedyPolicy {
    fn select_with_rng(
        &self,
        state: usize,
        feasible_actions: Option<&[usize]>,
        _rng: &mut dyn RngCore,
    ) -> Result<(usize, f64)> {
        let row = checked_row(&self.table, state, feasible_actions)?;

        let (masked, feasible) = match feasible_actions {
            None => (row.to_vec(), vec![true; row.len()]),
            Some(actions) => {
                let mut masked = vec![f64::NEG_INFINITY; row.len()];
                let mut feasible = vec![false; row.len()];
                for &a in actions {
                    masked[a] = row[a];
                    feasible[a] = true;
                }
                (masked, feasible)
            }
        };

        // checked_row guarantees at least one feasible action
        let action = masked_argmax(&masked, &feasible).unwrap_or_default();

        trace!("Greedy policy chose action {} in state {}", action, state);
        Ok((action, row[action]))
    }

    fn value_table(&self) -> &Arc<ValueTable> {
        &self.table
    }

    fn clone_box(&self) -> Box<dyn Policy> {
        Box::new(self.clone())
    }
}
