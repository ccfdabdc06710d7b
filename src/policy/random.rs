//! Uniformly random action selection

use std::sync::Arc;

use log::trace;
use rand::{seq::SliceRandom, Rng, RngCore};

use super::{checked_row, Policy};
use crate::{value_table::ValueTable, Result, TicTacToeError};

/// Random policy
///
/// This policy samples one of the feasible actions uniformly, ignoring values.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    table: Arc<ValueTable>,
}

impl RandomPolicy {
    /// Creates a new random policy over `table`
    pub fn new(table: Arc<ValueTable>) -> Self {
        RandomPolicy { table }
    }
}

impl Policy for RandomPolicy {
    fn select_with_rng(
        &self,
        state: usize,
        feasible_actions: Option<&[usize]>,
        rng: &mut dyn RngCore,
    ) -> Result<(usize, f64)> {
        let row = checked_row(&self.table, state, feasible_actions)?;

        let action = match feasible_actions {
            Some(actions) => *actions
                .choose(rng)
                .ok_or_else(|| TicTacToeError::Input("no feasible action".to_string()))?,
            None => rng.gen_range(0..row.len()),
        };

        trace!("Random policy chose action {} in state {}", action, state);
        Ok((action, row[action]))
    }

    fn value_table(&self) -> &Arc<ValueTable> {
        &self.table
    }

    fn clone_box(&self) -> Box<dyn Policy> {
        Box::new(self.clone())
    }
}
