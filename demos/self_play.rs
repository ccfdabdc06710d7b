//! Self-play example for the tic-tac-toe environment
//!
//! Two epsilon-greedy policies share one value table and play a handful of
//! episodes through `TicTacToeEnv`. The table is all zeros, so each side takes
//! the lowest free cell unless it decides to explore. O explores more often
//! than X.
//!
//! Run with `RUST_LOG=debug` to see resets and game endings.

use std::{collections::HashMap, sync::Arc};

use tictactoe_rl::{
    EpsilonGreedyPolicy, GameConfig, Policy, TicTacToeEnv, TicTacToeError, ValueTable,
};

const EPISODES: usize = 5;

fn main() -> Result<(), TicTacToeError> {
    // Initialize logging
    env_logger::init();

    println!("Tic-Tac-Toe Self-Play Example");
    println!("=============================");
    println!();

    let mut env = TicTacToeEnv::new(GameConfig::default())?;

    let num_states = env.observation_space_size().ok_or_else(|| {
        TicTacToeError::Validation("board too large for a dense value table".to_string())
    })?;
    let table = Arc::new(ValueTable::zeros(num_states, env.action_space_size())?);

    let mut policies: HashMap<char, Box<dyn Policy>> = HashMap::new();
    policies.insert('X', Box::new(EpsilonGreedyPolicy::new(Arc::clone(&table), 0.2)?));
    policies.insert('O', Box::new(EpsilonGreedyPolicy::new(Arc::clone(&table), 0.6)?));

    let mut totals: HashMap<char, f64> = HashMap::new();

    for episode in 1..=EPISODES {
        let (_, info) = env.reset()?;
        let mut player = info.current_player;

        loop {
            let state = env.state_index().unwrap_or_default();
            let feasible = env.game().available_moves();
            let policy = policies.get(&player).ok_or_else(|| {
                TicTacToeError::Validation(format!("no policy for player '{player}'"))
            })?;

            let (action, _) = policy.select(state, Some(feasible.as_slice()))?;
            let step = env.step(action)?;

            if step.done {
                println!("Episode {episode}:");
                println!("{}", env.render());
                for (symbol, reward) in &step.rewards {
                    *totals.entry(*symbol).or_default() += reward;
                }
                if step.info.result.is_win() {
                    println!("Player {} wins!\n", step.info.result.symbol());
                } else {
                    println!("The game is a draw!\n");
                }
                break;
            }
            player = step.info.player;
        }
    }

    println!("Total rewards after {EPISODES} episodes: {totals:?}");
    Ok(())
}
