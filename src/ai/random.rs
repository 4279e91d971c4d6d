use crate::game::{GameState, Player, TurnType};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::{Action, Agent};
use super::policy::all_pushes;

/// An agent that pushes a random line and takes a random single step.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Action {
        match state.turn {
            TurnType::Push => {
                let pushes = all_pushes(state.size());
                let (offset, direction) = pushes[self.rng.random_range(0..pushes.len())];
                Action::Push { offset, direction }
            }
            TurnType::Move => {
                let pos = state.player(Player::Me).position;
                let steps: Vec<_> = state.grid.neighbors(pos).map(|(dir, _)| dir).collect();
                if steps.is_empty() {
                    Action::Pass
                } else {
                    Action::Move(vec![steps[self.rng.random_range(0..steps.len())]])
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{sample_state, Position};

    #[test]
    fn test_random_agent_pushes_valid_lines() {
        let mut agent = RandomAgent::with_seed(9);
        let state = sample_state();

        for _ in 0..100 {
            match agent.select_action(&state) {
                Action::Push { offset, direction } => {
                    assert!(offset < state.size(), "offset {offset} {direction}");
                }
                other => panic!("expected a push, got {other}"),
            }
        }
    }

    #[test]
    fn test_random_agent_steps_through_open_corridors() {
        let mut agent = RandomAgent::new();
        let mut state = sample_state();
        state.turn = TurnType::Move;
        let pos = state.player(Player::Me).position;

        for _ in 0..50 {
            match agent.select_action(&state) {
                Action::Move(steps) => {
                    assert_eq!(steps.len(), 1);
                    assert!(state.grid.connected(pos, steps[0]));
                }
                other => panic!("expected a move, got {other}"),
            }
        }
    }

    #[test]
    fn test_random_agent_passes_when_walled_in() {
        let mut agent = RandomAgent::new();
        let mut state = sample_state();
        state.turn = TurnType::Move;
        state.players[0].position = Position::new(2, 2);
        assert_eq!(agent.select_action(&state), Action::Pass);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
