use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Direction, GameState, Player, TurnType};

use super::agent::{Action, Agent};
use super::pathfinding::PathFinder;

/// Turn policy settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Rows/columns considered on either side of the player's own line.
    pub push_window: usize,
    /// Identical consecutive pushes allowed before a random one is forced.
    pub stall_limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            push_window: 1,
            stall_limit: 3,
            seed: None,
        }
    }
}

type Push = (usize, Direction);

/// Greedy one-push look-ahead: on push turns pick the push that leaves the
/// player closest to a wanted item, on move turns walk one of the closest
/// paths.
pub struct TurnPolicy {
    config: PolicyConfig,
    finder: PathFinder,
    rng: StdRng,
    last_push: Option<Push>,
    streak: u32,
}

impl TurnPolicy {
    pub fn new(config: PolicyConfig, finder: PathFinder) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        TurnPolicy {
            config,
            finder,
            rng,
            last_push: None,
            streak: 0,
        }
    }

    /// Default settings with a fixed random seed.
    pub fn with_seed(seed: u64) -> Self {
        let config = PolicyConfig {
            seed: Some(seed),
            ..PolicyConfig::default()
        };
        Self::new(config, PathFinder::default())
    }

    /// Pushes worth evaluating: the lines through and beside the player.
    pub fn push_candidates(&self, state: &GameState) -> Vec<Push> {
        let pos = state.player(Player::Me).position;
        let window = self.config.push_window as i64;
        let size = state.size() as i64;

        let mut candidates = Vec::new();
        for direction in Direction::ALL {
            let center = i64::from(if direction.is_horizontal() { pos.y } else { pos.x });
            for offset in (center - window)..=(center + window) {
                if (0..size).contains(&offset) {
                    candidates.push((offset as usize, direction));
                }
            }
        }
        if candidates.is_empty() {
            candidates = all_pushes(state.size());
        }
        candidates
    }

    /// Distance to the nearest wanted item after applying the push.
    pub fn score_push(&self, state: &GameState, offset: usize, direction: Direction) -> u32 {
        let next = state.push(offset, direction, Player::Me);
        let start = next.player(Player::Me).position;
        self.finder
            .search(&next.grid, start, &next.active_targets(Player::Me))
            .distance
            .unwrap_or(u32::MAX)
    }

    fn choose_push(&mut self, state: &GameState) -> Action {
        let scored: Vec<(Push, u32)> = self
            .push_candidates(state)
            .into_iter()
            .map(|(offset, direction)| {
                let score = self.score_push(state, offset, direction);
                tracing::debug!(offset, %direction, score, "push candidate");
                ((offset, direction), score)
            })
            .collect();

        let best_score = scored.iter().map(|&(_, s)| s).min().unwrap_or(u32::MAX);
        let best: Vec<Push> = scored
            .iter()
            .filter(|&&(_, s)| s == best_score)
            .map(|&(push, _)| push)
            .collect();
        let choice = best[self.rng.random_range(0..best.len())];

        let (offset, direction) = self.guard_stall(choice, state.size());
        Action::Push { offset, direction }
    }

    /// Count repeats of the same push and force a different random push once
    /// the streak passes `stall_limit`.
    fn guard_stall(&mut self, choice: Push, size: usize) -> Push {
        if self.last_push == Some(choice) {
            self.streak += 1;
        } else {
            self.last_push = Some(choice);
            self.streak = 1;
        }
        if self.streak <= self.config.stall_limit {
            return choice;
        }

        let others: Vec<Push> = all_pushes(size)
            .into_iter()
            .filter(|&push| push != choice)
            .collect();
        if others.is_empty() {
            return choice;
        }
        let forced = others[self.rng.random_range(0..others.len())];
        tracing::warn!(
            repeated_offset = choice.0,
            repeated_direction = %choice.1,
            forced_offset = forced.0,
            forced_direction = %forced.1,
            "push repeated {} times, forcing a random one",
            self.streak
        );
        self.last_push = Some(forced);
        self.streak = 1;
        forced
    }

    fn choose_move(&mut self, state: &GameState) -> Action {
        let start = state.player(Player::Me).position;
        let targets = state.active_targets(Player::Me);
        let result = self.finder.search(&state.grid, start, &targets);
        tracing::debug!(
            distance = ?result.distance,
            paths = result.paths.len(),
            "move search"
        );

        if result.paths.is_empty() {
            return Action::Pass;
        }
        let mut paths = result.paths;
        let path = paths.swap_remove(self.rng.random_range(0..paths.len()));
        if path.is_empty() {
            Action::Pass
        } else {
            Action::Move(path)
        }
    }
}

impl Agent for TurnPolicy {
    fn select_action(&mut self, state: &GameState) -> Action {
        let action = match state.turn {
            TurnType::Push => self.choose_push(state),
            TurnType::Move => self.choose_move(state),
        };
        tracing::info!(agent = self.name(), %action, "turn decided");
        action
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

/// Every push the rules allow on a `size` board
pub(crate) fn all_pushes(size: usize) -> Vec<Push> {
    Direction::ALL
        .into_iter()
        .flat_map(|direction| (0..size).map(move |offset| (offset, direction)))
        .collect()
}
