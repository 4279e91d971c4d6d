use std::fmt;

use crate::game::{Direction, GameState};

/// What the agent answers for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shift row (RIGHT/LEFT) or column (UP/DOWN) `offset`.
    Push { offset: usize, direction: Direction },
    /// Walk the given non-empty sequence of steps.
    Move(Vec<Direction>),
    Pass,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Push { offset, direction } => write!(f, "PUSH {offset} {direction}"),
            Action::Move(steps) if steps.is_empty() => f.write_str("PASS"),
            Action::Move(steps) => {
                f.write_str("MOVE")?;
                for step in steps {
                    write!(f, " {step}")?;
                }
                Ok(())
            }
            Action::Pass => f.write_str("PASS"),
        }
    }
}

/// Universal interface for labyrinth agents.
pub trait Agent {
    /// Choose the action for this turn. `state.turn` says whether a push or a
    /// move is expected.
    fn select_action(&mut self, state: &GameState) -> Action;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
