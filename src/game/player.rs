use crate::error::ParseError;

/// The two seats at the table. `Me` is always the player the agent acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Me,
    Opponent,
}

impl Player {
    /// Protocol id (0 for the agent, 1 for the opponent)
    pub fn id(self) -> usize {
        match self {
            Player::Me => 0,
            Player::Opponent => 1,
        }
    }

    pub fn from_id(id: i64) -> Result<Player, ParseError> {
        match id {
            0 => Ok(Player::Me),
            1 => Ok(Player::Opponent),
            other => Err(ParseError::InvalidPlayerId(other)),
        }
    }
}
