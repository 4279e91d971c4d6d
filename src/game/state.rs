use super::{Direction, Grid, Player, Position};

/// Which action the protocol expects this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnType {
    Push,
    Move,
}

/// Where an item currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemLocation {
    OnBoard(Position),
    /// On the tile `Player` is holding, waiting for that player's next push.
    Held(Player),
}

impl ItemLocation {
    pub fn position(self) -> Option<Position> {
        match self {
            ItemLocation::OnBoard(pos) => Some(pos),
            ItemLocation::Held(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub location: ItemLocation,
    pub owner: Player,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    pub item_name: String,
    pub owner: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInfo {
    /// Quest cards still to collect, hidden and revealed
    pub cards: u32,
    pub position: Position,
}

/// Everything the agent knows about one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub turn: TurnType,
    pub grid: Grid,
    pub players: [PlayerInfo; 2],
    pub items: Vec<Item>,
    pub quests: Vec<Quest>,
}

impl GameState {
    pub fn player(&self, player: Player) -> &PlayerInfo {
        &self.players[player.id()]
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// On-board items `player` still needs: named by one of their quests
    /// and owned by them.
    pub fn active_items(&self, player: Player) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.owner == player)
            .filter(|item| matches!(item.location, ItemLocation::OnBoard(_)))
            .filter(|item| {
                self.quests
                    .iter()
                    .any(|q| q.owner == player && q.item_name == item.name)
            })
            .collect()
    }

    /// Positions of [`GameState::active_items`], for use as search targets
    pub fn active_targets(&self, player: Player) -> Vec<Position> {
        self.active_items(player)
            .into_iter()
            .filter_map(|item| item.location.position())
            .collect()
    }

    /// Apply a push by `pusher` and return the resulting state.
    ///
    /// Tiles shift via [`Grid::shift_line`]. Players and on-board items on the
    /// line move one cell with wrap-around. Items on the pusher's held tile
    /// land on the inserted edge cell, since that tile is the one going in.
    pub fn push(&self, offset: usize, direction: Direction, pusher: Player) -> GameState {
        let grid = self.grid.shift_line(offset, direction, pusher);
        let entry = self.grid.insertion_cell(offset, direction);

        let players = self.players.map(|info| PlayerInfo {
            position: self.grid.shifted(info.position, offset, direction),
            ..info
        });

        let items = self
            .items
            .iter()
            .map(|item| {
                let location = match item.location {
                    ItemLocation::OnBoard(pos) => {
                        ItemLocation::OnBoard(self.grid.shifted(pos, offset, direction))
                    }
                    ItemLocation::Held(holder) if holder == pusher => ItemLocation::OnBoard(entry),
                    held => held,
                };
                Item {
                    location,
                    ..item.clone()
                }
            })
            .collect();

        GameState {
            turn: self.turn,
            grid,
            players,
            items,
            quests: self.quests.clone(),
        }
    }
}
