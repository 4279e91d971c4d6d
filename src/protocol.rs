//! Line protocol with the referee: parse one turn of input into a
//! [`GameState`] and write back one action line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::ai::{Action, Agent};
use crate::error::ParseError;
use crate::game::{
    GameState, Grid, Item, ItemLocation, Player, PlayerInfo, Position, Quest, Tile, TurnType,
};

/// Whitespace tokenizer that only pulls lines from `reader` when it runs
/// out of tokens, so it never blocks on input of a turn not yet sent.
pub struct Parser<R> {
    reader: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Parser {
            reader,
            tokens: VecDeque::new(),
        }
    }

    /// Buffer at least one token. Returns false at end of input.
    fn fill(&mut self) -> Result<bool, ParseError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(true)
    }

    pub fn next_word(&mut self) -> Result<String, ParseError> {
        if !self.fill()? {
            return Err(ParseError::UnexpectedEof);
        }
        self.tokens.pop_front().ok_or(ParseError::UnexpectedEof)
    }

    /// Next token as an integer of type `T`; out-of-range values are errors.
    fn next_number<T: FromStr>(&mut self) -> Result<T, ParseError> {
        let token = self.next_word()?;
        token
            .parse()
            .map_err(|_| ParseError::InvalidInt { token })
    }

    pub fn next_int(&mut self) -> Result<i64, ParseError> {
        self.next_number()
    }

    /// Non-negative integer, such as a count
    pub fn next_count(&mut self) -> Result<usize, ParseError> {
        self.next_number()
    }

    pub fn next_tile(&mut self) -> Result<Tile, ParseError> {
        self.next_word()?.parse()
    }

    fn parse_player(&mut self, size: usize) -> Result<(PlayerInfo, Tile), ParseError> {
        let cards: u32 = self.next_number()?;
        let position = Position::new(self.next_number()?, self.next_number()?);
        let tile = self.next_tile()?;
        let on_grid = |c: i32| usize::try_from(c).is_ok_and(|c| c < size);
        if !on_grid(position.x) || !on_grid(position.y) {
            return Err(ParseError::PlayerOffGrid { position, size });
        }
        Ok((PlayerInfo { cards, position }, tile))
    }

    fn parse_item(&mut self) -> Result<Item, ParseError> {
        let name = self.next_word()?;
        let x: i32 = self.next_number()?;
        let y: i32 = self.next_number()?;
        let owner = Player::from_id(self.next_int()?)?;
        // x = -1 / -2: on the held tile of player 0 / 1
        let location = match x {
            -1 => ItemLocation::Held(Player::Me),
            -2 => ItemLocation::Held(Player::Opponent),
            _ => ItemLocation::OnBoard(Position::new(x, y)),
        };
        Ok(Item {
            name,
            location,
            owner,
        })
    }

    fn parse_quest(&mut self) -> Result<Quest, ParseError> {
        let item_name = self.next_word()?;
        let owner = Player::from_id(self.next_int()?)?;
        Ok(Quest { item_name, owner })
    }

    /// Parse everything after the turn type: tiles, both players, items
    /// and quests.
    pub fn parse_state(&mut self, turn: TurnType, size: usize) -> Result<GameState, ParseError> {
        let tiles = (0..size * size)
            .map(|_| self.next_tile())
            .collect::<Result<Vec<_>, _>>()?;
        let (me, my_tile) = self.parse_player(size)?;
        let (opponent, opponent_tile) = self.parse_player(size)?;

        let num_items = self.next_count()?;
        let items = (0..num_items)
            .map(|_| self.parse_item())
            .collect::<Result<Vec<_>, _>>()?;
        let num_quests = self.next_count()?;
        let quests = (0..num_quests)
            .map(|_| self.parse_quest())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameState {
            turn,
            grid: Grid::new(size, tiles, [my_tile, opponent_tile]),
            players: [me, opponent],
            items,
            quests,
        })
    }

    /// Read the next full turn. `Ok(None)` when input ends cleanly between
    /// turns.
    pub fn next_turn(&mut self, size: usize) -> Result<Option<GameState>, ParseError> {
        if !self.fill()? {
            return Ok(None);
        }
        let turn = match self.next_int()? {
            0 => TurnType::Push,
            1 => TurnType::Move,
            other => return Err(ParseError::InvalidTurnType(other)),
        };
        self.parse_state(turn, size).map(Some)
    }
}

/// Write one action line and flush it to the referee.
pub fn write_action<W: Write>(out: &mut W, action: &Action) -> std::io::Result<()> {
    writeln!(out, "{action}")?;
    out.flush()
}

/// Run the turn loop until input ends. Returns the number of turns played.
pub fn play<R: BufRead, W: Write>(
    parser: &mut Parser<R>,
    out: &mut W,
    agent: &mut dyn Agent,
    size: usize,
) -> Result<usize, ParseError> {
    let mut turns = 0;
    while let Some(state) = parser.next_turn(size)? {
        let action = agent.select_action(&state);
        write_action(out, &action)?;
        turns += 1;
    }
    Ok(turns)
}
