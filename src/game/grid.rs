use std::fmt;

use super::{Direction, Player, Position, Tile};

/// Square board of tiles plus the tile each player holds off-grid.
///
/// A `Grid` is never modified after construction: [`Grid::shift_line`]
/// returns a fresh copy, so speculative pushes can fan out from one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
    held: [Tile; 2],
}

impl Grid {
    /// Build a grid from row-major tiles.
    pub fn new(size: usize, tiles: Vec<Tile>, held: [Tile; 2]) -> Self {
        assert_eq!(
            tiles.len(),
            size * size,
            "a {size}x{size} grid needs {} tiles",
            size * size
        );
        Grid { size, tiles, held }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.size + pos.x as usize)
        } else {
            None
        }
    }

    /// Tile at `pos`, or `None` off-grid
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Tile currently held by `player`
    pub fn held(&self, player: Player) -> Tile {
        self.held[player.id()]
    }

    pub fn row(&self, y: usize) -> &[Tile] {
        &self.tiles[y * self.size..(y + 1) * self.size]
    }

    pub fn column(&self, x: usize) -> Vec<Tile> {
        (0..self.size).map(|y| self.tiles[y * self.size + x]).collect()
    }

    /// Whether a walker can step from `pos` toward `dir`: both tiles must
    /// open onto each other.
    pub fn connected(&self, pos: Position, dir: Direction) -> bool {
        let (Some(from), Some(to)) = (self.get(pos), self.get(pos + dir)) else {
            return false;
        };
        from.can_go(dir) && to.can_go(dir.opposite())
    }

    /// Neighbours reachable in one step, in `Direction::ALL` order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.connected(pos, dir))
            .map(move |dir| (dir, pos + dir))
    }

    /// Cell where the pushed-in tile lands for a push of line `offset`
    /// toward `dir`.
    pub fn insertion_cell(&self, offset: usize, dir: Direction) -> Position {
        let last = self.size as i32 - 1;
        let offset = offset as i32;
        match dir {
            Direction::Right => Position::new(0, offset),
            Direction::Left => Position::new(last, offset),
            Direction::Down => Position::new(offset, 0),
            Direction::Up => Position::new(offset, last),
        }
    }

    /// True if `pos` lies on the line a push of `offset` toward `dir` moves.
    pub fn on_line(&self, pos: Position, offset: usize, dir: Direction) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let coord = if dir.is_horizontal() { pos.y } else { pos.x };
        coord == offset as i32
    }

    /// Where an entity at `pos` ends up after the push. Positions on the line
    /// wrap around the board; everything else stays put.
    pub fn shifted(&self, pos: Position, offset: usize, dir: Direction) -> Position {
        if !self.on_line(pos, offset, dir) {
            return pos;
        }
        let size = self.size as i32;
        let moved = pos + dir;
        Position::new(moved.x.rem_euclid(size), moved.y.rem_euclid(size))
    }

    /// Indices of the line's cells, ordered along the direction of travel.
    fn line_indices(&self, offset: usize, dir: Direction) -> Vec<usize> {
        let start = self.insertion_cell(offset, dir);
        (0..self.size as i32)
            .map(|step| {
                let (dx, dy) = dir.delta();
                let pos = Position::new(start.x + dx * step, start.y + dy * step);
                pos.y as usize * self.size + pos.x as usize
            })
            .collect()
    }

    /// Shift row or column `offset` one cell toward `dir`, inserting the
    /// tile `pusher` holds. The tile falling off the far edge becomes the
    /// pusher's new held tile.
    pub fn shift_line(&self, offset: usize, dir: Direction, pusher: Player) -> Grid {
        debug_assert!(offset < self.size, "offset {offset} out of range");
        let line = self.line_indices(offset, dir);
        let mut tiles = self.tiles.clone();
        let mut held = self.held;

        let ejected = self.tiles[line[line.len() - 1]];
        for i in (1..line.len()).rev() {
            tiles[line[i]] = self.tiles[line[i - 1]];
        }
        tiles[line[0]] = self.held[pusher.id()];
        held[pusher.id()] = ejected;

        Grid {
            size: self.size,
            tiles,
            held,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            let row: Vec<String> = self.row(y).iter().map(Tile::to_string).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn tile(pattern: &str) -> Tile {
        pattern.parse().unwrap()
    }

    pub(crate) fn sample_grid() -> Grid {
        let rows = [
            "0110", "1011", "0111", //
            "1110", "1100", "1001", //
            "1101", "0011", "0000",
        ];
        let tiles = rows.iter().map(|p| tile(p)).collect();
        Grid::new(3, tiles, [tile("0001"), tile("0010")])
    }

    #[test]
    fn test_get_tile() {
        let g = sample_grid();
        assert_eq!(g.get(Position::new(0, 0)), Some(tile("0110")));
        assert_eq!(g.get(Position::new(2, 2)), Some(tile("0000")));
        assert_eq!(g.get(Position::new(3, 0)), None);
        assert_eq!(g.get(Position::new(-1, 1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample_grid().to_string(),
            "0110 1011 0111\n1110 1100 1001\n1101 0011 0000\n"
        );
    }

    #[test]
    fn test_connected_requires_both_openings() {
        let g = sample_grid();
        assert!(g.connected(Position::new(0, 0), Direction::Right));
        // (0,1) opens right but (1,1) has no left opening
        assert!(!g.connected(Position::new(0, 1), Direction::Right));
        // off the edge
        assert!(!g.connected(Position::new(0, 0), Direction::Left));
    }

    #[test]
    fn test_neighbors_in_direction_order() {
        let g = sample_grid();
        let n: Vec<_> = g.neighbors(Position::new(0, 0)).collect();
        assert_eq!(
            n,
            vec![
                (Direction::Right, Position::new(1, 0)),
                (Direction::Down, Position::new(0, 1)),
            ]
        );
    }

    #[test]
    fn test_shift_row_right() {
        let g = sample_grid();
        let shifted = g.shift_line(1, Direction::Right, Player::Me);
        assert_eq!(
            shifted.to_string(),
            "0110 1011 0111\n0001 1110 1100\n1101 0011 0000\n"
        );
        assert_eq!(shifted.held(Player::Me), tile("1001"));
        assert_eq!(shifted.held(Player::Opponent), g.held(Player::Opponent));
        // input untouched
        assert_eq!(g.row(1)[0], tile("1110"));
    }

    #[test]
    fn test_shift_column_up_uses_pushers_tile() {
        let g = sample_grid();
        let shifted = g.shift_line(2, Direction::Up, Player::Opponent);
        let col: Vec<String> = shifted.column(2).iter().map(Tile::to_string).collect();
        assert_eq!(col, vec!["1001", "0000", "0010"]);
        assert_eq!(shifted.held(Player::Opponent), tile("0111"));
        assert_eq!(shifted.held(Player::Me), g.held(Player::Me));
    }

    #[test]
    fn test_shift_then_opposite_restores_line() {
        let g = sample_grid();
        for dir in Direction::ALL {
            for offset in 0..3 {
                let there = g.shift_line(offset, dir, Player::Me);
                let back = there.shift_line(offset, dir.opposite(), Player::Me);
                if dir.is_horizontal() {
                    assert_eq!(back.row(offset), g.row(offset), "{dir} {offset}");
                } else {
                    assert_eq!(back.column(offset), g.column(offset), "{dir} {offset}");
                }
            }
        }
    }

    #[test]
    fn test_shifted_wraps() {
        let g = sample_grid();
        assert_eq!(
            g.shifted(Position::new(1, 2), 1, Direction::Down),
            Position::new(1, 0)
        );
        assert_eq!(
            g.shifted(Position::new(0, 1), 1, Direction::Left),
            Position::new(2, 1)
        );
        // off the line
        assert_eq!(
            g.shifted(Position::new(0, 0), 1, Direction::Left),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_insertion_cell() {
        let g = sample_grid();
        assert_eq!(g.insertion_cell(1, Direction::Right), Position::new(0, 1));
        assert_eq!(g.insertion_cell(1, Direction::Left), Position::new(2, 1));
        assert_eq!(g.insertion_cell(2, Direction::Down), Position::new(2, 0));
        assert_eq!(g.insertion_cell(2, Direction::Up), Position::new(2, 2));
    }
}
