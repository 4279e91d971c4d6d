use std::cmp::Ordering;

use crate::game::{Direction, Grid, Position};

/// Longest walk the search will consider.
pub const MAX_PATH_LEN: usize = 20;

pub type Path = Vec<Direction>;

/// Outcome of a connectivity search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSearch {
    /// Closest Manhattan distance to any destination reached by the
    /// returned paths. `None` when no destination lies on the grid.
    pub distance: Option<u32>,
    /// Every explored path ending at `distance`, in exploration order.
    pub paths: Vec<Path>,
}

impl PathSearch {
    fn no_target() -> Self {
        PathSearch {
            distance: None,
            paths: vec![Vec::new()],
        }
    }
}

/// Connectivity search settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: MAX_PATH_LEN,
        }
    }
}

/// One level of the explicit DFS stack.
struct Frame {
    pos: Position,
    next_dir: usize,
}

/// Depth-bounded search for the walks that get closest to a set of targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    max_depth: usize,
}

impl PathFinder {
    pub fn new(max_depth: usize) -> Self {
        PathFinder { max_depth }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.max_depth)
    }

    /// Find every simple path from `start` (at most `max_depth` steps) that
    /// ends as close as any explored path gets to one of `destinations`.
    ///
    /// Steps follow open corridors only and never revisit a cell of the same
    /// path; a path may pass through one destination on its way to another.
    /// When the depth bound cuts the maze off, the closest paths found are
    /// still returned.
    pub fn search(&self, grid: &Grid, start: Position, destinations: &[Position]) -> PathSearch {
        let targets: Vec<Position> = destinations
            .iter()
            .copied()
            .filter(|&p| grid.contains(p))
            .collect();
        if targets.is_empty() {
            return PathSearch::no_target();
        }
        let distance_to_targets = |pos: Position| {
            targets
                .iter()
                .map(|&t| pos.dist(t))
                .min()
                .unwrap_or(u32::MAX)
        };

        let mut best = u32::MAX;
        let mut paths: Vec<Path> = Vec::new();
        let mut path: Path = Vec::with_capacity(self.max_depth);

        let root_distance = distance_to_targets(start);
        record(root_distance, &path, &mut best, &mut paths);
        if root_distance == 0 || !grid.contains(start) {
            return PathSearch {
                distance: Some(best),
                paths,
            };
        }

        let size = grid.size();
        let cell = |p: Position| p.y as usize * size + p.x as usize;
        let mut visited = vec![false; size * size];
        visited[cell(start)] = true;
        let mut stack = vec![Frame {
            pos: start,
            next_dir: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let pos = frame.pos;
            let Some(&dir) = Direction::ALL.get(frame.next_dir) else {
                stack.pop();
                visited[cell(pos)] = false;
                path.pop();
                continue;
            };
            frame.next_dir += 1;

            if path.len() >= self.max_depth || !grid.connected(pos, dir) {
                continue;
            }
            let next = pos + dir;
            if visited[cell(next)] {
                continue;
            }

            path.push(dir);
            let distance = distance_to_targets(next);
            record(distance, &path, &mut best, &mut paths);
            if path.len() == self.max_depth {
                path.pop();
                continue;
            }
            visited[cell(next)] = true;
            stack.push(Frame {
                pos: next,
                next_dir: 0,
            });
        }

        tracing::trace!(
            start = %start,
            distance = best,
            paths = paths.len(),
            "connectivity search finished"
        );
        PathSearch {
            distance: Some(best),
            paths,
        }
    }
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(MAX_PATH_LEN)
    }
}

/// Keep `path` if it ties the best distance; restart the set if it beats it.
fn record(distance: u32, path: &[Direction], best: &mut u32, paths: &mut Vec<Path>) {
    match distance.cmp(best) {
        Ordering::Less => {
            *best = distance;
            paths.clear();
            paths.push(path.to_vec());
        }
        Ordering::Equal => paths.push(path.to_vec()),
        Ordering::Greater => {}
    }
}

/// [`PathFinder::search`] with the default depth bound, returning only the paths.
pub fn nearest_paths(grid: &Grid, start: Position, destinations: &[Position]) -> Vec<Path> {
    PathFinder::default()
        .search(grid, start, destinations)
        .paths
}
