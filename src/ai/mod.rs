mod agent;
pub mod pathfinding;
mod policy;
mod random;

pub use agent::{Action, Agent};
pub use pathfinding::{nearest_paths, Path, PathFinder, PathSearch, SearchConfig, MAX_PATH_LEN};
pub use policy::{PolicyConfig, TurnPolicy};
pub use random::RandomAgent;
