pub mod queue;
pub mod search;
pub mod state;
pub mod traits;
pub mod util;


pub use queue::PriorityQueue;
pub use search::{astar_search, breadth_first_search, greedy_best_first_search, SearchReport};
pub use state::{Board, PuzzleError, State, GOAL_CELLS, GOAL_KEY};
pub use traits::display::DebugPrintable;
pub use traits::heuristic::{Heuristic, HeuristicKind};
pub use util::{is_solvable, move_between, moves_string, reconstruct_path, scramble, Direction};
