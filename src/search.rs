use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::queue::PriorityQueue;
use crate::state::{State, GOAL_KEY};
use crate::traits::heuristic::{Heuristic, HeuristicKind};
use crate::util::reconstruct_path;

/// Outcome of one search call. `path` runs goal-first back to the initial
/// key and is empty when the frontier drained without reaching the goal.
/// `expanded_nodes` counts states newly admitted into the frontier.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub path: Vec<String>,
    pub elapsed: Duration,
    pub expanded_nodes: usize,
}

impl SearchReport {
    pub fn solved(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Explores the state space level by level, so the first time the goal is
/// dequeued the path to it uses the fewest possible moves.
pub fn breadth_first_search(initial_state: &State) -> SearchReport {
    let start = Instant::now();
    let mut expanded_nodes = 0;

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut predecessors: FxHashMap<String, Option<String>> = FxHashMap::default();
    let mut queue: VecDeque<State> = VecDeque::new();

    visited.insert(initial_state.key().to_string());
    predecessors.insert(initial_state.key().to_string(), None);
    queue.push_back(initial_state.clone());

    while let Some(current) = queue.pop_front() {
        if current.is_goal() {
            return SearchReport {
                path: reconstruct_path(GOAL_KEY, &predecessors),
                elapsed: start.elapsed(),
                expanded_nodes,
            };
        }

        for neighbour in current.neighbors() {
            if visited.insert(neighbour.key().to_string()) {
                expanded_nodes += 1;
                predecessors.insert(
                    neighbour.key().to_string(),
                    Some(current.key().to_string()),
                );
                queue.push_back(neighbour);
            }
        }
    }

    SearchReport {
        path: Vec::new(),
        elapsed: start.elapsed(),
        expanded_nodes,
    }
}

/// Always expands the frontier state with the smallest Manhattan estimate,
/// ignoring path cost. Fast, but the result is not guaranteed shortest.
pub fn greedy_best_first_search(initial_state: &State) -> SearchReport {
    let start = Instant::now();
    let mut expanded_nodes = 0;

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut predecessors: FxHashMap<String, Option<String>> = FxHashMap::default();
    let mut open_set = PriorityQueue::new();

    visited.insert(initial_state.key().to_string());
    predecessors.insert(initial_state.key().to_string(), None);
    open_set.push(initial_state.clone(), initial_state.manhattan() as f32);

    while let Ok((_, current)) = open_set.pop() {
        if current.is_goal() {
            return SearchReport {
                path: reconstruct_path(GOAL_KEY, &predecessors),
                elapsed: start.elapsed(),
                expanded_nodes,
            };
        }

        for neighbour in current.neighbors() {
            if visited.insert(neighbour.key().to_string()) {
                expanded_nodes += 1;
                predecessors.insert(
                    neighbour.key().to_string(),
                    Some(current.key().to_string()),
                );
                let priority = neighbour.manhattan() as f32;
                open_set.push(neighbour, priority);
            }
        }
    }

    SearchReport {
        path: Vec::new(),
        elapsed: start.elapsed(),
        expanded_nodes,
    }
}

/// Orders the frontier by f = g + h. With an admissible heuristic the
/// returned path has minimum move count. The heuristic is selected by
/// name; unrecognized names fall back to plain Manhattan.
pub fn astar_search(initial_state: &State, heuristic: &str) -> SearchReport {
    let start = Instant::now();
    let kind = HeuristicKind::from_name(heuristic);
    let mut expanded_nodes = 0;

    let mut closed: FxHashSet<String> = FxHashSet::default();
    let mut predecessors: FxHashMap<String, Option<String>> = FxHashMap::default();
    let mut g_score: FxHashMap<String, u32> = FxHashMap::default();
    let mut open_set = PriorityQueue::new();

    g_score.insert(initial_state.key().to_string(), 0);
    predecessors.insert(initial_state.key().to_string(), None);
    open_set.push(initial_state.clone(), initial_state.get_heuristic(kind));

    while let Ok((_, current)) = open_set.pop() {
        // Stale lazy-deletion leftovers surface here once their state
        // has already been closed.
        if !closed.insert(current.key().to_string()) {
            continue;
        }

        if current.is_goal() {
            return SearchReport {
                path: reconstruct_path(GOAL_KEY, &predecessors),
                elapsed: start.elapsed(),
                expanded_nodes,
            };
        }

        // Every queued state has a recorded g.
        let current_g = g_score[current.key()];

        for neighbour in current.neighbors() {
            if closed.contains(neighbour.key()) {
                continue;
            }

            let tentative_g = current_g + 1;
            let improved = g_score
                .get(neighbour.key())
                .map_or(true, |&g| tentative_g < g);

            if improved {
                expanded_nodes += 1;
                g_score.insert(neighbour.key().to_string(), tentative_g);
                let f = tentative_g as f32 + neighbour.get_heuristic(kind);
                predecessors.insert(
                    neighbour.key().to_string(),
                    Some(current.key().to_string()),
                );
                open_set.push(neighbour, f);
            }
        }
    }

    SearchReport {
        path: Vec::new(),
        elapsed: start.elapsed(),
        expanded_nodes,
    }
}
