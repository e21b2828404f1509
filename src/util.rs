use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::state::{Board, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UP,
    DOWN,
    LEFT,
    RIGHT,
}

impl Direction {
    pub fn to_char(&self) -> char {
        match self {
            Direction::UP => 'U',
            Direction::DOWN => 'D',
            Direction::LEFT => 'L',
            Direction::RIGHT => 'R',
        }
    }
}

/// Walks the predecessor map from the goal key back to the initial state.
/// The returned sequence is goal-first; reverse it for forward display.
pub fn reconstruct_path(
    goal_key: &str,
    predecessors: &FxHashMap<String, Option<String>>,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal_key.to_string());

    while let Some(key) = current {
        current = predecessors.get(&key).and_then(|p| p.clone());
        path.push(key);
    }

    path
}

/// Direction the blank slid to turn `from` into `to`, if the two boards
/// are exactly one legal move apart.
pub fn move_between(from: &Board, to: &Board) -> Option<Direction> {
    let (from_row, from_col) = from.blank_pos();
    let (to_row, to_col) = to.blank_pos();

    let direction = match (
        to_row as i32 - from_row as i32,
        to_col as i32 - from_col as i32,
    ) {
        (-1, 0) => Direction::UP,
        (1, 0) => Direction::DOWN,
        (0, -1) => Direction::LEFT,
        (0, 1) => Direction::RIGHT,
        _ => return None,
    };

    // The slide must not disturb any other tile.
    let mut cells = *from.cells();
    cells[from_row][from_col] = cells[to_row][to_col];
    cells[to_row][to_col] = 0;
    if cells == *to.cells() {
        Some(direction)
    } else {
        None
    }
}

/// Renders a forward-ordered key path as a move string, e.g. "DRRU".
pub fn moves_string(forward_path: &[String]) -> Result<String, PuzzleError> {
    let mut moves = String::new();

    for pair in forward_path.windows(2) {
        let from = Board::from_key(&pair[0])?;
        let to = Board::from_key(&pair[1])?;

        match move_between(&from, &to) {
            Some(direction) => moves.push(direction.to_char()),
            None => {
                return Err(PuzzleError::InvalidBoard(format!(
                    "keys {} and {} are not one slide apart",
                    pair[0], pair[1]
                )))
            }
        }
    }

    Ok(moves)
}

pub fn is_solvable(board: &Board) -> bool {
    let tiles: Vec<u8> = board
        .cells()
        .iter()
        .flatten()
        .copied()
        .filter(|&value| value != 0)
        .collect();

    count_inversions(&tiles) % 2 == 0
}

fn count_inversions(tiles: &[u8]) -> usize {
    let mut inversions = 0;

    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] > tiles[j] {
                inversions += 1;
            }
        }
    }

    inversions
}

/// Shuffles the nine values into a random solvable board. An odd
/// permutation is repaired by swapping two non-blank tiles, which flips
/// the inversion parity.
pub fn scramble<R: Rng>(rng: &mut R) -> Board {
    let mut values: Vec<u8> = (0u8..=8).collect();
    values.shuffle(rng);

    let non_blank: Vec<u8> = values.iter().copied().filter(|&v| v != 0).collect();
    if count_inversions(&non_blank) % 2 == 1 {
        let mut indices: Vec<usize> = (0..values.len()).filter(|&i| values[i] != 0).collect();
        indices.shuffle(rng);
        values.swap(indices[0], indices[1]);
    }

    let mut cells = [[0u8; 3]; 3];
    for (idx, &value) in values.iter().enumerate() {
        cells[idx / 3][idx % 3] = value;
    }

    Board::from_cells_unchecked(cells)
}
