use std::env;
use std::process;

use colored::Colorize;
use eight_puzzle_solver::{
    astar_search, breadth_first_search, greedy_best_first_search, is_solvable, moves_string,
    scramble, Board, DebugPrintable, SearchReport, State,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let board = match args.get(1) {
        Some(key) => match Board::from_key(key) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => scramble(&mut rand::thread_rng()),
    };

    let initial_state = State::new(board);

    println!("{}", "Initial board".bold());
    initial_state.debug_print(false);

    if !is_solvable(initial_state.board()) {
        println!(
            "{}",
            "Board is unsolvable; every search will exhaust the reachable states.".yellow()
        );
    }

    report("Breadth-first", breadth_first_search(&initial_state));
    report("Greedy best-first", greedy_best_first_search(&initial_state));
    report("A* (manhattan)", astar_search(&initial_state, "manhattan"));
    report(
        "A* (manhattanPenality)",
        astar_search(&initial_state, "manhattanPenality"),
    );
    report("A* (euclidean)", astar_search(&initial_state, "euclidean"));
}

fn report(name: &str, result: SearchReport) {
    println!("{}", name.cyan().bold());

    if !result.solved() {
        println!("  no path found");
        println!("  elapsed: {:.4}s", result.elapsed.as_secs_f64());
        println!("  expanded nodes: {}", result.expanded_nodes);
        return;
    }

    let mut forward = result.path.clone();
    forward.reverse();
    let moves = moves_string(&forward).unwrap_or_default();

    println!("  moves: {} ({})", result.moves(), moves);
    println!("  elapsed: {:.4}s", result.elapsed.as_secs_f64());
    println!("  expanded nodes: {}", result.expanded_nodes);
}
