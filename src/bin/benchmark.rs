use std::fs;

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use eight_puzzle_solver::{
    astar_search, breadth_first_search, greedy_best_first_search, Board, SearchReport, State,
};

const NUM_RUNS: usize = 5;

// The canonical 26-move board used for cross-algorithm comparison.
const BENCHMARK_CELLS: [[u8; 3]; 3] = [[8, 6, 7], [2, 5, 4], [3, 0, 1]];

#[derive(Serialize)]
struct AlgorithmStats {
    algorithm: String,
    avg_time: f64,
    avg_nodes: f64,
    path_lengths: Vec<usize>,
    avg_path_length: f64,
}

#[derive(Serialize)]
struct Metadata {
    initial_state: String,
    version: String,
}

#[derive(Serialize)]
struct BenchmarkLog {
    timestamp: String,
    results: Vec<AlgorithmStats>,
    metadata: Metadata,
}

fn run_benchmark(
    name: &str,
    algorithm: &dyn Fn(&State) -> SearchReport,
    initial_state: &State,
) -> AlgorithmStats {
    let bar = ProgressBar::new(NUM_RUNS as u64);
    bar.set_style(
        ProgressStyle::with_template("{msg:32} [{bar:30}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    bar.set_message(name.to_string());

    let mut total_time = 0.0;
    let mut total_nodes = 0usize;
    let mut path_lengths = Vec::with_capacity(NUM_RUNS);

    for _ in 0..NUM_RUNS {
        let result = algorithm(initial_state);
        total_time += result.elapsed.as_secs_f64();
        total_nodes += result.expanded_nodes;
        path_lengths.push(result.moves());
        bar.inc(1);
    }
    bar.finish();

    AlgorithmStats {
        algorithm: name.to_string(),
        avg_time: total_time / NUM_RUNS as f64,
        avg_nodes: total_nodes as f64 / NUM_RUNS as f64,
        avg_path_length: path_lengths.iter().sum::<usize>() as f64 / path_lengths.len() as f64,
        path_lengths,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::new(BENCHMARK_CELLS)?;
    let initial_state = State::new(board);

    let algorithms: Vec<(&str, Box<dyn Fn(&State) -> SearchReport>)> = vec![
        ("breadth_first_search", Box::new(|s| breadth_first_search(s))),
        (
            "greedy_best_first_search",
            Box::new(|s| greedy_best_first_search(s)),
        ),
        (
            "astar_search_manhattan",
            Box::new(|s| astar_search(s, "manhattan")),
        ),
        (
            "astar_search_manhattanPenality",
            Box::new(|s| astar_search(s, "manhattanPenality")),
        ),
        (
            "astar_search_euclidean",
            Box::new(|s| astar_search(s, "euclidean")),
        ),
    ];

    let mut results = Vec::new();
    for (name, algorithm) in &algorithms {
        let stats = run_benchmark(name, algorithm.as_ref(), &initial_state);
        println!(
            "{}: avg {:.4}s, {:.0} nodes expanded, {:.0} moves",
            name, stats.avg_time, stats.avg_nodes, stats.avg_path_length
        );
        results.push(stats);
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let log = BenchmarkLog {
        timestamp: timestamp.clone(),
        results,
        metadata: Metadata {
            initial_state: initial_state.key().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    let log_file = format!("benchmark_log_{}.json", timestamp);
    fs::write(&log_file, serde_json::to_string_pretty(&log)?)?;
    println!("results saved to {}", log_file);

    Ok(())
}
