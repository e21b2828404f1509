pub mod heuristic {
    use crate::state::State;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum HeuristicKind {
        Manhattan,
        ManhattanPenalty,
        Euclidean,
    }

    impl HeuristicKind {
        /// Resolves a selector name; unrecognized names fall back to plain
        /// Manhattan. `manhattanPenality` keeps its historical spelling.
        pub fn from_name(name: &str) -> Self {
            match name {
                "manhattan" => HeuristicKind::Manhattan,
                "manhattanPenality" => HeuristicKind::ManhattanPenalty,
                "euclidean" => HeuristicKind::Euclidean,
                _ => HeuristicKind::Manhattan,
            }
        }
    }

    pub trait Heuristic {
        fn get_heuristic(&self, kind: HeuristicKind) -> f32;
    }

    impl Heuristic for State {
        fn get_heuristic(&self, kind: HeuristicKind) -> f32 {
            match kind {
                HeuristicKind::Manhattan => self.manhattan() as f32,
                HeuristicKind::ManhattanPenalty => self.manhattan_penalty() as f32,
                HeuristicKind::Euclidean => self.euclidean(),
            }
        }
    }
}

pub mod display {
    use colored::Colorize;

    use crate::state::State;

    pub trait DebugPrintable {
        fn debug_print(&self, show_distance: bool);
    }

    impl DebugPrintable for State {
        fn debug_print(&self, show_distance: bool) {
            print!("┌");
            for col in 0..3 {
                print!("───");
                if col < 2 {
                    print!("┬");
                }
            }
            println!("┐");

            for row in 0..3 {
                print!("│");
                for col in 0..3 {
                    let value = self.board().get(row, col);
                    if show_distance {
                        print!(" {} ", self.tile_distance(row, col));
                    } else if value == 0 {
                        print!(" {} ", " ".green());
                    } else {
                        print!(" {} ", value);
                    }
                    print!("│");
                }
                println!();

                if row < 2 {
                    print!("├");
                    for col in 0..3 {
                        print!("───");
                        if col < 2 {
                            print!("┼");
                        }
                    }
                    println!("┤");
                }
            }

            print!("└");
            for col in 0..3 {
                print!("───");
                if col < 2 {
                    print!("┴");
                }
            }
            println!("┘");
        }
    }
}
