//! Move path enumeration for validating move generation.
//!
//! Counts are checked against published tables, so every rule the generator
//! gets wrong shows up as a node mismatch at some depth.

use std::ops::AddAssign;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, MoveOutcome, Square};

/// Leaf counts broken down by move type. Everything except `nodes` describes
/// the moves played at the last ply only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerftStats {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub promotions: u64,
    /// Includes checkmates
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftStats {
    fn leaf(outcome: MoveOutcome) -> Self {
        PerftStats {
            nodes: 1,
            captures: u64::from(outcome.capture),
            en_passants: u64::from(outcome.en_passant),
            promotions: u64::from(outcome.promotion),
            checks: u64::from(outcome.check),
            checkmates: u64::from(outcome.checkmate),
        }
    }
}

impl AddAssign for PerftStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passants += rhs.en_passants;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

impl Board {
    /// Number of distinct legal move sequences of `depth` plies, `color`
    /// moving first. Depth 0 counts the current position once.
    pub fn perft(&mut self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.move_count() as u64;
        }

        let mut nodes = 0;
        for (origin, destination) in moves.moves() {
            self.apply_generated_move(origin, destination);
            nodes += self.perft(color.opponent(), depth - 1);
            self.take_back();
        }
        nodes
    }

    /// Like [`Board::perft`] but also classifies the moves at the last ply.
    pub fn perft_stats(&mut self, color: Color, depth: usize) -> PerftStats {
        if depth == 0 {
            return PerftStats {
                nodes: 1,
                ..PerftStats::default()
            };
        }

        let mut stats = PerftStats::default();
        let moves = self.legal_moves(color);
        for (origin, destination) in moves.moves() {
            let outcome = self.apply_generated_move(origin, destination);
            if depth == 1 {
                stats += PerftStats::leaf(outcome);
            } else {
                stats += self.perft_stats(color.opponent(), depth - 1);
            }
            self.take_back();
        }
        stats
    }

    /// Node count below each root move, in generation order.
    pub fn perft_divide(&mut self, color: Color, depth: usize) -> Vec<(Square, Square, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let moves = self.legal_moves(color);
        let mut divided = Vec::with_capacity(moves.move_count());
        for (origin, destination) in moves.moves() {
            self.apply_generated_move(origin, destination);
            let nodes = self.perft(color.opponent(), depth - 1);
            self.take_back();

            #[cfg(feature = "logging")]
            log::debug!("{origin}{destination}: {nodes}");

            divided.push((origin, destination, nodes));
        }
        divided
    }

    /// [`Board::perft_stats`] with root moves shared out over `threads`
    /// workers, each on its own copy of the board. `threads` of 0 is treated
    /// as 1.
    #[must_use]
    pub fn parallel_perft(&self, color: Color, depth: usize, threads: usize) -> PerftStats {
        if depth == 0 {
            return PerftStats {
                nodes: 1,
                ..PerftStats::default()
            };
        }

        let mut root = self.clone();
        let root_moves: Vec<(Square, Square)> = root.legal_moves(color).moves().collect();
        let workers = threads.max(1).min(root_moves.len().max(1));
        let next = AtomicUsize::new(0);
        let total = Mutex::new(PerftStats::default());

        #[cfg(feature = "logging")]
        log::debug!(
            "parallel perft depth {depth}: {} root moves over {workers} workers",
            root_moves.len()
        );

        std::thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    let mut board = self.clone();
                    let mut local = PerftStats::default();
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(&(origin, destination)) = root_moves.get(i) else {
                            break;
                        };
                        let outcome = board.apply_generated_move(origin, destination);
                        if depth == 1 {
                            local += PerftStats::leaf(outcome);
                        } else {
                            local += board.perft_stats(color.opponent(), depth - 1);
                        }
                        board.take_back();
                    }
                    *total.lock() += local;
                });
            }
        });

        total.into_inner()
    }
}
