//! Leaf-node counting over the legal move tree.

use log::debug;

use crate::board::{Board, Move};

impl Board {
    /// Count leaf positions `depth` plies below this one.
    ///
    /// Walks the tree with make/undo on this board, which ends unchanged.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.generate_moves() {
            if self.make_move(mv) {
                nodes += self.perft(depth - 1);
                self.undo_move();
            }
        }
        nodes
    }

    /// Same count as [`Board::perft`], but each child is searched on a fresh
    /// copy of the position instead of being taken back.
    #[must_use]
    pub fn perft_copying(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for mv in self.generate_moves() {
            let mut child = self.clone();
            if child.make_move(mv) {
                nodes += child.perft_copying(depth - 1);
            }
        }
        nodes
    }

    /// Per-move leaf counts at `depth`, in generation order.
    ///
    /// The counts sum to `perft(depth)`. Depth 0 has no moves to divide.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let mut divided = Vec::new();
        for mv in self.generate_moves() {
            if self.make_move(mv) {
                let nodes = self.perft(depth - 1);
                self.undo_move();
                debug!("{mv}: {nodes}");
                divided.push((mv, nodes));
            }
        }
        divided
    }
}
