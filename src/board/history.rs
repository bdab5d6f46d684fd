use super::{CastlingRights, Color, Move, Piece, Square};

/// Plies the undo stack reserves up front.
const INITIAL_CAPACITY: usize = 128;

/// State `make_move` cannot recompute when the move is taken back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UndoRecord {
    pub(crate) mv: Move,
    pub(crate) captured: Option<(Color, Piece)>,
    /// Square of the pawn an en passant capture removed
    pub(crate) en_passant_victim: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) ply: u32,
}

/// One record per committed ply, newest last.
#[derive(Clone, Debug)]
pub(crate) struct UndoStack {
    records: Vec<UndoRecord>,
}

impl UndoStack {
    pub(crate) fn new() -> Self {
        UndoStack {
            records: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, record: UndoRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<UndoRecord> {
        self.records.pop()
    }

    pub(crate) fn last(&self) -> Option<&UndoRecord> {
        self.records.last()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        UndoStack::new()
    }
}
