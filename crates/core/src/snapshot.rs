use serde::Serialize;

use crate::types::Piece;

/// Read-only view of the game for display.
///
/// `queue` is front-to-back, `reserve` is top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub queue: Vec<Piece>,
    pub queue_capacity: usize,
    pub reserve: Vec<Piece>,
    pub reserve_capacity: usize,
    pub next_id: u64,
    pub actions_applied: u64,
    pub seed: Option<u32>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.queue_capacity = 0;
        self.reserve.clear();
        self.reserve_capacity = 0;
        self.next_id = 0;
        self.actions_applied = 0;
        self.seed = None;
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.queue.first().copied()
    }

    pub fn reserve_top(&self) -> Option<Piece> {
        self.reserve.first().copied()
    }

    pub fn queue_full(&self) -> bool {
        self.queue.len() == self.queue_capacity
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            queue_capacity: 0,
            reserve: Vec::new(),
            reserve_capacity: 0,
            next_id: 0,
            actions_applied: 0,
            seed: None,
        }
    }
}
