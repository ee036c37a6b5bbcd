//! Piece queue - fixed-capacity circular buffer of upcoming pieces
//!
//! Storage is allocated once at construction and reused circularly: a
//! dequeue only advances `front`, nothing is shifted.

use crate::error::QueueError;
use crate::types::Piece;

#[derive(Debug, Clone)]
pub struct PieceQueue {
    slots: Box<[Option<Piece>]>,
    /// Slot index of the front element
    front: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "piece queue capacity must be positive");
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Number of free slots
    pub fn vacancies(&self) -> usize {
        self.capacity() - self.len
    }

    fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % self.capacity()
    }

    /// Append a piece at the back
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full);
        }
        let back = self.slot(self.len);
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let piece = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = self.slot(1);
        self.len -= 1;
        Ok(piece)
    }

    /// Peek at the front piece
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Piece at `offset` positions behind the front
    pub fn get(&self, offset: usize) -> Option<&Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot(offset)].as_ref()
    }

    /// Mutable access to the piece at `offset` positions behind the front
    pub fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        let idx = self.slot(offset);
        self.slots[idx].as_mut()
    }

    /// Front-to-back iteration
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.slots[self.slot(offset)].as_ref())
    }
}
