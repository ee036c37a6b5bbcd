//! Reserve stack - bounded LIFO of pieces the player set aside
//!
//! Unlike the queue it is never refilled; it may sit empty or partially full.

use crate::error::StackError;
use crate::types::Piece;

#[derive(Debug, Clone)]
pub struct ReserveStack {
    /// Bottom-to-top; the last element is the top.
    pieces: Vec<Piece>,
    capacity: usize,
}

impl ReserveStack {
    /// Create an empty stack.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "reserve stack capacity must be positive");
        Self {
            pieces: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.len() == self.capacity
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full);
        }
        self.pieces.push(piece);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Piece, StackError> {
        self.pieces.pop().ok_or(StackError::Empty)
    }

    pub fn top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    /// Piece `depth` positions below the top (0 is the top)
    pub fn get(&self, depth: usize) -> Option<&Piece> {
        let idx = self.pieces.len().checked_sub(depth + 1)?;
        self.pieces.get(idx)
    }

    pub fn get_mut(&mut self, depth: usize) -> Option<&mut Piece> {
        let idx = self.pieces.len().checked_sub(depth + 1)?;
        self.pieces.get_mut(idx)
    }

    /// Top-to-bottom iteration
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u64) -> Piece {
        Piece::new(PieceKind::T, id)
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = ReserveStack::new(3);
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        assert_eq!(stack.top().map(|p| p.id), Some(2));
        assert_eq!(stack.pop(), Ok(piece(2)));
        assert_eq!(stack.pop(), Ok(piece(1)));
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_push_full_has_no_effect() {
        let mut stack = ReserveStack::new(2);
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.push(piece(3)), Err(StackError::Full));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let mut stack = ReserveStack::new(3);
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        let ids: Vec<u64> = stack.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
        assert_eq!(stack.get(0).map(|p| p.id), Some(2));
        assert_eq!(stack.get(2).map(|p| p.id), Some(0));
        assert!(stack.get(3).is_none());
    }

    #[test]
    fn test_get_on_empty() {
        let mut stack = ReserveStack::new(1);
        assert!(stack.get(0).is_none());
        assert!(stack.get_mut(0).is_none());
        assert!(stack.top().is_none());
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        let _ = ReserveStack::new(0);
    }
}
