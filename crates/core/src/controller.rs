//! Game controller - the five player actions on top of the queue and reserve
//!
//! Every action checks all of its preconditions before touching anything, so
//! a rejected action leaves both structures exactly as they were. Play and
//! Reserve are the only actions that remove from the queue and the only ones
//! that refill it; swaps exchange positions and keep both lengths.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::ActionError;
use crate::queue::PieceQueue;
use crate::reserve::ReserveStack;
use crate::rng::{KindSource, PieceGenerator, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Piece, QUEUE_CAPACITY, RESERVE_CAPACITY, SWAP_BLOCK};

/// Pieces exchanged by a swap.
///
/// `to_queue` is in front-to-back order of their new queue positions,
/// `to_reserve` in top-to-bottom order of their new reserve positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapReport {
    pub to_queue: ArrayVec<Piece, SWAP_BLOCK>,
    pub to_reserve: ArrayVec<Piece, SWAP_BLOCK>,
}

impl SwapReport {
    pub fn len(&self) -> usize {
        self.to_queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_queue.is_empty()
    }
}

/// Result of a successful action, carrying the pieces involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    UsedReserved(Piece),
    Swapped(SwapReport),
    Inserted(Piece),
    Viewed,
}

/// Owns the queue, the reserve stack and the piece generator.
#[derive(Debug, Clone)]
pub struct GameController<R = SimpleRng> {
    queue: PieceQueue,
    reserve: ReserveStack,
    generator: PieceGenerator<R>,
    /// Seed of the built-in RNG, if one is used
    seed: Option<u32>,
    /// Successful state-changing actions
    actions_applied: u64,
}

impl GameController<SimpleRng> {
    /// Create a game with default capacities and a seeded RNG
    pub fn new(seed: u32) -> Self {
        Self::with_seed(QUEUE_CAPACITY, RESERVE_CAPACITY, seed)
    }

    /// Create a game with custom capacities and a seeded RNG
    pub fn with_seed(queue_capacity: usize, reserve_capacity: usize, seed: u32) -> Self {
        let mut game =
            Self::with_capacities(queue_capacity, reserve_capacity, SimpleRng::new(seed));
        game.seed = Some(seed);
        game
    }
}

impl<R: KindSource> GameController<R> {
    /// Create a game with an arbitrary kind source.
    ///
    /// The queue starts full (ids `0..queue_capacity`), the reserve empty.
    ///
    /// # Panics
    ///
    /// Panics if either capacity is zero.
    pub fn with_capacities(queue_capacity: usize, reserve_capacity: usize, source: R) -> Self {
        let mut game = Self {
            queue: PieceQueue::new(queue_capacity),
            reserve: ReserveStack::new(reserve_capacity),
            generator: PieceGenerator::new(source),
            seed: None,
            actions_applied: 0,
        };
        game.refill();
        debug!(
            queue_capacity,
            reserve_capacity, "game initialized with a full queue"
        );
        game
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve_stack(&self) -> &ReserveStack {
        &self.reserve
    }

    pub fn next_id(&self) -> u64 {
        self.generator.next_id()
    }

    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    pub fn actions_applied(&self) -> u64 {
        self.actions_applied
    }

    /// Generate pieces until the queue is full again; returns how many were added.
    fn refill(&mut self) -> usize {
        let mut added = 0;
        while !self.queue.is_full() {
            let piece = self.generator.next_piece();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
            added += 1;
        }
        added
    }

    fn rejected(action: GameAction, err: ActionError) -> ActionError {
        debug!(action = action.as_str(), error = %err, "action rejected");
        err
    }

    fn applied(&mut self, action: GameAction) {
        self.actions_applied = self.actions_applied.saturating_add(1);
        debug!(
            action = action.as_str(),
            queue_len = self.queue.len(),
            reserve_len = self.reserve.len(),
            "action applied"
        );
    }

    /// Consume the front piece, then refill the queue
    pub fn play(&mut self) -> Result<Piece, ActionError> {
        let piece = self
            .queue
            .dequeue()
            .map_err(|e| Self::rejected(GameAction::Play, e.into()))?;
        self.refill();
        self.applied(GameAction::Play);
        Ok(piece)
    }

    /// Move the front piece onto the reserve stack, then refill the queue
    pub fn reserve(&mut self) -> Result<Piece, ActionError> {
        if self.queue.is_empty() {
            return Err(Self::rejected(GameAction::Reserve, ActionError::QueueEmpty));
        }
        if self.reserve.is_full() {
            return Err(Self::rejected(GameAction::Reserve, ActionError::StackFull));
        }

        let piece = self.queue.dequeue()?;
        self.reserve.push(piece)?;
        self.refill();
        self.applied(GameAction::Reserve);
        Ok(piece)
    }

    /// Consume the top reserved piece. The queue is not touched.
    pub fn use_reserved(&mut self) -> Result<Piece, ActionError> {
        let piece = self
            .reserve
            .pop()
            .map_err(|e| Self::rejected(GameAction::UseReserved, e.into()))?;
        self.applied(GameAction::UseReserved);
        Ok(piece)
    }

    /// Exchange the queue front with the reserve top
    pub fn swap_single(&mut self) -> Result<SwapReport, ActionError> {
        if self.queue.is_empty() {
            return Err(Self::rejected(GameAction::SwapSingle, ActionError::QueueEmpty));
        }
        if self.reserve.is_empty() {
            return Err(Self::rejected(GameAction::SwapSingle, ActionError::StackEmpty));
        }

        let report = self.exchange_block(1);
        self.applied(GameAction::SwapSingle);
        Ok(report)
    }

    /// Exchange the first three queue pieces with the top three reserve pieces.
    ///
    /// Relative order is kept on both sides: the reserve top becomes the new
    /// queue front and the old queue front ends on top of the reserve.
    pub fn swap_triple(&mut self) -> Result<SwapReport, ActionError> {
        if self.queue.len() < SWAP_BLOCK {
            return Err(Self::rejected(
                GameAction::SwapTriple,
                ActionError::InsufficientQueue {
                    needed: SWAP_BLOCK,
                    available: self.queue.len(),
                },
            ));
        }
        if self.reserve.len() < SWAP_BLOCK {
            return Err(Self::rejected(
                GameAction::SwapTriple,
                ActionError::InsufficientStack {
                    needed: SWAP_BLOCK,
                    available: self.reserve.len(),
                },
            ));
        }

        let report = self.exchange_block(SWAP_BLOCK);
        self.applied(GameAction::SwapTriple);
        Ok(report)
    }

    /// Generate one piece and append it at the back of the queue.
    ///
    /// The queue is kept full, so this normally reports `QueueFull`. No id is
    /// consumed on failure.
    pub fn insert(&mut self) -> Result<Piece, ActionError> {
        if self.queue.is_full() {
            return Err(Self::rejected(GameAction::Insert, ActionError::QueueFull));
        }
        let piece = self.generator.next_piece();
        self.queue.enqueue(piece)?;
        self.applied(GameAction::Insert);
        Ok(piece)
    }

    /// Apply a menu action
    pub fn apply(&mut self, action: GameAction) -> Result<Outcome, ActionError> {
        match action {
            GameAction::Play => self.play().map(Outcome::Played),
            GameAction::Reserve => self.reserve().map(Outcome::Reserved),
            GameAction::UseReserved => self.use_reserved().map(Outcome::UsedReserved),
            GameAction::SwapSingle => self.swap_single().map(Outcome::Swapped),
            GameAction::SwapTriple => self.swap_triple().map(Outcome::Swapped),
            GameAction::Insert => self.insert().map(Outcome::Inserted),
            GameAction::View => Ok(Outcome::Viewed),
        }
    }

    /// Swap queue offset `i` with reserve depth `i` for `i < block`.
    ///
    /// Callers must have checked that both sides hold at least `block` pieces.
    fn exchange_block(&mut self, block: usize) -> SwapReport {
        let mut report = SwapReport::default();
        for i in 0..block.min(SWAP_BLOCK) {
            if let (Some(front), Some(top)) = (self.queue.get_mut(i), self.reserve.get_mut(i)) {
                std::mem::swap(front, top);
                report.to_queue.push(*front);
                report.to_reserve.push(*top);
            }
        }
        report
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().copied());
        out.queue_capacity = self.queue.capacity();
        out.reserve.extend(self.reserve.iter().copied());
        out.reserve_capacity = self.reserve.capacity();
        out.next_id = self.generator.next_id();
        out.actions_applied = self.actions_applied;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameController<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn queue_ids<R: KindSource>(game: &GameController<R>) -> Vec<u64> {
        game.queue().iter().map(|p| p.id).collect()
    }

    fn reserve_ids<R: KindSource>(game: &GameController<R>) -> Vec<u64> {
        game.reserve_stack().iter().map(|p| p.id).collect()
    }

    fn all_t() -> impl FnMut() -> PieceKind {
        || PieceKind::T
    }

    #[test]
    fn test_new_game_has_full_queue_and_empty_reserve() {
        let game = GameController::new(12345);
        assert_eq!(queue_ids(&game), vec![0, 1, 2, 3, 4]);
        assert!(game.reserve_stack().is_empty());
        assert_eq!(game.next_id(), 5);
        assert_eq!(game.seed(), Some(12345));
        assert_eq!(game.actions_applied(), 0);
    }

    #[test]
    fn test_play_refills() {
        let mut game = GameController::new(1);
        let played = game.play().unwrap();
        assert_eq!(played.id, 0);
        assert_eq!(queue_ids(&game), vec![1, 2, 3, 4, 5]);
        assert_eq!(game.actions_applied(), 1);
    }

    #[test]
    fn test_reserve_moves_front_and_refills() {
        let mut game = GameController::new(1);
        let front = *game.queue().front().unwrap();
        let reserved = game.reserve().unwrap();
        assert_eq!(reserved, front);
        assert_eq!(game.reserve_stack().top(), Some(&front));
        assert_eq!(queue_ids(&game), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reserve_full_is_rejected_without_change() {
        let mut game = GameController::new(1);
        for _ in 0..3 {
            game.reserve().unwrap();
        }
        let before = game.snapshot();
        assert_eq!(game.reserve(), Err(ActionError::StackFull));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_use_reserved_does_not_touch_queue() {
        let mut game = GameController::new(1);
        game.reserve().unwrap();
        let queue_before = queue_ids(&game);
        let next_id = game.next_id();

        let used = game.use_reserved().unwrap();
        assert_eq!(used.id, 0);
        assert!(game.reserve_stack().is_empty());
        assert_eq!(queue_ids(&game), queue_before);
        assert_eq!(game.next_id(), next_id);
    }

    #[test]
    fn test_use_reserved_empty() {
        let mut game = GameController::new(1);
        assert_eq!(game.use_reserved(), Err(ActionError::StackEmpty));
        assert_eq!(game.actions_applied(), 0);
    }

    #[test]
    fn test_swap_single_exchanges_front_and_top() {
        let mut game = GameController::new(1);
        game.reserve().unwrap(); // reserve: [0], queue: 1..=5
        let report = game.swap_single().unwrap();

        assert_eq!(queue_ids(&game), vec![0, 2, 3, 4, 5]);
        assert_eq!(reserve_ids(&game), vec![1]);
        assert_eq!(report.to_queue.iter().map(|p| p.id).collect::<Vec<_>>(), vec![0]);
        assert_eq!(report.to_reserve.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_swap_single_empty_reserve() {
        let mut game = GameController::new(1);
        assert_eq!(game.swap_single(), Err(ActionError::StackEmpty));
        assert_eq!(queue_ids(&game), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_swap_triple_block_order() {
        let mut game = GameController::new(1);
        for _ in 0..3 {
            game.reserve().unwrap();
        }
        // reserve top-to-bottom: 2, 1, 0; queue: 3..=7
        assert_eq!(reserve_ids(&game), vec![2, 1, 0]);
        assert_eq!(queue_ids(&game), vec![3, 4, 5, 6, 7]);

        let report = game.swap_triple().unwrap();
        assert_eq!(report.len(), 3);
        assert_eq!(queue_ids(&game), vec![2, 1, 0, 6, 7]);
        assert_eq!(reserve_ids(&game), vec![3, 4, 5]);
        assert_eq!(game.next_id(), 8);
    }

    #[test]
    fn test_swap_triple_insufficient_stack() {
        let mut game = GameController::new(1);
        game.reserve().unwrap();
        game.reserve().unwrap();
        let before = game.snapshot();
        assert_eq!(
            game.swap_triple(),
            Err(ActionError::InsufficientStack {
                needed: 3,
                available: 2
            })
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_swap_triple_insufficient_queue() {
        let mut game = GameController::with_capacities(2, 3, all_t());
        for _ in 0..3 {
            game.reserve().unwrap();
        }
        assert_eq!(
            game.swap_triple(),
            Err(ActionError::InsufficientQueue {
                needed: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_insert_on_full_queue_keeps_ids() {
        let mut game = GameController::new(1);
        assert_eq!(game.insert(), Err(ActionError::QueueFull));
        assert_eq!(game.next_id(), 5);
    }

    #[test]
    fn test_action_counter_saturates() {
        let mut game = GameController::new(1);
        game.actions_applied = u64::MAX;
        game.play().unwrap();
        assert_eq!(game.actions_applied(), u64::MAX);
        assert_eq!(game.queue().len(), 5);
    }

    #[test]
    fn test_apply_view_changes_nothing() {
        let mut game = GameController::new(1);
        let before = game.snapshot();
        assert_eq!(game.apply(GameAction::View), Ok(Outcome::Viewed));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut game = GameController::new(1);
        assert!(matches!(game.apply(GameAction::Play), Ok(Outcome::Played(p)) if p.id == 0));
        assert!(matches!(game.apply(GameAction::Reserve), Ok(Outcome::Reserved(p)) if p.id == 1));
        assert!(matches!(
            game.apply(GameAction::SwapSingle),
            Ok(Outcome::Swapped(r)) if r.len() == 1
        ));
        assert!(matches!(
            game.apply(GameAction::UseReserved),
            Ok(Outcome::UsedReserved(p)) if p.id == 2
        ));
        assert_eq!(game.apply(GameAction::UseReserved), Err(ActionError::StackEmpty));
    }

    #[test]
    fn test_scripted_kinds_flow_into_queue() {
        let mut kinds = PieceKind::ALL.into_iter().cycle();
        let game =
            GameController::with_capacities(4, 3, move || kinds.next().unwrap_or(PieceKind::I));
        let queue_kinds: Vec<PieceKind> = game.queue().iter().map(|p| p.kind).collect();
        assert_eq!(queue_kinds, PieceKind::ALL.to_vec());
        assert_eq!(game.seed(), None);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut game = GameController::new(1);
        let mut snap = GameSnapshot::default();
        game.snapshot_into(&mut snap);
        assert_eq!(snap.queue.len(), 5);

        game.reserve().unwrap();
        game.snapshot_into(&mut snap);
        assert_eq!(snap.queue.len(), 5);
        assert_eq!(snap.reserve.len(), 1);
        assert_eq!(snap.reserve_top().map(|p| p.id), Some(0));
        assert_eq!(snap.next_piece().map(|p| p.id), Some(1));
        assert!(snap.queue_full());
    }
}
