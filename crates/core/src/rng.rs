//! RNG module - random piece kinds and sequential piece ids
//!
//! Every generated piece gets the next id from a single counter and a kind
//! drawn uniformly from [`PieceKind::ALL`]. The kind source is injectable so
//! tests can fix the sequence; ids never depend on it.
//!
//! Also provides a simple LCG for deterministic testing.

use tracing::trace;

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits; the low bits of an LCG have short periods.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Source of piece kinds for the generator.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

impl<F> KindSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

/// Sequential-id piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator<R> {
    /// Id handed to the next piece
    next_id: u64,
    /// Kind source
    source: R,
}

impl<R: KindSource> PieceGenerator<R> {
    /// Create a generator whose first piece has id 0
    pub fn new(source: R) -> Self {
        Self { next_id: 0, source }
    }

    /// Produce the next piece.
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted; ids are never reused.
    pub fn next_piece(&mut self) -> Piece {
        let id = self.next_id;
        self.next_id = id.checked_add(1).expect("piece id space exhausted");
        let piece = Piece::new(self.source.next_kind(), id);
        trace!(id = piece.id, kind = piece.kind.as_str(), "generated piece");
        piece
    }

    /// Id the next generated piece will carry
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of pieces generated so far
    pub fn generated(&self) -> u64 {
        self.next_id
    }
}
