//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond conversions, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces shown to the player |
//! | `RESERVE_CAPACITY` | 3 | Pieces that can be set aside |
//! | `SWAP_BLOCK` | 3 | Block size of the triple swap |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{GameAction, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let piece = Piece::new(PieceKind::L, 7);
//! assert_eq!(piece.to_string(), "[L 7]");
//!
//! assert_eq!(GameAction::from_str("swap3"), Some(GameAction::SwapTriple));
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

use serde::Serialize;

/// Number of upcoming pieces kept in the queue
pub const QUEUE_CAPACITY: usize = 5;

/// Maximum number of pieces in the reserve stack
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces exchanged by a triple swap
pub const SWAP_BLOCK: usize = 3;

/// The four piece kinds handed out by the generator
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in generator order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }

    /// Uppercase letter used on screen
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Human-readable description for the legend
    pub fn describe(&self) -> &'static str {
        match self {
            PieceKind::I => "straight",
            PieceKind::O => "square",
            PieceKind::T => "tee",
            PieceKind::L => "ell",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A generated piece.
///
/// Pieces are immutable once created. The id is unique for the lifetime of
/// the generator that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Player actions understood by the controller
///
/// These actions come from the menu loop; each maps to one controller
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Consume the front piece of the queue
    Play,
    /// Move the front piece of the queue onto the reserve stack
    Reserve,
    /// Consume the top piece of the reserve stack
    UseReserved,
    /// Exchange queue front with reserve top
    SwapSingle,
    /// Exchange the first three queue pieces with the top three reserve pieces
    SwapTriple,
    /// Generate a piece and enqueue it at the back
    Insert,
    /// Show the current state without changing it
    View,
}

impl GameAction {
    /// All actions in menu order.
    pub const ALL: [GameAction; 7] = [
        GameAction::Play,
        GameAction::Reserve,
        GameAction::UseReserved,
        GameAction::SwapSingle,
        GameAction::SwapTriple,
        GameAction::Insert,
        GameAction::View,
    ];

    /// Parse action from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("play"), Some(GameAction::Play));
    /// assert_eq!(GameAction::from_str("useReserved"), Some(GameAction::UseReserved));
    /// assert_eq!(GameAction::from_str("swap"), Some(GameAction::SwapSingle));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "play" => Some(GameAction::Play),
            "reserve" => Some(GameAction::Reserve),
            "use" | "usereserved" => Some(GameAction::UseReserved),
            "swap" | "swapsingle" => Some(GameAction::SwapSingle),
            "swap3" | "swaptriple" => Some(GameAction::SwapTriple),
            "insert" => Some(GameAction::Insert),
            "view" => Some(GameAction::View),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Play => "play",
            GameAction::Reserve => "reserve",
            GameAction::UseReserved => "useReserved",
            GameAction::SwapSingle => "swapSingle",
            GameAction::SwapTriple => "swapTriple",
            GameAction::Insert => "insert",
            GameAction::View => "view",
        }
    }

    /// Menu number for this action (1-based; 0 is reserved for exit)
    pub fn menu_number(&self) -> u8 {
        match self {
            GameAction::Play => 1,
            GameAction::Reserve => 2,
            GameAction::UseReserved => 3,
            GameAction::SwapSingle => 4,
            GameAction::SwapTriple => 5,
            GameAction::Insert => 6,
            GameAction::View => 7,
        }
    }

    /// Inverse of [`GameAction::menu_number`]
    pub fn from_menu_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.menu_number() == n)
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            GameAction::Play => "Play piece (take from the front)",
            GameAction::Reserve => "Reserve piece (front to reserve)",
            GameAction::UseReserved => "Use reserved piece",
            GameAction::SwapSingle => "Swap front with reserve top",
            GameAction::SwapTriple => "Swap first 3 with reserve top 3",
            GameAction::Insert => "Insert new piece (at the back)",
            GameAction::View => "View pieces",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacities() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(RESERVE_CAPACITY, 3);
        assert_eq!(SWAP_BLOCK, 3);
    }

    #[test]
    fn test_piece_kind_roundtrip_names() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(
                PieceKind::from_str(&kind.as_char().to_string()),
                Some(kind)
            );
        }
    }

    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::new(PieceKind::I, 0).to_string(), "[I 0]");
        assert_eq!(Piece::new(PieceKind::O, 42).to_string(), "[O 42]");
    }

    #[test]
    fn test_menu_numbers_are_unique_and_nonzero() {
        for action in GameAction::ALL {
            let n = action.menu_number();
            assert_ne!(n, 0);
            assert_eq!(GameAction::from_menu_number(n), Some(action));
        }
        assert_eq!(GameAction::from_menu_number(0), None);
        assert_eq!(GameAction::from_menu_number(8), None);
    }

    #[test]
    fn test_action_names() {
        for action in GameAction::ALL {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("  PLAY "), Some(GameAction::Play));
    }
}
