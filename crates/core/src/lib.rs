//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece queue, the reserve stack and the controller
//! that moves pieces between them. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed (or scripted kind source) produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run behind any front end (terminal menu, tests, benches)
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular buffer of upcoming pieces
//! - [`reserve`]: bounded LIFO of set-aside pieces
//! - [`rng`]: seeded LCG, injectable kind source and sequential id generator
//! - [`controller`]: the player actions and their atomicity rules
//! - [`snapshot`]: read-only view for display
//! - [`error`]: queue, stack and action errors
//!
//! # Game Rules
//!
//! - **Lookahead**: the queue always shows `QUEUE_CAPACITY` pieces between actions
//! - **Refill**: only Play and Reserve remove from the queue, and only they refill it
//! - **Reserve**: never refilled; may be empty or partially full
//! - **Swaps**: exchange positions, never change either length
//! - **Atomicity**: a rejected action changes nothing
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{ActionError, GameController};
//!
//! let mut game = GameController::new(12345);
//!
//! let played = game.play().unwrap();
//! assert_eq!(played.id, 0);
//! assert_eq!(game.queue().len(), 5);
//!
//! game.reserve().unwrap();
//! game.swap_single().unwrap();
//! assert_eq!(game.swap_triple(), Err(ActionError::InsufficientStack { needed: 3, available: 1 }));
//! ```

pub mod controller;
pub mod error;
pub mod queue;
pub mod reserve;
pub mod rng;
pub mod snapshot;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use controller::{GameController, Outcome, SwapReport};
pub use error::{ActionError, QueueError, StackError};
pub use queue::PieceQueue;
pub use reserve::ReserveStack;
pub use rng::{KindSource, PieceGenerator, SimpleRng};
pub use snapshot::GameSnapshot;
