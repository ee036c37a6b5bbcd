//! Terminal input module (menu-facing).
//!
//! Maps one line typed at the menu prompt into a [`MenuChoice`]. It is
//! independent of how the line was read, so the menu loop and tests share it.

pub mod map;

pub use tetris_stack_types as types;

pub use map::{parse_choice, should_quit, MenuChoice};
