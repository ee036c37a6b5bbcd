//! Terminal presentation module.
//!
//! A small, line-oriented rendering layer for the menu loop. Views build
//! styled lines without doing any I/O; the renderer turns them into crossterm
//! commands (or plain text) and writes them out.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every message testable as plain text
//! - Offer a JSON mode for scripted sessions

pub mod game_view;
pub mod json;
pub mod renderer;
pub mod style;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use game_view::GameView;
pub use renderer::{encode_lines_into, LineRenderer};
pub use style::{plain_text, piece_color, Line, Rgb, Span, SpanStyle};
