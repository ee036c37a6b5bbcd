//! Error types for the queue, the reserve stack and player actions.
//!
//! None of these are fatal: every failed action leaves the game untouched and
//! the caller decides how to report it.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("piece queue is empty")]
    Empty,
    #[error("piece queue is full")]
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("reserve stack is empty")]
    Empty,
    #[error("reserve stack is full")]
    Full,
}

/// Why a player action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no pieces to play: the queue is empty")]
    QueueEmpty,
    #[error("cannot add more pieces: the queue is full")]
    QueueFull,
    #[error("no reserved pieces: the reserve stack is empty")]
    StackEmpty,
    #[error("cannot reserve more pieces: the reserve stack is full")]
    StackFull,
    #[error("queue holds {available} pieces, {needed} are needed")]
    InsufficientQueue { needed: usize, available: usize },
    #[error("reserve stack holds {available} pieces, {needed} are needed")]
    InsufficientStack { needed: usize, available: usize },
}

impl ActionError {
    /// Short machine-friendly code
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::QueueEmpty => "queue_empty",
            ActionError::QueueFull => "queue_full",
            ActionError::StackEmpty => "stack_empty",
            ActionError::StackFull => "stack_full",
            ActionError::InsufficientQueue { .. } => "insufficient_queue",
            ActionError::InsufficientStack { .. } => "insufficient_stack",
        }
    }
}

impl From<QueueError> for ActionError {
    fn from(value: QueueError) -> Self {
        match value {
            QueueError::Empty => ActionError::QueueEmpty,
            QueueError::Full => ActionError::QueueFull,
        }
    }
}

impl From<StackError> for ActionError {
    fn from(value: StackError) -> Self {
        match value {
            StackError::Empty => ActionError::StackEmpty,
            StackError::Full => ActionError::StackFull,
        }
    }
}
