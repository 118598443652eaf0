//! Error types for session operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while placing chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Chip amount is zero.
    #[error("chip amount is zero")]
    ZeroBet,
    /// Chip amount exceeds the balance.
    #[error("not enough balance to place this bet")]
    InsufficientFunds,
    /// A round is in progress.
    #[error("cannot place chips while a round is in progress")]
    InvalidState,
    /// The balance ran out; the session is over.
    #[error("the session is over")]
    SessionOver,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// No chips have been placed.
    #[error("please place a bet before starting the game")]
    NoBetPlaced,
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No chips have been placed.
    #[error("please place a bet before hitting")]
    NoBetPlaced,
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur while saving the balance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The balance file could not be written.
    #[error("failed to write balance file: {0}")]
    Write(String),
    /// The store refused the write.
    #[error("balance store unavailable")]
    Unavailable,
}
