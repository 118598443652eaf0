//! A single-player blackjack table with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] type that runs the round flow:
//! chip betting, the deal, hit and stand, the dealer's draw, and payout
//! against a balance that is saved after every change. Transitions return
//! [`Event`]s for a [`Presenter`] to render; the crate does no drawing
//! itself.
//!
//! # Example
//!
//! ```
//! use bjrs_table::{GameSession, MemoryStore, SessionOptions};
//!
//! let mut session = GameSession::new(SessionOptions::default(), MemoryStore::new(), 42);
//! assert_eq!(session.balance(), 1000);
//! session.place_chip(100).unwrap();
//! assert_eq!(session.balance(), 900);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod store;

// Re-export main types
pub use card::{BACK_ASSET_ID, Card, CardFace, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, StartError, StoreError};
pub use event::{Event, Presenter, RUIN_MESSAGE, Seat, dispatch};
pub use game::{GamePhase, GameSession};
pub use hand::{Hand, HandScore, score};
pub use ledger::{Ledger, Settlement};
pub use options::{MAX_DEALER_STANDS_ON, MIN_DEALER_STANDS_ON, RoundingMode, SessionOptions};
pub use result::{Outcome, RoundResult};
#[cfg(feature = "std")]
pub use store::FileStore;
pub use store::{BalanceStore, MemoryStore};
