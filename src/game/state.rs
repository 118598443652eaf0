//! Round phase.

/// Where the session is in the round lifecycle.
///
/// `Idle → Betting → PlayerTurn → DealerTurn → Resolved → Idle`.
/// `DealerTurn` and `Resolved` are passed through within a single action;
/// callers only ever observe `Idle`, `Betting`, or `PlayerTurn` between
/// actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No chips on the table.
    Idle,
    /// Chips placed, round not started.
    Betting,
    /// Cards dealt, waiting for hit or stand.
    PlayerTurn,
    /// Dealer is drawing.
    DealerTurn,
    /// Round settled, table about to be cleared.
    Resolved,
}

impl GamePhase {
    /// Returns whether chips may be placed.
    #[must_use]
    pub const fn accepts_chips(self) -> bool {
        matches!(self, Self::Idle | Self::Betting)
    }
}
