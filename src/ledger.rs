//! Balance bookkeeping and payouts.

use crate::error::{BetError, StoreError};
use crate::options::{RoundingMode, SessionOptions};
use crate::result::Outcome;
use crate::store::BalanceStore;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// The result of applying an outcome to the balance.
#[derive(Debug)]
pub struct Settlement {
    /// Amount credited (stake included).
    pub credit: usize,
    /// Balance after the credit.
    pub balance: usize,
    /// Whether the balance ran out.
    pub ruined: bool,
    /// Set if the new balance could not be saved.
    pub persist_error: Option<StoreError>,
}

/// Owns the balance and keeps the store in sync with it.
#[derive(Debug)]
pub struct Ledger<S> {
    balance: usize,
    store: S,
    blackjack_pays: f64,
    rounding_blackjack: RoundingMode,
    ruined: bool,
}

impl<S: BalanceStore> Ledger<S> {
    /// Opens the ledger, loading the saved balance or falling back to the
    /// configured starting balance.
    #[must_use]
    pub fn open(mut store: S, options: &SessionOptions) -> Self {
        let balance = store.load().unwrap_or_else(|| {
            log::info!(
                "no saved balance, starting with {}",
                options.starting_balance
            );
            options.starting_balance
        });

        Self {
            balance,
            store,
            blackjack_pays: options.blackjack_pays,
            rounding_blackjack: options.rounding_blackjack,
            ruined: false,
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns whether the session has ended in ruin.
    #[must_use]
    pub const fn is_ruined(&self) -> bool {
        self.ruined
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the backing store mutably.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Moves `amount` out of the balance and persists the result.
    ///
    /// Returns any persistence error alongside the successful debit; the
    /// in-memory balance is authoritative either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, exceeds the balance, or the
    /// session is over. The balance is unchanged in that case.
    pub fn debit(&mut self, amount: usize) -> Result<Option<StoreError>, BetError> {
        if self.ruined {
            return Err(BetError::SessionOver);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        Ok(self.persist())
    }

    /// Computes the credit owed for `bet` under `outcome`, saturating at
    /// `usize::MAX`.
    ///
    /// ```
    /// use bjrs_table::{Ledger, MemoryStore, Outcome, SessionOptions};
    ///
    /// let ledger = Ledger::open(MemoryStore::new(), &SessionOptions::default());
    /// assert_eq!(ledger.payout(100, Outcome::Blackjack), 250);
    /// assert_eq!(ledger.payout(100, Outcome::PlayerWin { natural: false }), 200);
    /// assert_eq!(ledger.payout(100, Outcome::Push), 100);
    /// assert_eq!(ledger.payout(100, Outcome::DealerWin), 0);
    /// ```
    #[must_use]
    pub fn payout(&self, bet: usize, outcome: Outcome) -> usize {
        if outcome.pays_blackjack() {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let winnings = (bet as f64) * self.blackjack_pays;
            return bet.saturating_add(round_amount(winnings, self.rounding_blackjack));
        }

        match outcome {
            Outcome::DealerBust { .. } | Outcome::PlayerWin { .. } => bet.saturating_mul(2),
            Outcome::Push => bet,
            Outcome::Blackjack | Outcome::DealerWin | Outcome::PlayerBust => 0,
        }
    }

    /// Credits the payout for `outcome`, persists, and checks for ruin.
    pub fn apply_outcome(&mut self, bet: usize, outcome: Outcome) -> Settlement {
        let credit = self.payout(bet, outcome);
        self.balance = self.balance.saturating_add(credit);
        let persist_error = self.persist();

        if self.balance == 0 {
            self.ruined = true;
            log::info!("balance exhausted, session over");
        }

        log::info!(
            "settled {outcome:?}: bet {bet}, credit {credit}, balance {}",
            self.balance
        );

        Settlement {
            credit,
            balance: self.balance,
            ruined: self.ruined,
            persist_error,
        }
    }

    fn persist(&mut self) -> Option<StoreError> {
        match self.store.save(self.balance) {
            Ok(()) => None,
            Err(err) => {
                log::warn!("could not save balance {}: {err}", self.balance);
                Some(err)
            }
        }
    }
}
