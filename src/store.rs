//! Balance persistence.
//!
//! The saved state is a single decimal integer. Anything that does not parse
//! as a positive integer counts as "no saved balance".

#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Loads and saves the player's balance.
pub trait BalanceStore {
    /// Returns the saved balance, or `None` if there is no valid one.
    fn load(&mut self) -> Option<usize>;

    /// Overwrites the saved balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance could not be written.
    fn save(&mut self, balance: usize) -> Result<(), StoreError>;
}

/// Parses saved balance text.
///
/// Surrounding whitespace is ignored. Empty, non-digit, zero, or
/// overflowing content yields `None`.
///
/// ```
/// use bjrs_table::store::parse_balance;
///
/// assert_eq!(parse_balance("500\n"), Some(500));
/// assert_eq!(parse_balance("-20"), None);
/// assert_eq!(parse_balance("0"), None);
/// ```
#[must_use]
pub fn parse_balance(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<usize>().ok().filter(|&balance| balance > 0)
}

/// An in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<usize>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            saved: None,
            saves: 0,
            fail_saves: false,
        }
    }

    /// Creates a store holding `balance`.
    #[must_use]
    pub const fn with_balance(balance: usize) -> Self {
        Self {
            saved: Some(balance),
            saves: 0,
            fail_saves: false,
        }
    }

    /// Makes every subsequent save fail.
    pub const fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Returns the last saved value.
    #[must_use]
    pub const fn saved(&self) -> Option<usize> {
        self.saved
    }

    /// Returns how many saves succeeded.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl BalanceStore for MemoryStore {
    fn load(&mut self) -> Option<usize> {
        self.saved.filter(|&balance| balance > 0)
    }

    fn save(&mut self, balance: usize) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable);
        }
        self.saved = Some(balance);
        self.saves += 1;
        Ok(())
    }
}

/// A store backed by a text file holding one decimal integer.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[cfg(feature = "std")]
impl FileStore {
    /// Creates a store for `path`. The file is not touched until the first
    /// load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "std")]
impl BalanceStore for FileStore {
    fn load(&mut self) -> Option<usize> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let balance = parse_balance(&text);
                if balance.is_none() {
                    log::debug!("ignoring invalid saved balance in {}", self.path.display());
                }
                balance
            }
            Err(err) => {
                log::debug!("no saved balance at {}: {err}", self.path.display());
                None
            }
        }
    }

    fn save(&mut self, balance: usize) -> Result<(), StoreError> {
        std::fs::write(&self.path, balance.to_string())
            .map_err(|err| StoreError::Write(format!("{}: {err}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_signs_and_garbage() {
        assert_eq!(parse_balance(" 1200 "), Some(1200));
        assert_eq!(parse_balance("+5"), None);
        assert_eq!(parse_balance("12.5"), None);
        assert_eq!(parse_balance("abc"), None);
        assert_eq!(parse_balance(""), None);
        assert_eq!(parse_balance("99999999999999999999999999"), None);
    }

    #[test]
    fn memory_store_can_fail_saves() {
        let mut store = MemoryStore::with_balance(300);
        assert_eq!(store.load(), Some(300));

        store.fail_saves(true);
        assert!(matches!(store.save(10), Err(StoreError::Unavailable)));
        assert_eq!(store.saved(), Some(300));

        store.fail_saves(false);
        store.save(10).unwrap();
        assert_eq!(store.load(), Some(10));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn memory_store_treats_zero_as_missing() {
        let mut store = MemoryStore::with_balance(0);
        assert_eq!(store.load(), None);
    }
}
