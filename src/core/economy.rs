//! Binbucks economy gate.
//!
//! The balance is a plain client-side counter. Callers check
//! [`Wallet::can_afford`] before debiting; the wallet itself does not refuse
//! a debit, so the only way it goes negative is a caller skipping that check.

use serde::{Deserialize, Serialize};

/// Spendable binbucks balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    balance: i64,
}

impl Wallet {
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.balance >= i64::from(cost)
    }

    /// Take `cost` out of the balance. Precondition: `can_afford(cost)`.
    pub fn debit(&mut self, cost: u32) {
        self.balance -= i64::from(cost);
    }
}

/// One-time unlock for a paid game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unlock {
    cost: u32,
    unlocked: bool,
}

impl Unlock {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            unlocked: false,
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Pay the unlock cost once. Returns true if the game is unlocked afterwards.
    ///
    /// Idempotent: once unlocked, further calls succeed without debiting.
    pub fn unlock(&mut self, wallet: &mut Wallet) -> bool {
        if self.unlocked {
            return true;
        }
        if !wallet.can_afford(self.cost) {
            return false;
        }
        wallet.debit(self.cost);
        self.unlocked = true;
        true
    }
}

/// What a game charges to start.
///
/// Games with an unlock charge only the unlock cost on their first start and
/// the play cost on every start after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryFee {
    play_cost: u32,
    unlock: Option<Unlock>,
}

/// What a successful [`EntryFee::charge`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    Unlocked(u32),
    Played(u32),
}

impl Charge {
    pub fn amount(self) -> u32 {
        match self {
            Charge::Unlocked(n) | Charge::Played(n) => n,
        }
    }
}

impl EntryFee {
    /// A game that is always available for `play_cost`.
    pub fn play(play_cost: u32) -> Self {
        Self {
            play_cost,
            unlock: None,
        }
    }

    /// A game that must be unlocked once for `unlock_cost` before costing `play_cost`.
    pub fn locked(unlock_cost: u32, play_cost: u32) -> Self {
        Self {
            play_cost,
            unlock: Some(Unlock::new(unlock_cost)),
        }
    }

    pub fn play_cost(&self) -> u32 {
        self.play_cost
    }

    pub fn needs_unlock(&self) -> bool {
        self.unlock.is_some_and(|u| !u.is_unlocked())
    }

    /// Whether this game has an unlock and it has been paid.
    pub fn is_unlocked(&self) -> bool {
        self.unlock.map_or(true, |u| u.is_unlocked())
    }

    /// The cost of the next start.
    pub fn required_cost(&self) -> u32 {
        match self.unlock {
            Some(u) if !u.is_unlocked() => u.cost(),
            _ => self.play_cost,
        }
    }

    pub fn can_start(&self, wallet: &Wallet) -> bool {
        wallet.can_afford(self.required_cost())
    }

    /// Debit the wallet for one start, exactly once.
    ///
    /// Returns `None` and leaves the wallet untouched if the balance is short.
    pub fn charge(&mut self, wallet: &mut Wallet) -> Option<Charge> {
        if !self.can_start(wallet) {
            return None;
        }
        if let Some(unlock) = self.unlock.as_mut().filter(|u| !u.is_unlocked()) {
            let cost = unlock.cost();
            return unlock.unlock(wallet).then_some(Charge::Unlocked(cost));
        }
        wallet.debit(self.play_cost);
        Some(Charge::Played(self.play_cost))
    }
}
