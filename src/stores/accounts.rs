use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Floor a savings account may never be withdrawn below.
pub const MINIMUM_RESERVE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Opaque account identifier, assigned once by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// May be withdrawn down to zero.
    #[serde(alias = "current")]
    Standard,
    /// Keeps [`MINIMUM_RESERVE`] on withdrawal.
    Savings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::Savings => "savings",
        }
    }
}

/// Parses the kind names accepted from users, ignoring case.
/// `current` is the other name for a standard account.
impl FromStr for AccountKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "current" => Ok(AccountKind::Standard),
            "savings" => Ok(AccountKind::Savings),
            _ => Err(Error::InvalidCommand("invalid account type")),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: Decimal,
    kind: AccountKind,
}

impl Account {
    pub(crate) fn new(id: AccountId, holder: String, kind: AccountKind) -> Self {
        Self {
            id,
            holder,
            balance: Decimal::ZERO,
            kind,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Adds a strictly positive amount to the balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        Ok(())
    }

    /// Removes a strictly positive amount, subject to the floor of the
    /// account's kind: zero for standard accounts, [`MINIMUM_RESERVE`] for
    /// savings accounts.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount);
        }
        let floor = match self.kind {
            AccountKind::Standard => Decimal::ZERO,
            AccountKind::Savings => MINIMUM_RESERVE,
        };
        let remaining = self.balance - amount;
        if remaining < floor {
            return Err(Error::InsufficientFunds);
        }
        self.balance = remaining;
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.id, self.holder, self.balance)
    }
}
