use rust_decimal::Decimal;
use std::fmt;

use crate::dto::Command;
use crate::stores::{Account, AccountId, AccountKind, Registry, RegistryConfig};
use crate::Error;

/// Result of a successfully processed [`Command`], rendered as the
/// feedback line shown to the user.
#[derive(Debug, PartialEq, Clone)]
pub enum Outcome {
    Opened { account: AccountId, kind: AccountKind },
    Deposited { account: AccountId, amount: Decimal },
    Withdrawn { account: AccountId, amount: Decimal },
    Balance { account: AccountId, balance: Decimal },
    /// Display strings of every account, in creation order.
    Accounts(Vec<String>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Opened { account, kind } => {
                write!(f, "Account created: {} ({})", account, kind)
            }
            Outcome::Deposited { account, amount } => {
                write!(f, "Deposited {} to {}", amount, account)
            }
            Outcome::Withdrawn { account, amount } => {
                write!(f, "Withdrawn {} from {}", amount, account)
            }
            Outcome::Balance { account, balance } => {
                write!(f, "{} Balance: {}", account, balance)
            }
            Outcome::Accounts(accounts) => {
                f.write_str("--- All Accounts ---")?;
                for account in accounts {
                    write!(f, "\n{}", account)?;
                }
                Ok(())
            }
        }
    }
}

/// In-process surface of the teller. Owns the account registry; every
/// operation runs to completion on the calling thread.
#[derive(Default)]
pub struct Engine {
    registry: Registry,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            registry: Registry::with_config(config),
        }
    }

    pub fn open_account(
        &mut self,
        holder: impl Into<String>,
        kind: AccountKind,
    ) -> Result<AccountId, Error> {
        self.registry.create_account(holder, kind)
    }

    pub fn deposit(&mut self, id: &str, amount: Decimal) -> Result<(), Error> {
        self.registry
            .get_mut(id)
            .ok_or(Error::AccountNotFound)?
            .deposit(amount)
    }

    pub fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<(), Error> {
        self.registry
            .get_mut(id)
            .ok_or(Error::AccountNotFound)?
            .withdraw(amount)
    }

    pub fn balance(&self, id: &str) -> Result<Decimal, Error> {
        self.registry
            .get(id)
            .map(Account::balance)
            .ok_or(Error::AccountNotFound)
    }

    pub fn get_account(&self, id: &str) -> Option<&Account> {
        self.registry.get(id)
    }

    /// Accounts in creation order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.registry.iter()
    }

    /// Display strings of all accounts, in creation order.
    pub fn list_accounts(&self) -> Vec<String> {
        self.registry.list()
    }

    pub fn process_command(&mut self, command: Command) -> Result<Outcome, Error> {
        match command {
            Command::Open { holder, kind } => {
                let account = self.open_account(holder, kind)?;
                Ok(Outcome::Opened { account, kind })
            }
            Command::Deposit { account, amount } => {
                self.deposit(account.as_str(), amount)?;
                Ok(Outcome::Deposited { account, amount })
            }
            Command::Withdraw { account, amount } => {
                self.withdraw(account.as_str(), amount)?;
                Ok(Outcome::Withdrawn { account, amount })
            }
            Command::Balance { account } => {
                let balance = self.balance(account.as_str())?;
                Ok(Outcome::Balance { account, balance })
            }
            Command::List => Ok(Outcome::Accounts(self.list_accounts())),
        }
    }
}
