//! Account registry: identifier allocation and the canonical set of accounts.

use std::collections::HashMap;

use super::accounts::{Account, AccountId, AccountKind};
use crate::Error;

/// Identifier scheme for a [`Registry`].
///
/// Identifiers are `id_prefix` followed by a sequence number that starts at
/// `first_sequence` and only ever increases, so no identifier repeats within
/// the lifetime of the registry. Once the sequence passes `u64::MAX` the
/// registry refuses to issue further identifiers.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub id_prefix: String,
    pub first_sequence: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_prefix: "ACC".to_owned(),
            first_sequence: 1001,
        }
    }
}

pub struct Registry {
    /// Accounts in creation order
    accounts: Vec<Account>,
    /// Position of each account in `accounts`
    index: HashMap<AccountId, usize>,
    config: RegistryConfig,
    /// `None` once the sequence is exhausted
    next_sequence: Option<u64>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            accounts: Vec::new(),
            index: HashMap::new(),
            next_sequence: Some(config.first_sequence),
            config,
        }
    }

    /// Issues the next identifier and advances the sequence.
    pub fn generate_id(&mut self) -> Result<AccountId, Error> {
        let sequence = self.next_sequence.ok_or(Error::IdentifiersExhausted)?;
        self.next_sequence = sequence.checked_add(1);
        Ok(AccountId::from(format!("{}{}", self.config.id_prefix, sequence)))
    }

    /// Creates a zero-balance account under a fresh identifier and returns it.
    pub fn create_account(
        &mut self,
        holder: impl Into<String>,
        kind: AccountKind,
    ) -> Result<AccountId, Error> {
        let id = self.generate_id()?;
        self.index.insert(id.clone(), self.accounts.len());
        self.accounts.push(Account::new(id.clone(), holder.into(), kind));
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.index.get(id).and_then(|&pos| self.accounts.get(pos))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        let pos = *self.index.get(id)?;
        self.accounts.get_mut(pos)
    }

    /// Accounts in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Display strings of all accounts, in creation order.
    pub fn list(&self) -> Vec<String> {
        self.accounts.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
