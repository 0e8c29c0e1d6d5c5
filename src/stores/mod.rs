//! Storage layer for the teller. Provides:
//! - Accounts and their withdrawal policies ([`Account`], [`AccountKind`])
//! - The account registry with identifier allocation ([`Registry`])
//!
//! Everything is held in memory for the lifetime of the process.

mod accounts;
mod registry;

pub use accounts::{Account, AccountId, AccountKind, MINIMUM_RESERVE};
pub use registry::{Registry, RegistryConfig};
