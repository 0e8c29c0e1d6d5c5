pub mod csv_utils;
pub mod dto;
mod engine;
mod error;
pub mod logging;
mod runner;
pub mod stores;

pub use dto::{AccountRow, Command, CommandRow, CommandType};
pub use engine::{Engine, Outcome};
pub use error::Error;
pub use runner::{run, run_async};
pub use stores::{Account, AccountId, AccountKind, RegistryConfig, MINIMUM_RESERVE};
