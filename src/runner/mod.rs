//! The runner is the text front end: it reads a command file, feeds each
//! command to an [`Engine`], reports the outcome of every command through
//! `tracing`, and writes the final account listing to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementation.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

use crate::dto::{Command, CommandRow};
use crate::{Engine, Error};

/// Turns a row into a command. An unknown account is reported before
/// anything else about the row, the same way a teller looks up the
/// account before asking for an amount.
fn parse_row(engine: &Engine, row: CommandRow) -> Result<Command, Error> {
    if row.command.targets_account() {
        if let Some(account) = &row.account {
            if engine.get_account(account.as_str()).is_none() {
                return Err(Error::AccountNotFound);
            }
        }
    }
    Command::try_from(row)
}

/// Validates and processes one command row. Rejections are reported and
/// otherwise ignored; they leave the engine untouched.
fn apply_row(engine: &mut Engine, row: CommandRow) {
    match parse_row(engine, row).and_then(|command| engine.process_command(command)) {
        Ok(outcome) => tracing::info!("{}", outcome),
        Err(err) => tracing::warn!(error = %err, "command rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CommandType;
    use crate::stores::{AccountId, AccountKind};
    use rust_decimal_macros::dec;

    fn row(command: CommandType) -> CommandRow {
        CommandRow {
            command,
            account: None,
            holder: None,
            kind: None,
            amount: None,
        }
    }

    fn account_row(command: CommandType, account: &str, amount: Option<&str>) -> CommandRow {
        CommandRow {
            account: Some(AccountId::from(account)),
            amount: amount.map(str::to_owned),
            ..row(command)
        }
    }

    #[test]
    fn test_apply_row_skips_rejections() {
        let mut engine = Engine::new();

        apply_row(
            &mut engine,
            CommandRow {
                holder: Some("Alice".to_owned()),
                kind: Some("savings".to_owned()),
                ..row(CommandType::Open)
            },
        );
        // Missing and malformed amounts are rejected before reaching the engine
        apply_row(&mut engine, account_row(CommandType::Deposit, "ACC1001", None));
        apply_row(
            &mut engine,
            account_row(CommandType::Deposit, "ACC1001", Some("abc")),
        );
        apply_row(
            &mut engine,
            account_row(CommandType::Deposit, "ACC1001", Some("900")),
        );
        apply_row(
            &mut engine,
            account_row(CommandType::Withdraw, "ACC1001", Some("401")),
        );
        // Empty holder names and unknown kinds never open an account
        apply_row(
            &mut engine,
            CommandRow {
                holder: Some(String::new()),
                kind: Some("standard".to_owned()),
                ..row(CommandType::Open)
            },
        );
        apply_row(
            &mut engine,
            CommandRow {
                holder: Some("Carol".to_owned()),
                kind: Some("checking".to_owned()),
                ..row(CommandType::Open)
            },
        );
        apply_row(&mut engine, row(CommandType::List));

        assert_eq!(engine.list_accounts(), vec!["ACC1001: Alice - 900"]);
        assert_eq!(engine.balance("ACC1001"), Ok(dec!(900)));
    }

    #[test]
    fn test_parse_row_unknown_account_first() {
        let mut engine = Engine::new();
        engine.open_account("Alice", AccountKind::Standard).unwrap();

        assert_eq!(
            parse_row(&engine, account_row(CommandType::Deposit, "ACC9999", None)),
            Err(Error::AccountNotFound)
        );
        assert_eq!(
            parse_row(
                &engine,
                account_row(CommandType::Withdraw, "ACC9999", Some("abc"))
            ),
            Err(Error::AccountNotFound)
        );
        assert_eq!(
            parse_row(&engine, account_row(CommandType::Deposit, "ACC1001", None)),
            Err(Error::InvalidCommand("missing amount"))
        );
        assert_eq!(
            parse_row(
                &engine,
                account_row(CommandType::Deposit, "ACC1001", Some("abc"))
            ),
            Err(Error::InvalidAmount)
        );
        assert_eq!(
            parse_row(&engine, account_row(CommandType::Balance, "ACC9999", None)),
            Err(Error::AccountNotFound)
        );
        assert_eq!(parse_row(&engine, row(CommandType::List)), Ok(Command::List));
    }
}
