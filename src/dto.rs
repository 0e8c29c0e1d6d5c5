use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::stores::{Account, AccountId, AccountKind};
use crate::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Open,
    Deposit,
    Withdraw,
    Balance,
    List,
}

impl CommandType {
    /// Whether rows of this type name an existing account.
    pub fn targets_account(&self) -> bool {
        matches!(
            self,
            CommandType::Deposit | CommandType::Withdraw | CommandType::Balance
        )
    }
}

/// One row of a command file. Which fields are required depends on the
/// command type; see [`Command`].
///
/// `kind` and `amount` stay raw text here so that a bad value rejects the
/// row instead of failing the whole file.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CommandRow {
    pub command: CommandType,
    pub account: Option<AccountId>,
    pub holder: Option<String>,
    pub kind: Option<String>,
    pub amount: Option<String>,
}

/// A validated command, ready for the engine.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Open { holder: String, kind: AccountKind },
    Deposit { account: AccountId, amount: Decimal },
    Withdraw { account: AccountId, amount: Decimal },
    Balance { account: AccountId },
    List,
}

fn parse_amount(amount: Option<String>) -> Result<Decimal, Error> {
    let amount = amount.ok_or(Error::InvalidCommand("missing amount"))?;
    Decimal::from_str(&amount).map_err(|_| Error::InvalidAmount)
}

impl TryFrom<CommandRow> for Command {
    type Error = Error;

    /// Validation order: account first, then amount.
    fn try_from(row: CommandRow) -> Result<Self, Self::Error> {
        match row.command {
            CommandType::Open => {
                let holder = row
                    .holder
                    .filter(|holder| !holder.is_empty())
                    .ok_or(Error::InvalidCommand("missing holder name"))?;
                let kind = row
                    .kind
                    .ok_or(Error::InvalidCommand("missing account kind"))?
                    .parse()?;
                Ok(Command::Open { holder, kind })
            }
            CommandType::Deposit | CommandType::Withdraw => {
                let account = row
                    .account
                    .ok_or(Error::InvalidCommand("missing account"))?;
                let amount = parse_amount(row.amount)?;
                if row.command == CommandType::Deposit {
                    Ok(Command::Deposit { account, amount })
                } else {
                    Ok(Command::Withdraw { account, amount })
                }
            }
            CommandType::Balance => Ok(Command::Balance {
                account: row
                    .account
                    .ok_or(Error::InvalidCommand("missing account"))?,
            }),
            CommandType::List => Ok(Command::List),
        }
    }
}

/// One row of the account listing written at the end of a run.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountRow {
    pub account: AccountId,
    pub holder: String,
    pub kind: AccountKind,
    pub balance: Decimal,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            account: account.id().clone(),
            holder: account.holder().to_owned(),
            kind: account.kind(),
            balance: account.balance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse_csv_row(row: &str) -> Result<CommandRow, csv::Error> {
        let data_with_header = format!("command,account,holder,kind,amount\n{}", row);
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    fn parse_command(row: &str) -> Result<Command, Error> {
        Command::try_from(parse_csv_row(row).unwrap())
    }

    #[test]
    fn test_parse_open() {
        assert_eq!(
            parse_csv_row("open,,Alice,standard,").unwrap(),
            CommandRow {
                command: CommandType::Open,
                account: None,
                holder: Some("Alice".to_owned()),
                kind: Some("standard".to_owned()),
                amount: None,
            }
        );
    }

    #[test]
    fn test_parse_deposit() {
        assert_eq!(
            parse_csv_row("deposit, ACC1001 ,,,1000.50").unwrap(),
            CommandRow {
                command: CommandType::Deposit,
                account: Some(AccountId::from("ACC1001")),
                holder: None,
                kind: None,
                amount: Some("1000.50".to_owned()),
            }
        );
    }

    #[test]
    fn test_parse_balance_and_list() {
        let row = parse_csv_row("balance,ACC1002,,,").unwrap();
        assert_eq!(row.command, CommandType::Balance);
        assert_eq!(row.amount, None);

        let row = parse_csv_row("list,,,,").unwrap();
        assert_eq!(row.command, CommandType::List);
    }

    #[test]
    fn test_parse_invalid_command_type() {
        assert!(parse_csv_row("transfer,ACC1001,,,1").is_err());
    }

    #[test]
    fn test_bad_field_values_still_parse_as_rows() {
        assert_eq!(
            parse_csv_row("open,,Alice,checking,").unwrap().kind,
            Some("checking".to_owned())
        );
        assert_eq!(
            parse_csv_row("deposit,ACC1001,,,abc").unwrap().amount,
            Some("abc".to_owned())
        );
    }

    #[test]
    fn test_command_from_open_row() {
        assert_eq!(
            parse_command("open,,Alice,savings,"),
            Ok(Command::Open {
                holder: "Alice".to_owned(),
                kind: AccountKind::Savings,
            })
        );
        assert_eq!(
            parse_command("open,,Bob,Current,"),
            Ok(Command::Open {
                holder: "Bob".to_owned(),
                kind: AccountKind::Standard,
            })
        );
    }

    #[test]
    fn test_command_open_invalid_kind() {
        assert_eq!(
            parse_command("open,,Alice,checking,"),
            Err(Error::InvalidCommand("invalid account type"))
        );
    }

    #[test]
    fn test_command_open_requires_holder_and_kind() {
        assert_eq!(
            parse_command("open,,,standard,"),
            Err(Error::InvalidCommand("missing holder name"))
        );
        assert_eq!(
            parse_command("open,,Alice,,"),
            Err(Error::InvalidCommand("missing account kind"))
        );
    }

    #[test]
    fn test_command_invalid_amount_format() {
        assert_eq!(
            parse_command("deposit,ACC1001,,,abc"),
            Err(Error::InvalidAmount)
        );
        assert_eq!(
            parse_command("withdraw,ACC1001,,,12.3.4"),
            Err(Error::InvalidAmount)
        );
    }

    #[test]
    fn test_command_negative_amount_passes_parsing() {
        // Sign checks belong to the account, not the parser
        assert_eq!(
            parse_command("withdraw,ACC1001,,,-5"),
            Ok(Command::Withdraw {
                account: AccountId::from("ACC1001"),
                amount: dec!(-5),
            })
        );
    }

    #[test]
    fn test_command_mutations_require_account_and_amount() {
        assert_eq!(
            parse_command("deposit,,,,10"),
            Err(Error::InvalidCommand("missing account"))
        );
        assert_eq!(
            parse_command("withdraw,ACC1001,,,"),
            Err(Error::InvalidCommand("missing amount"))
        );
        assert_eq!(
            parse_command("withdraw,ACC1001,,,7"),
            Ok(Command::Withdraw {
                account: AccountId::from("ACC1001"),
                amount: dec!(7),
            })
        );
    }

    #[test]
    fn test_command_account_checked_before_amount() {
        assert_eq!(
            parse_command("deposit,,,,abc"),
            Err(Error::InvalidCommand("missing account"))
        );
        assert_eq!(
            parse_command("withdraw,,,,"),
            Err(Error::InvalidCommand("missing account"))
        );
    }

    #[test]
    fn test_command_balance_requires_account() {
        assert_eq!(
            parse_command("balance,,,,"),
            Err(Error::InvalidCommand("missing account"))
        );
    }

    #[test]
    fn test_command_list() {
        assert_eq!(parse_command("list,,,,"), Ok(Command::List));
        assert!(CommandType::Deposit.targets_account());
        assert!(!CommandType::List.targets_account());
        assert!(!CommandType::Open.targets_account());
    }
}
