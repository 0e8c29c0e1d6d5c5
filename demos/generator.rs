//! This example generates a command file opening a number of accounts
//! (supplied as a command-line argument) and running a fixed script of
//! deposits, withdrawals and balance checks against each of them.
//!
//! The CSV file can then be used to test the `rusty-teller` crate.
//!
//! Example (100 accounts):
//! ```bash
//! cargo run --example generator 100 > data/100_accounts.csv
//! ```
//! ### Maths
//! All accounts are opened first, so account `i` (1-based) is `ACC{1000 + i}`.
//! Odd `i` are standard accounts, even `i` are savings accounts.
//! Each step below then runs once per account, in account order.
//!
//! **Step 1: Deposits**
//! Deposit 1000·i, then deposit 0 (rejected as an invalid amount).
//! Balance = 1000·i.
//!
//! **Step 2: Common withdrawal**
//! Withdraw 200·i. Balance = 800·i, which is at least the 500 reserve for any i.
//!
//! **Step 3: Kind-specific withdrawals**
//! - Standard (odd i): withdraw 300·i, leaving 500·i; then withdraw 600·i,
//!   rejected because it exceeds the balance.
//! - Savings (even i): withdraw 800·i − 500, leaving exactly the reserve;
//!   then withdraw 1, rejected because it would breach the reserve.
//!
//! **Step 4: Balance checks**
//! One balance query per account, plus one for `ACC{1001 + N}`, which was
//! never issued and is rejected as not found.
//!
//! **Final State for account i:**
//! - **Odd i:** standard, balance = 500·i.
//! - **Even i:** savings, balance = 500.

use csv::Writer;
use rust_decimal::Decimal;
use rusty_teller::{AccountId, AccountKind, CommandRow, CommandType};
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }
    let num_accounts: u64 = args[1].parse()?;

    let mut wtr = Writer::from_writer(std::io::stdout());

    for i in 1..=num_accounts {
        let kind = if i % 2 == 1 {
            AccountKind::Standard
        } else {
            AccountKind::Savings
        };
        wtr.serialize(CommandRow {
            command: CommandType::Open,
            account: None,
            holder: Some(format!("Holder{}", i)),
            kind: Some(kind.to_string()),
            amount: None,
        })?;
    }

    let steps: [fn(u64) -> (CommandType, Option<Decimal>); 6] = [
        |i| (CommandType::Deposit, Some(Decimal::from(1000 * i))),
        |_| (CommandType::Deposit, Some(Decimal::ZERO)),
        |i| (CommandType::Withdraw, Some(Decimal::from(200 * i))),
        |i| {
            if i % 2 == 1 {
                (CommandType::Withdraw, Some(Decimal::from(300 * i)))
            } else {
                (CommandType::Withdraw, Some(Decimal::from(800 * i - 500)))
            }
        },
        |i| {
            if i % 2 == 1 {
                (CommandType::Withdraw, Some(Decimal::from(600 * i)))
            } else {
                (CommandType::Withdraw, Some(Decimal::ONE))
            }
        },
        |_| (CommandType::Balance, None),
    ];

    for step in steps {
        for i in 1..=num_accounts {
            let (command, amount) = step(i);
            wtr.serialize(account_row(command, i, amount))?;
        }
    }
    wtr.serialize(account_row(CommandType::Balance, num_accounts + 1, None))?;

    wtr.flush()?;
    Ok(())
}

fn account_row(command: CommandType, i: u64, amount: Option<Decimal>) -> CommandRow {
    CommandRow {
        command,
        account: Some(AccountId::from(format!("ACC{}", 1000 + i))),
        holder: None,
        kind: None,
        amount: amount.map(|amount| amount.to_string()),
    }
}
